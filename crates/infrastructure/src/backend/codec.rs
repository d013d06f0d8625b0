use bytes::{Buf, Bytes, BytesMut};
use pdns_backend_domain::config::ProtocolConfig;
use pdns_backend_domain::{BackendReply, BackendRequest};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// One complete unit pulled off the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    Request { request: BackendRequest, payload: Bytes },
    Malformed { payload: Bytes, reason: String },
}

impl InboundFrame {
    fn malformed(payload: BytesMut, reason: impl Into<String>) -> Self {
        Self::Malformed {
            payload: payload.freeze(),
            reason: reason.into(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Request { payload, .. } | Self::Malformed { payload, .. } => payload,
        }
    }
}

/// Frames the backend wire protocol.
///
/// Requests are bare JSON objects with no length prefix; a frame ends where
/// the top-level value ends. Input is buffered across reads, so a request may
/// arrive in pieces and several requests may share one read. Broken input is
/// surfaced as [`InboundFrame::Malformed`] and skipped up to the next newline
/// or `{`, which keeps the connection usable.
///
/// An unfinished value never swallows the request after it: once a newline
/// follows it, or a complete request starts inside it, the unfinished part is
/// reported as malformed and decoding restarts there.
#[derive(Debug, Clone)]
pub struct BackendCodec {
    max_frame_size: usize,
    line_terminated: bool,
}

impl BackendCodec {
    pub fn new(max_frame_size: usize, line_terminated: bool) -> Self {
        Self {
            max_frame_size,
            line_terminated,
        }
    }

    pub fn from_config(config: &ProtocolConfig) -> Self {
        Self::new(config.max_frame_size, config.line_terminated)
    }
}

impl Default for BackendCodec {
    fn default() -> Self {
        Self::from_config(&ProtocolConfig::default())
    }
}

fn resync_offset(buf: &[u8]) -> usize {
    buf.iter()
        .skip(1)
        .position(|&b| b == b'\n' || b == b'{')
        .map(|pos| pos + 1)
        .unwrap_or(buf.len())
}

/// Offset where an unfinished value should be abandoned, if any.
///
/// A raw newline can only sit between tokens, so an unfinished value is
/// cut at the first one. Otherwise it is cut where a complete request
/// begins inside it.
fn restart_offset(buf: &[u8]) -> Option<usize> {
    if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
        return Some(pos);
    }

    buf.iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &b)| b == b'{')
        .map(|(pos, _)| pos)
        .find(|&pos| starts_request(&buf[pos..]))
}

fn starts_request(buf: &[u8]) -> bool {
    serde_json::Deserializer::from_slice(buf)
        .into_iter::<serde_json::Value>()
        .next()
        .and_then(Result::ok)
        .is_some_and(|value| BackendRequest::from_value(value).is_ok())
}

impl Decoder for BackendCodec {
    type Item = InboundFrame;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<InboundFrame>, io::Error> {
        let leading = src.iter().take_while(|b| b.is_ascii_whitespace()).count();
        src.advance(leading);

        if src.is_empty() {
            return Ok(None);
        }

        let (parsed, consumed) = {
            let mut values =
                serde_json::Deserializer::from_slice(&src[..]).into_iter::<serde_json::Value>();
            let parsed = values.next();
            (parsed, values.byte_offset())
        };

        match parsed {
            Some(Ok(value)) => {
                let payload = src.split_to(consumed);

                Ok(Some(match BackendRequest::from_value(value) {
                    Ok(request) => InboundFrame::Request {
                        request,
                        payload: payload.freeze(),
                    },
                    Err(e) => InboundFrame::malformed(payload, e.to_string()),
                }))
            }
            Some(Err(e)) if e.is_eof() => {
                if let Some(pos) = restart_offset(src) {
                    let payload = src.split_to(pos);
                    return Ok(Some(InboundFrame::malformed(payload, "unterminated request")));
                }

                if src.len() > self.max_frame_size {
                    let payload = src.split();
                    return Ok(Some(InboundFrame::malformed(
                        payload,
                        format!("request exceeds {} bytes", self.max_frame_size),
                    )));
                }
                Ok(None)
            }
            Some(Err(e)) => {
                let skip = resync_offset(src);
                let payload = src.split_to(skip);
                Ok(Some(InboundFrame::malformed(payload, e.to_string())))
            }
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<InboundFrame>, io::Error> {
        if let Some(frame) = self.decode(buf)? {
            return Ok(Some(frame));
        }

        if buf.is_empty() {
            return Ok(None);
        }

        let payload = buf.split();
        Ok(Some(InboundFrame::malformed(
            payload,
            "connection closed mid-request",
        )))
    }
}

impl Encoder<BackendReply> for BackendCodec {
    type Error = io::Error;

    fn encode(&mut self, reply: BackendReply, dst: &mut BytesMut) -> Result<(), io::Error> {
        let json = serde_json::to_vec(&reply).map_err(io::Error::other)?;
        dst.reserve(json.len() + 1);
        dst.extend_from_slice(&json);
        if self.line_terminated {
            dst.extend_from_slice(b"\n");
        }
        Ok(())
    }
}
