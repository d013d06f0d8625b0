use serde::Serialize;

pub const DEFAULT_RECORD_TTL: u32 = 300;

/// A single answer entry of a `lookup` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRecord {
    pub qtype: String,
    pub qname: String,
    pub content: String,
    pub ttl: u32,
}

impl LookupRecord {
    pub fn new(
        qtype: impl Into<String>,
        qname: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            qtype: qtype.into(),
            qname: qname.into(),
            content: content.into(),
            ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyResult {
    Bool(bool),
    Records(Vec<LookupRecord>),
    Metadata(Vec<String>),
    Serial(u64),
}

/// Every reply on the wire is an object with a single `result` member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendReply {
    pub result: ReplyResult,
}

impl BackendReply {
    pub fn success() -> Self {
        Self {
            result: ReplyResult::Bool(true),
        }
    }

    pub fn failure() -> Self {
        Self {
            result: ReplyResult::Bool(false),
        }
    }

    pub fn records(records: Vec<LookupRecord>) -> Self {
        Self {
            result: ReplyResult::Records(records),
        }
    }

    pub fn metadata(values: Vec<String>) -> Self {
        Self {
            result: ReplyResult::Metadata(values),
        }
    }

    pub fn serial(serial: u64) -> Self {
        Self {
            result: ReplyResult::Serial(serial),
        }
    }
}
