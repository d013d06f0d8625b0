use serde::Deserialize;
use std::fmt;

use crate::DomainError;

/// One call from the DNS server, as sent over the backend socket.
///
/// `parameters` is a flat bag: every method reads only the fields it needs and
/// ignores the rest, so every field is optional and unknown fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendRequest {
    pub method: String,

    #[serde(default)]
    pub parameters: RequestParameters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestParameters {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub qtype: Option<String>,

    #[serde(default)]
    pub qname: Option<String>,

    #[serde(default)]
    pub remote: Option<String>,

    #[serde(default)]
    pub local: Option<String>,

    #[serde(default, rename = "real-remote")]
    pub real_remote: Option<String>,

    #[serde(default, rename = "zone-id")]
    pub zone_id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub kind: Option<String>,
}

impl BackendRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            parameters: RequestParameters::default(),
        }
    }

    pub fn with_parameters(mut self, parameters: RequestParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| DomainError::InvalidRequest(e.to_string()))
    }

    pub fn backend_method(&self) -> BackendMethod {
        BackendMethod::parse(&self.method)
    }

    pub fn qtype(&self) -> &str {
        self.parameters.qtype.as_deref().unwrap_or_default()
    }

    pub fn qname(&self) -> &str {
        self.parameters.qname.as_deref().unwrap_or_default()
    }

    pub fn metadata_kind(&self) -> MetadataKind {
        MetadataKind::parse(self.parameters.kind.as_deref().unwrap_or_default())
    }
}

/// Methods this backend answers. Anything else is kept verbatim so it can be
/// logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMethod {
    Initialize,
    Lookup,
    GetDomainMetadata,
    CalculateSoaSerial,
    Unsupported(String),
}

impl BackendMethod {
    pub fn parse(method: &str) -> Self {
        match method {
            "initialize" => Self::Initialize,
            "lookup" => Self::Lookup,
            "getDomainMetadata" => Self::GetDomainMetadata,
            "calculateSOASerial" => Self::CalculateSoaSerial,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Initialize => "initialize",
            Self::Lookup => "lookup",
            Self::GetDomainMetadata => "getDomainMetadata",
            Self::CalculateSoaSerial => "calculateSOASerial",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for BackendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataKind {
    Presigned,
    SoaEdit,
    Unsupported(String),
}

impl MetadataKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "PRESIGNED" => Self::Presigned,
            "SOA-EDIT" => Self::SoaEdit,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Presigned => "PRESIGNED",
            Self::SoaEdit => "SOA-EDIT",
            Self::Unsupported(kind) => kind,
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
