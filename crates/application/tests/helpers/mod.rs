#![allow(dead_code)]

mod mock_resolver;

pub use mock_resolver::MockRecordResolver;

use pdns_backend_domain::{BackendRequest, RequestParameters};

pub fn lookup_request(qtype: &str, qname: &str) -> BackendRequest {
    BackendRequest::new("lookup").with_parameters(RequestParameters {
        qtype: Some(qtype.to_string()),
        qname: Some(qname.to_string()),
        ..Default::default()
    })
}

pub fn metadata_request(name: &str, kind: &str) -> BackendRequest {
    BackendRequest::new("getDomainMetadata").with_parameters(RequestParameters {
        name: Some(name.to_string()),
        kind: Some(kind.to_string()),
        ..Default::default()
    })
}
