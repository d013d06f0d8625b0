mod record_resolver;

pub use record_resolver::RecordResolver;
