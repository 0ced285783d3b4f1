pub mod http;
pub mod source;

pub use http::HttpBackend;
pub use source::VariationBackend;
