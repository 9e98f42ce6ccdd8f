pub mod http;
pub mod logging;

pub use http::{TracedClientExt, TracedRequest, TRACEPARENT_HEADER};
pub use logging::init_tracing;
