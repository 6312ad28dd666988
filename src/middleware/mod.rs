pub mod metrics;
pub mod request_id;

pub use metrics::track_metrics;
pub use request_id::{request_id_middleware, RequestId};
