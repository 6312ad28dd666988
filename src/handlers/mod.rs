pub mod debug;
pub mod diary_handler;
pub mod health;
pub mod metrics;
pub mod references_handler;
pub mod skills_handler;

pub use debug::debug_handler;
pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
