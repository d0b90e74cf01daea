pub mod generator;
pub mod stats;

pub use generator::render_report;
pub use stats::{AggregatedPoint, Dashboard};
