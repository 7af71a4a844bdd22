pub mod db;
pub mod models;
pub mod schema;
pub mod sink;

// Make test_helpers available for tests in this crate and dependent crates
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use models::JobRecord;
pub use sink::{JobSink, PgJobSink, SinkError};
