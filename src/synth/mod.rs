// Record synthesis — fans a single query out into one synthetic profile
// record per platform. No network, no persistence: the "results" are
// procedurally generated, and that is the point.

pub mod platform;
pub mod record;

pub use platform::Platform;
pub use record::{generate, generate_with, normalize_query, Record, RiskLevel};
