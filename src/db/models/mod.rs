// Sub-modules organized by functional domain
pub mod analytics;
pub mod api;
pub mod board;
pub mod issue;
pub mod metrics;
pub mod report;
pub mod swimlane;
pub mod user;

// Re-export all models so call sites can use `crate::db::models::Issue`

pub use analytics::*;
pub use api::*;
pub use board::*;
pub use issue::*;
pub use metrics::*;
pub use report::*;
pub use swimlane::*;
pub use user::*;
