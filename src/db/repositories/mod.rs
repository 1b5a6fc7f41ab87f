pub mod boards;
pub mod issues;
pub mod metrics;
pub mod report_series;
pub mod reports;
pub mod swimlane_groups;
pub mod swimlanes;
pub mod user_settings;
pub mod users;
