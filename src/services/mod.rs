pub mod analytics_service;
pub mod swimlanes_service;

pub use analytics_service::AnalyticsService;
pub use swimlanes_service::SwimlanesService;
