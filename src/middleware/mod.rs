pub mod identity;
pub mod logger;

pub use identity::CurrentUser;
pub use logger::{REQUEST_ID_HEADER, request_tracking_middleware};
