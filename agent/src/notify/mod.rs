//! Local notification surface: payload construction and desktop dispatch.

pub mod dispatch;
pub mod types;

pub use dispatch::{DesktopDispatch, NotificationDispatch};
pub use types::{LocalNotification, NOTIFICATION_BODY, kind_title};
