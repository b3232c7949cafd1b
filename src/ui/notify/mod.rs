//! Non-blocking acknowledgements shown as toasts over the body.

mod intent;
mod reducer;
mod state;

pub use intent::NotifyIntent;
pub use reducer::NotifyReducer;
pub use state::{Notification, NotificationQueue, MAX_NOTIFICATIONS};
