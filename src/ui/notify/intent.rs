use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotifyIntent {
    Push { message: String, ticks: u32 },
    /// One tick of the event loop elapsed.
    Tick,
    /// Remove the oldest notification.
    DismissOldest,
}

impl Intent for NotifyIntent {}
