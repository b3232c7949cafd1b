use crate::ui::mvi::UiState;
use std::collections::VecDeque;

/// Older notifications are dropped beyond this many.
pub const MAX_NOTIFICATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub remaining_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationQueue {
    pub(super) entries: VecDeque<Notification>,
    pub(super) next_id: u64,
}

impl UiState for NotificationQueue {}

impl NotificationQueue {
    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
