use crate::ui::mvi::Reducer;

use super::intent::NotifyIntent;
use super::state::{Notification, NotificationQueue, MAX_NOTIFICATIONS};

pub struct NotifyReducer;

impl Reducer for NotifyReducer {
    type State = NotificationQueue;
    type Intent = NotifyIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotifyIntent::Push { message, ticks } => {
                state.next_id += 1;
                state.entries.push_back(Notification {
                    id: state.next_id,
                    message,
                    remaining_ticks: ticks.max(1),
                });
                while state.entries.len() > MAX_NOTIFICATIONS {
                    state.entries.pop_front();
                }
                state
            }
            NotifyIntent::Tick => {
                for entry in state.entries.iter_mut() {
                    entry.remaining_ticks = entry.remaining_ticks.saturating_sub(1);
                }
                state.entries.retain(|entry| entry.remaining_ticks > 0);
                state
            }
            NotifyIntent::DismissOldest => {
                state.entries.pop_front();
                state
            }
        }
    }
}
