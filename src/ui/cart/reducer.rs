use crate::ui::cart::intent::CartIntent;
use crate::ui::cart::state::CartState;
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add { item } if item.is_available() => state.push(item),
            CartIntent::Add { .. } => state,
        }
    }
}
