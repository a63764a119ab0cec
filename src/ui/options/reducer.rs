use crate::ui::mvi::Reducer;
use crate::ui::options::intent::OptionListIntent;
use crate::ui::options::state::OptionListState;

pub struct OptionListReducer;

impl Reducer for OptionListReducer {
    type State = OptionListState;
    type Intent = OptionListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OptionListIntent::Load { len, focused } => OptionListState {
                len,
                focused: focused.min(len.saturating_sub(1)),
            },
            OptionListIntent::MoveUp if !state.is_empty() => {
                let focused = if state.focused == 0 {
                    state.len - 1
                } else {
                    state.focused - 1
                };
                OptionListState { focused, ..state }
            }
            OptionListIntent::MoveDown if !state.is_empty() => {
                let focused = if state.focused + 1 >= state.len {
                    0
                } else {
                    state.focused + 1
                };
                OptionListState { focused, ..state }
            }
            // Moving in an empty list
            _ => state,
        }
    }
}
