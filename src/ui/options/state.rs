use crate::ui::mvi::UiState;

/// Focus within the option list of the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionListState {
    pub len: usize,
    pub focused: usize,
}

impl UiState for OptionListState {}

impl OptionListState {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Focused row, `None` when the list is empty.
    pub fn focused(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.focused)
    }
}
