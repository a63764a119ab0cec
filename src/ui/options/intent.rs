use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum OptionListIntent {
    /// New step shown. `focused` is clamped into range.
    Load { len: usize, focused: usize },
    MoveUp,
    MoveDown,
}

impl Intent for OptionListIntent {}
