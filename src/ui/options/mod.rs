//! Focusable option list shared by the selection steps.

mod intent;
mod reducer;
mod state;

pub use intent::OptionListIntent;
pub use reducer::OptionListReducer;
pub use state::OptionListState;
