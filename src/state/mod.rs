//! Application state module

mod app_state;
mod forms;
mod status;

pub use app_state::*;
pub use forms::*;
pub use status::*;
