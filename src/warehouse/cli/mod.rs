//! Console layer: the only part of the crate that touches stdin/stdout.
//!
//! - `menu`: the numbered menu as a typed enum
//! - `prompt`: typed, retrying line prompts
//! - `controller`: the menu loop and its command → handler mapping
//! - `print`: tables and colored messages

mod controller;
mod menu;
mod print;
mod prompt;

pub use controller::Controller;
pub use prompt::Prompter;
