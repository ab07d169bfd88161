//! Terminal front end for the calculator
//!
//! Keys and mouse clicks become [`Command`](crate::core::Command)s; the
//! screen shows the display, the pending operation and a clickable keypad.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS, TITLE};
