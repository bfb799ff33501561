//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and interactive prompts.

mod prompt;
mod spinner;

pub use prompt::{confirm_action, is_interactive, prompt_text, read_line_answer};
pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_message};
