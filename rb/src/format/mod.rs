//! Attempt result and announcement formatting

mod announcement;
mod attempt;

pub use announcement::announcement;
pub use attempt::{MbldAttempt, decode_mbld, format_attempt};
