//! Error types shared by the picker components.

use thiserror::Error;

use crate::dialog::DialogState;

/// Contract errors raised by the color math, sliders and dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("Invalid color format: {0:?} (expected 6 hex digits)")]
    InvalidColorFormat(String),
    #[error("Invalid gradient: need at least 2 stops, got {stops}")]
    InvalidGradient { stops: usize },
    #[error("Cannot {operation} while dialog is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: DialogState,
    },
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for picker operations.
pub type PickerResult<T> = Result<T, PickerError>;
