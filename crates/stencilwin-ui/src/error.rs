//! Error types for window operations.

use crate::window::WindowId;

/// Errors returned by window tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The handle does not refer to a live window.
    WindowNotFound(WindowId),
    /// The parent passed to a create call is not a live window.
    ParentNotFound(WindowId),
    /// All 255 top-level ids are in use.
    TooManyWindows,
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::WindowNotFound(id) => write!(f, "Window {:?} not found", id),
            UiError::ParentNotFound(id) => write!(f, "Parent window {:?} not found", id),
            UiError::TooManyWindows => write!(f, "Too many top-level windows open"),
        }
    }
}

impl std::error::Error for UiError {}

/// Result type for window operations.
pub type UiResult<T> = Result<T, UiError>;
