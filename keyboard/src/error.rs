use core::fmt;

/// Lifecycle errors of the process-wide keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardError {
    /// `init` was called more than once
    AlreadyInitialized,
    /// The global keyboard was used before `init`
    Uninitialized,
}

impl fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardError::AlreadyInitialized => write!(f, "keyboard already initialized"),
            KeyboardError::Uninitialized => write!(f, "keyboard not initialized"),
        }
    }
}
