use std::borrow::Cow;

/// Livewire slice error type.
#[derive(Debug, thiserror::Error)]
pub enum LivewireError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Livewire error: {message}")]
    Internal { message: Cow<'static, str> },
}
