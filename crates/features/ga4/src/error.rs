use std::borrow::Cow;

/// GA4 slice error type.
#[derive(Debug, thiserror::Error)]
pub enum Ga4Error {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("GA4 error: {message}")]
    Internal { message: Cow<'static, str> },
}
