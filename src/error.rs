use thiserror::Error;

/// Failure detail for backend collaborator calls. Logged at the controller
/// boundary and replaced there by a fixed user-facing message; never shown
/// raw.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Pre-flight rejection of a blank story prompt. Unlike [`ApiError`], the
/// display text is the user-facing message itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter a story prompt")]
pub struct BlankPrompt;
