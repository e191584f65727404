/// Errors from the admin client.
///
/// `Fetch` and `Submit` carry a detail string for logs only; the user is
/// shown the same generic message whether the network failed or the server
/// rejected the request.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Listing presets failed (network failure or unreadable body).
    #[error("Could not load presets: {0}")]
    Fetch(String),

    /// Creating or updating a preset failed (network or non-success status).
    #[error("Could not save preset: {0}")]
    Submit(String),

    /// The draft failed the form's required-field checks; nothing was sent.
    #[error("Invalid preset: {0}")]
    Invalid(String),

    /// Another controller operation is still in flight; nothing was sent.
    #[error("Another preset operation is already in progress")]
    Busy,

    /// The controller was disposed: either nothing was sent, or the response
    /// arrived afterwards and was discarded.
    #[error("Preset admin controller has been disposed")]
    Disposed,
}
