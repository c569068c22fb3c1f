use thiserror::Error;

pub type Result<T> = std::result::Result<T, HhError>;

#[derive(Debug, Error)]
pub enum HhError {
    /// Transport-level failure (connection, timeout) or an undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("HH API returned status {status}: {message}")]
    Api { status: u16, message: String },
}
