use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Username is required and must be a non-empty string")]
    MissingUsername,

    #[error("Invalid GitHub username format: {0}")]
    InvalidUsername(String),

    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Invalid skill level: {0}")]
    InvalidSkillLevel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status an embedding surface should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingUsername | Error::InvalidUsername(_) => 400,
            Error::UserNotFound(_) => 404,
            Error::RateLimited => 429,
            _ => 500,
        }
    }

    /// Client-facing message for this error. Internal detail (upstream bodies,
    /// network causes) stays in the `Display` form and the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            Error::MissingUsername => "Username is required and must be a non-empty string",
            Error::InvalidUsername(_) => "Invalid GitHub username format",
            Error::UserNotFound(_) => "GitHub user not found",
            Error::RateLimited => {
                "GitHub API rate limit exceeded. Please provide a personal access token."
            }
            _ => "An error occurred while analyzing the profile",
        }
    }

    /// Error response body: `{"error": "<client message>"}`.
    pub fn error_body(&self) -> serde_json::Value {
        json!({ "error": self.client_message() })
    }
}
