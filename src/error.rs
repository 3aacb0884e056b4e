// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
}

/// Failures while talking to the remote image service.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// The request URL could not be built from the configured base URL
    InvalidUrl(String),

    /// Connection, redirect or timeout failure
    Request(String),

    /// The service answered with a non-success status code
    Status(u16),

    /// The response body could not be read
    Body(String),

    /// No HTTP client could be created at startup
    ClientUnavailable,
}

impl HttpError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            HttpError::InvalidUrl(_) => "error-fetch-invalid-url",
            HttpError::Request(_) => "error-fetch-request",
            HttpError::Status(_) => "error-fetch-status",
            HttpError::Body(_) => "error-fetch-body",
            HttpError::ClientUnavailable => "error-fetch-client",
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error reaches the UI.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(e) => e.i18n_key(),
            Error::Io(_) | Error::Config(_) => "error-fetch-request",
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Request(msg) => write!(f, "Request failed: {}", msg),
            HttpError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            HttpError::Body(msg) => write!(f, "Could not read response body: {}", msg),
            HttpError::ClientUnavailable => write!(f, "HTTP client unavailable"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let http = if let Some(status) = err.status() {
            HttpError::Status(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Request(err.to_string())
        };
        Error::Http(http)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
