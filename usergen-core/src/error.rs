use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    UnexpectedStatus(u16),
    EmptyResults,
    InvalidUrl(String),
    JsonError(Box<dyn error::Error + Send + Sync>),
    TransportError(Box<dyn error::Error + Send + Sync>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedStatus(code) => write!(f, "Unexpected response status: {code}"),
            Self::EmptyResults => write!(f, "User not found"),
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            Self::JsonError(err) | Self::TransportError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        match err {
            ureq::Error::StatusCode(code) => Error::UnexpectedStatus(code),
            ureq::Error::Json(err) => Error::JsonError(Box::new(err)),
            ureq::Error::Io(err) => Error::IoError(err),
            err => Error::TransportError(Box::new(err)),
        }
    }
}
