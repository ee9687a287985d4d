use std::fmt;

use pantry_core::{Recipe, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatalogFetched {
        token: RequestToken,
        result: Result<Vec<Recipe>, FetchError>,
    },
    RecipeLookedUp {
        token: RequestToken,
        result: Result<Option<Recipe>, FetchError>,
    },
    CategoriesFetched {
        result: Result<Vec<String>, FetchError>,
    },
    SearchDebounceElapsed {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl FailureKind {
    /// Transport failures worth another attempt; client errors and bad payloads are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FailureKind::Timeout | FailureKind::Network => true,
            FailureKind::HttpStatus(code) => *code >= 500 || *code == 429,
            FailureKind::InvalidUrl | FailureKind::TooLarge { .. } | FailureKind::Decode => false,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
