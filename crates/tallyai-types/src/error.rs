use thiserror::Error;

/// Errors related to the past-chat catalog.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat '{0}' not found")]
    NotFound(String),
}

/// Errors from talking to a Tally server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("tally server returned HTTP {status}")]
    Http { status: u16 },

    #[error("invalid tally request: {0}")]
    InvalidRequest(String),
}

/// Errors from loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_http_error_message() {
        let err = TallyError::Http { status: 503 };
        assert_eq!(err.to_string(), "tally server returned HTTP 503");
    }

    #[test]
    fn test_chat_not_found_message() {
        let err = ChatError::NotFound("9".to_string());
        assert_eq!(err.to_string(), "chat '9' not found");
    }
}
