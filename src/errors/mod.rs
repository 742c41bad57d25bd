use anyhow::Context as _;
use thiserror::Error;

/// Failures raised while normalizing raw chess.com records
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing [{0}] tag in movetext")]
    MissingTag(&'static str),

    #[error("player '{username}' not found on a side with recorded moves")]
    UnresolvedPerspective { username: String },

    #[error("missing statistics for {0}")]
    MissingStat(String),
}

impl NormalizeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NormalizeError::malformed("no white").to_string(),
            "malformed input: no white"
        );
        assert_eq!(
            NormalizeError::MissingTag("EndDate").to_string(),
            "missing [EndDate] tag in movetext"
        );
    }

    #[test]
    fn test_parse_context_wraps_message() {
        let result: Result<u8, std::num::ParseIntError> = "x".parse::<u8>();
        let err = with_parse_context(result, "rating").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse rating");
    }
}
