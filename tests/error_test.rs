//! Error taxonomy checks

use portfolio_ai::cli::failure_hint;
use portfolio_ai::error::{ErrorKind, PortfolioError};

/// Display is never empty
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("bad config".to_string()),
        PortfolioError::MissingApiKey,
        PortfolioError::ApiStatus { status: 500, message: "internal".to_string() },
        PortfolioError::ApiParse("empty response".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_missing_api_key_message() {
    let display = PortfolioError::MissingApiKey.to_string();

    assert!(display.contains("GEMINI_API_KEY"));
    assert!(display.contains("portfolio-ai config"));
}

#[test]
fn test_kinds() {
    assert_eq!(PortfolioError::MissingApiKey.kind(), ErrorKind::Configuration);
    assert_eq!(PortfolioError::Config("x".into()).kind(), ErrorKind::Configuration);
    assert_eq!(
        PortfolioError::ApiStatus { status: 429, message: String::new() }.kind(),
        ErrorKind::Transport
    );
    assert_eq!(PortfolioError::ApiParse("x".into()).kind(), ErrorKind::Parse);
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortfolioError = io_err.into();

    assert!(matches!(err, PortfolioError::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Other);
    assert!(err.to_string().contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PortfolioError = json_err.into();

    assert!(matches!(err, PortfolioError::JsonParse(_)));
}

/// common::Error is wrapped transparently and keeps its kind
#[test]
fn test_common_error_conversion() {
    let err: PortfolioError = portfolio_common::Error::Parse("bad tags".to_string()).into();
    assert!(matches!(err, PortfolioError::Common(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.to_string(), "Parse error: bad tags");

    let err: PortfolioError = portfolio_common::Error::DuplicateId("1".to_string()).into();
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn test_failure_hint_for_configuration() {
    assert!(failure_hint(ErrorKind::Configuration).contains("not configured"));
}
