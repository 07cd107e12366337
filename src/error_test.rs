use super::*;

#[test]
fn status_error_matches_panel_wording() {
    let err = SendError::Status { status: 500 };
    assert_eq!(err.user_message(), "Sorry, error: HTTP error! status: 500");
}

#[test]
fn network_error_shows_description_verbatim() {
    let err = SendError::Network("connection refused".into());
    assert_eq!(err.to_string(), "connection refused");
    assert_eq!(err.user_message(), "Sorry, error: connection refused");
}

#[test]
fn parse_error_is_prefixed() {
    let err = SendError::Parse("missing field `reply`".into());
    assert_eq!(err.to_string(), "invalid reply: missing field `reply`");
}

#[test]
fn retryable_classification() {
    assert!(SendError::Network("reset".into()).is_retryable());
    assert!(SendError::Status { status: 503 }.is_retryable());
    assert!(SendError::Status { status: 429 }.is_retryable());
    assert!(!SendError::Status { status: 404 }.is_retryable());
    assert!(!SendError::Parse("eof".into()).is_retryable());
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::EmptyEndpoint.to_string(), "chat endpoint is empty");
    let err = ConfigError::InvalidValue { var: "CHAT_REQUEST_TIMEOUT_SECS", value: "abc".into() };
    assert_eq!(err.to_string(), "invalid value for CHAT_REQUEST_TIMEOUT_SECS: abc");
}
