//! Tests for the auth module

use super::*;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    auth.apply(client.get("https://example.com/api"))
        .build()
        .unwrap()
}

#[test]
fn test_no_auth() {
    let req = build(&Authenticator::new(AuthConfig::None));
    assert!(req.headers().get("Authorization").is_none());
}

#[test]
fn test_token_scheme() {
    let req = build(&Authenticator::new(AuthConfig::token("abc123")));
    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Token token=abc123"
    );
}

#[test]
fn test_bearer_scheme() {
    let req = build(&Authenticator::new(AuthConfig::bearer("tok")));
    assert_eq!(req.headers().get("Authorization").unwrap(), "Bearer tok");
}

#[test]
fn test_custom_header() {
    let req = build(&Authenticator::new(AuthConfig::Header {
        name: "X-API-Key".to_string(),
        value: "secret".to_string(),
    }));
    assert_eq!(req.headers().get("X-API-Key").unwrap(), "secret");
}

#[test]
fn test_debug_redacts_credential() {
    let rendered = format!("{:?}", AuthConfig::token("super-secret"));
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("***"));
}

#[test]
fn test_scheme_deserialize() {
    let scheme: AuthScheme = serde_json::from_str("\"bearer\"").unwrap();
    assert_eq!(scheme, AuthScheme::Bearer);
    assert!(AuthConfig::default().is_none());
}
