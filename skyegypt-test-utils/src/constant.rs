//! Placeholder values shared across tests. None of these are real credentials.

/// User agent the test backend client sends.
pub static TEST_USER_AGENT: &str = "skyegypt-tests/0.1 (+https://example.com/skyegypt)";

/// Bearer token the mock login endpoint issues and the list endpoints expect.
pub static TEST_AUTH_TOKEN: &str = "test-bearer-token";

pub static TEST_USERNAME: &str = "admin";

pub static TEST_PASSWORD: &str = "secret";
