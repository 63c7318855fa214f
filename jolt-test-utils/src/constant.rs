/// Identity-provider style user id used across tests.
pub static TEST_USER_ID: &str = "auth0|68f1c2aa41";

/// Server-generated guest id used across tests.
pub static TEST_GUEST_ID: &str = "guest_4f6c1d9e2b7a0358";
