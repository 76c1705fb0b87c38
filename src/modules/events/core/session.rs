// Admin session flag and the placeholder credential check.
//
// The check is a literal comparison against a hardcoded pair. It gates which views the
// presentation layer offers; it is not an authentication mechanism.

use serde::Serialize;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "1234";

/// Persisted form of a logged in session under the `adminLoggedIn` key.
pub const LOGGED_IN_FLAG: &str = "true";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub admin_logged_in: bool,
}

impl Session {
    pub fn from_flag(flag: Option<&str>) -> Self {
        Self {
            admin_logged_in: flag == Some(LOGGED_IN_FLAG),
        }
    }
}

pub fn credentials_match(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}
