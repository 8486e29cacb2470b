//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time via the `BACKEND_URL`
//! environment variable (e.g. `BACKEND_URL=https://stories.example.com trunk
//! build`); when unset the client talks to its own origin. The access
//! password is a fixed soft gate for family sharing, not a security boundary.

/// Secret accepted by the password gate.
pub const ACCESS_PASSWORD: &str = "bedtime123";

/// sessionStorage key marking the gate as unlocked for this browser session.
/// Written on a successful login, read back on mount so a reload within the
/// same session does not re-prompt. Cleared by the browser when the session
/// ends; the client never removes it itself.
pub const AUTH_SESSION_KEY: &str = "bedtimeAuth";

const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Prefix for every backend collaborator endpoint.
pub fn api_base() -> String {
    format!("{BACKEND_URL}/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_api_prefix() {
        assert!(api_base().ends_with("/api"));
    }
}
