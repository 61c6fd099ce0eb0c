//! Credential verification.
//!
//! A single hardcoded credential pair. There are no user accounts, no
//! lockout, and no rate limiting; a failed attempt leaves only a debug-level
//! trace event.

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// Returns true only for the hardcoded credential pair.
///
/// Wrong username and wrong password are deliberately indistinguishable to
/// the caller.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    let ok = username == ADMIN_USERNAME && password == ADMIN_PASSWORD;
    if !ok {
        tracing::debug!(username, "login rejected");
    }
    ok
}
