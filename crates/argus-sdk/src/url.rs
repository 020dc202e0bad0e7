//! Resource path and URL construction helpers for the Argus API.
//!
//! Path builders are pure functions so every endpoint composes its path the
//! same way; [`build_request_url`] appends a path to the configured base URL.

use url::Url;

/// Root resource of the user endpoints.
pub const USERS_RESOURCE: &str = "/users";

/// Path of the user-by-ID endpoint.
pub fn build_user_by_id_path(id: u64) -> String {
    format!("{USERS_RESOURCE}/id/{id}")
}

/// Path of the user-by-username endpoint.
///
/// The username is percent-encoded so it always stays a single segment.
/// Callers must reject `.` and `..`, which encoding leaves unchanged.
pub fn build_user_by_username_path(username: &str) -> String {
    format!(
        "{USERS_RESOURCE}/username/{}",
        urlencoding::encode(username)
    )
}

/// Append a resource path to the base URL's path.
pub fn build_request_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    url.set_path(&format!("{base_path}/{path}"));

    url
}
