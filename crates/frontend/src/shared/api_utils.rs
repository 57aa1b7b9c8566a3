//! API utilities for frontend-backend communication

/// Origin of the current page, used as API base when the configuration has none
///
/// # Returns
/// - Origin like "http://localhost:5173" or "https://backoffice.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    if let Ok(origin) = location.origin() {
        return origin;
    }
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}
