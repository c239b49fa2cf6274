//! Sidebar avatar selection.
//!
//! A cached avatar URL always wins. Without one, a sidebar that still shows
//! the application logo keeps it; anything else gets an initials image from
//! the avatar service, keyed only by the display name so the same user gets
//! the same image on every page.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config::ClientConfig;

const BACKGROUND: &str = "4f46e5";
const FOREGROUND: &str = "ffffff";

/// Initials-image URL for `name`.
pub fn generated_avatar_url(service_url: &str, name: &str) -> String {
    format!(
        "{service_url}?name={}&background={BACKGROUND}&color={FOREGROUND}",
        urlencoding::encode(name.trim())
    )
}

/// Whether `src` points at the application logo. Browsers report absolute
/// URLs for image sources, so a suffix match counts when it starts on a
/// path segment boundary.
pub fn is_default_logo(src: &str, logo_src: &str) -> bool {
    if logo_src.is_empty() {
        return false;
    }
    match src.strip_suffix(logo_src) {
        Some("") => true,
        Some(prefix) => logo_src.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

/// The avatar to paint, or `None` to leave the current image alone.
pub fn avatar_to_paint(
    cached: Option<&str>,
    name: &str,
    current_src: Option<&str>,
    config: &ClientConfig,
) -> Option<String> {
    if let Some(url) = cached {
        return Some(url.to_owned());
    }
    let current = current_src.unwrap_or(&config.default_logo_src);
    if is_default_logo(current, &config.default_logo_src) {
        return None;
    }
    Some(generated_avatar_url(&config.avatar_service_url, name))
}
