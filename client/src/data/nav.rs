//! Primary navigation entries.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the nav bar turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home", href: "/" },
    NavItem { id: "about", label: "About", href: "/about" },
    NavItem { id: "work", label: "Work", href: "/work" },
    NavItem { id: "contact", label: "Contact", href: "/contact" },
];

/// Whether `href` is the current section for `path`.
///
/// The root only matches itself; other entries also match nested paths and
/// ignore a trailing slash.
#[must_use]
pub fn is_active(path: &str, href: &str) -> bool {
    let path = normalize(path);
    let href = normalize(href);
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Whether the page is scrolled far enough for the solid nav style.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}
