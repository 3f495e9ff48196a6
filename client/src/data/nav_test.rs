use super::*;

#[test]
fn root_only_matches_itself() {
    assert!(is_active("/", "/"));
    assert!(is_active("", "/"));
    assert!(!is_active("/about", "/"));
}

#[test]
fn section_matches_nested_and_trailing_slash() {
    assert!(is_active("/work", "/work"));
    assert!(is_active("/work/", "/work"));
    assert!(is_active("/work/3", "/work"));
    assert!(!is_active("/workshop", "/work"));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert!(is_active("/contact?from=nav", "/contact"));
    assert!(is_active("/about#timeline", "/about"));
}

#[test]
fn exactly_one_item_active_per_page() {
    for path in ["/", "/about", "/work", "/contact"] {
        let active = NAV_ITEMS.iter().filter(|item| is_active(path, item.href)).count();
        assert_eq!(active, 1, "{path}");
    }
}

#[test]
fn scrolled_threshold_is_exclusive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLLED_THRESHOLD_PX));
    assert!(is_scrolled(SCROLLED_THRESHOLD_PX + 1.0));
}
