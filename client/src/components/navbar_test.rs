use super::*;

#[test]
fn nav_link_class_marks_exact_match_active() {
    assert_eq!(nav_link_class("/docs", "/docs"), "navbar__link navbar__link--active");
    assert_eq!(nav_link_class("/docs", "/docs/"), "navbar__link navbar__link--active");
}

#[test]
fn nav_link_class_leaves_other_paths_plain() {
    assert_eq!(nav_link_class("/docs", "/"), "navbar__link");
    assert_eq!(nav_link_class("/docs", "/pricing"), "navbar__link");
    assert_eq!(nav_link_class("/docs", "/documents"), "navbar__link");
}

#[test]
fn theme_icon_shows_target_mode() {
    assert_eq!(theme_icon(true), "☀");
    assert_eq!(theme_icon(false), "☾");
}

#[test]
fn nav_links_cover_content_pages() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/docs", "/features", "/pricing"]);
}
