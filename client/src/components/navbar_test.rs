use super::*;

#[test]
fn nav_link_class_marks_current_route_active() {
    assert_eq!(
        nav_link_class(LINK_CLASS, Some(AppRoute::Login), AppRoute::Login),
        "navbar__link navbar__link--active"
    );
}

#[test]
fn nav_link_class_leaves_other_routes_plain() {
    assert_eq!(nav_link_class(LINK_CLASS, Some(AppRoute::Login), AppRoute::Home), "navbar__link");
}

#[test]
fn nav_link_class_unknown_path_has_no_active_link() {
    for route in AppRoute::ALL {
        assert_eq!(nav_link_class(LINK_CLASS, None, route), LINK_CLASS);
    }
}

#[test]
fn nav_link_class_keeps_mobile_base() {
    assert_eq!(
        nav_link_class(MOBILE_LINK_CLASS, Some(AppRoute::Home), AppRoute::Home),
        "navbar__link navbar__link--mobile navbar__link--active"
    );
}
