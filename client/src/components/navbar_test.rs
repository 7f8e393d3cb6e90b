use super::*;

#[test]
fn session_shows_dashboard_and_logout_on_every_surface() {
    for surface in [NavSurface::Desktop, NavSurface::Mobile] {
        assert_eq!(auth_links(true, surface), &[AuthLink::Dashboard, AuthLink::Logout]);
    }
}

#[test]
fn no_session_desktop_shows_login_only() {
    assert_eq!(auth_links(false, NavSurface::Desktop), &[AuthLink::Login]);
}

#[test]
fn no_session_mobile_adds_register() {
    assert_eq!(auth_links(false, NavSurface::Mobile), &[AuthLink::Login, AuthLink::Register]);
}

#[test]
fn never_shows_login_and_logout_together() {
    for has_session in [true, false] {
        for surface in [NavSurface::Desktop, NavSurface::Mobile] {
            let links = auth_links(has_session, surface);
            assert!(!(links.contains(&AuthLink::Login) && links.contains(&AuthLink::Logout)));
        }
    }
}

#[test]
fn logout_is_an_action() {
    assert_eq!(AuthLink::Logout.href(), None);
    assert_eq!(AuthLink::Dashboard.href(), Some("/dashboard"));
    assert_eq!(AuthLink::Register.label(), "Register");
}

#[test]
fn active_link_requires_exact_path() {
    assert!(is_active("/blogs", "/blogs"));
    assert!(!is_active("/blogs/hello", "/blogs"));
    assert_eq!(link_class("/about", "/about"), "nav-link nav-link--active");
    assert_eq!(link_class("/", "/about"), "nav-link");
}

#[test]
fn site_links_cover_public_sections() {
    let hrefs: Vec<&str> = SITE_LINKS.iter().map(|&(_, href)| href).collect();
    assert_eq!(hrefs, vec!["/projects", "/blogs", "/about"]);
}
