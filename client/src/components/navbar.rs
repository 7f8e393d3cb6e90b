//! Site navigation bar and the client-side route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge gate only runs on full page loads. Client-side navigation never
//! reaches the server, so the navbar re-reads the token store on every
//! pathname change and shows the affordances that match the current session.
//!
//! DESIGN
//! ======
//! Link derivation is pure (`auth_links`, `is_active`) so it can be tested
//! without a browser. The session flag starts `false` and is refreshed by an
//! effect, which only runs after hydration; SSR markup therefore always shows
//! the signed-out links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth;
use crate::util::browser;

/// Where a set of links is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSurface {
    Desktop,
    Mobile,
}

/// Session-dependent navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthLink {
    Dashboard,
    Logout,
    Login,
    Register,
}

impl AuthLink {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Logout => "Logout",
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Target path; `Logout` is an action, not a link.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("/dashboard"),
            Self::Logout => None,
            Self::Login => Some("/login"),
            Self::Register => Some("/register"),
        }
    }
}

/// Public section links, in display order.
pub const SITE_LINKS: [(&str, &str); 3] = [("Projects", "/projects"), ("Blog", "/blogs"), ("About", "/about")];

/// Auth affordances for the given session state and surface.
pub fn auth_links(has_session: bool, surface: NavSurface) -> &'static [AuthLink] {
    match (has_session, surface) {
        (true, _) => &[AuthLink::Dashboard, AuthLink::Logout],
        (false, NavSurface::Desktop) => &[AuthLink::Login],
        (false, NavSurface::Mobile) => &[AuthLink::Login, AuthLink::Register],
    }
}

/// Exact match only; `/blogs/x` does not highlight `Blog`.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

fn link_class(pathname: &str, href: &str) -> &'static str {
    if is_active(pathname, href) { "nav-link nav-link--active" } else { "nav-link" }
}

/// Drop the token and reload at `/` so the gate sees the cleared cookie.
fn logout() {
    auth::clear_token();
    browser::hard_navigate("/");
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let session = RwSignal::new(false);
    let drawer_open = RwSignal::new(false);

    Effect::new(move |_| {
        let path = pathname.get();
        let present = auth::has_session();
        log::debug!("route guard: {path} session={present}");
        session.set(present);
    });

    let close_drawer = move |_| drawer_open.set(false);

    let render_site_links = move |surface: NavSurface| {
        SITE_LINKS
            .iter()
            .map(|&(label, href)| {
                view! {
                    <a
                        href=href
                        class=move || link_class(&pathname.get(), href)
                        on:click=move |_| {
                            if surface == NavSurface::Mobile {
                                drawer_open.set(false);
                            }
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    let render_auth_links = move |surface: NavSurface| {
        move || {
            auth_links(session.get(), surface)
                .iter()
                .map(|&link| match link.href() {
                    Some(href) => view! {
                        <a
                            href=href
                            class=move || link_class(&pathname.get(), href)
                            on:click=move |_| drawer_open.set(false)
                        >
                            {link.label()}
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <button class="nav-link nav-link--button" type="button" on:click=move |_| logout()>
                            {link.label()}
                        </button>
                    }
                    .into_any(),
                })
                .collect_view()
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">"Portfolio"</a>
                <nav class="navbar__links">
                    {render_site_links(NavSurface::Desktop)}
                    {render_auth_links(NavSurface::Desktop)}
                </nav>
                <button
                    class="navbar__menu"
                    type="button"
                    aria-label="Open menu"
                    on:click=move |_| drawer_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || drawer_open.get()>
                <div class="drawer__backdrop" on:click=close_drawer></div>
                <nav class="drawer">
                    {render_site_links(NavSurface::Mobile)}
                    {render_auth_links(NavSurface::Mobile)}
                </nav>
            </Show>
        </header>
    }
}
