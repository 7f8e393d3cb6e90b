//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, not_found::NotFound, toaster::Toaster};
use crate::pages::about::AboutPage;
use crate::pages::blogs::{BlogDetailPage, BlogsPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::dashboard::blogs::{DashboardBlogsPage, EditBlogPage, NewBlogPage};
use crate::pages::dashboard::projects::{DashboardProjectsPage, EditProjectPage, NewProjectPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::projects::{ProjectDetailPage, ProjectsPage};
use crate::pages::register::RegisterPage;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and sets up client-side routing. Static
/// `new` segments are declared before `:id` so they win.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectDetailPage/>
                <Route path=StaticSegment("blogs") view=BlogsPage/>
                <Route path=(StaticSegment("blogs"), ParamSegment("slug")) view=BlogDetailPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("blogs")) view=DashboardBlogsPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("blogs"), StaticSegment("new"))
                    view=NewBlogPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("blogs"), ParamSegment("id"))
                    view=EditBlogPage
                />
                <Route path=(StaticSegment("dashboard"), StaticSegment("projects")) view=DashboardProjectsPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("projects"), StaticSegment("new"))
                    view=NewProjectPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("projects"), ParamSegment("id"))
                    view=EditProjectPage
                />
            </Routes>
            <Footer/>
        </Router>
        <Toaster/>
    }
}
