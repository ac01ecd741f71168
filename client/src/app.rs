//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api::BrowserApi;
use crate::pages::{edit_profile::EditProfilePage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::routes::AppRoute;
use crate::state::auth::{AuthContext, AuthState, provide_auth};
use crate::state::session::{load_profile, restore_session};

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
/// Provides the API client and the auth context, restores a persisted
/// session once running in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = BrowserApi::browser(&ClientConfig::from_build_env());
    let auth = provide_auth(AuthState::default());
    provide_context(api.clone());

    install_session_restore(api, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/profile-app.css"/>
        <Title text="ProfileApp"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::EditProfile.segment()) view=EditProfilePage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
            </Routes>
        </Router>
    }
}

/// Effects only run in the browser, so storage is read after hydration and
/// the server-rendered markup always matches the first client frame.
fn install_session_restore(api: BrowserApi, auth: AuthContext) {
    Effect::new(move || {
        let restored = restore_session(&**api.tokens());
        let has_token = restored.is_authenticated();
        auth.replace(restored);
        if !has_token {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = load_profile(&api, auth).await {
                log::warn!("profile load after restore failed: {e}");
            }
        });
    });
}
