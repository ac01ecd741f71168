//! Top navigation bar with auth-aware links and a collapsible mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::BrowserApi;
use crate::routes::AppRoute;
use crate::state::auth::use_auth;
use crate::state::session::end_session;
use crate::util::profile_display::avatar_initial;

const LINK_CLASS: &str = "navbar__link";
const MOBILE_LINK_CLASS: &str = "navbar__link navbar__link--mobile";

/// Class list for a nav link, marking the one for the current route active.
fn nav_link_class(base: &str, current: Option<AppRoute>, target: AppRoute) -> String {
    if current == Some(target) {
        format!("{base} navbar__link--active")
    } else {
        base.to_owned()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);
    let logged_out = RwSignal::new(false);

    let close_menu = Callback::new(move |()| menu_open.set(false));
    let logout = Callback::new(move |()| {
        end_session(auth, &**api.tokens());
        menu_open.set(false);
        logged_out.set(true);
    });

    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });

    let avatar = move || auth.user().map(|user| avatar_initial(&user));

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href=AppRoute::Home.path() class="navbar__brand">
                    <span class="navbar__logo">"P"</span>
                    <span class="navbar__title">"ProfileApp"</span>
                </a>
                <div class="navbar__links">
                    <NavLinks mobile=false on_navigate=close_menu on_logout=logout/>
                </div>
                {move || avatar().map(|initial| view! { <span class="navbar__avatar">{initial}</span> })}
                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    <NavLinks mobile=true on_navigate=close_menu on_logout=logout/>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(mobile: bool, on_navigate: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let base = if mobile { MOBILE_LINK_CLASS } else { LINK_CLASS };
    let class_for = move |route: AppRoute| move || nav_link_class(base, AppRoute::from_path(&pathname.get()), route);

    view! {
        <a href=AppRoute::Home.path() class=class_for(AppRoute::Home) on:click=move |_| on_navigate.run(())>
            "Home"
        </a>
        <Show
            when=move || auth.is_authenticated()
            fallback=move || {
                view! {
                    <a
                        href=AppRoute::Login.path()
                        class=class_for(AppRoute::Login)
                        on:click=move |_| on_navigate.run(())
                    >
                        "Login"
                    </a>
                    <a
                        href=AppRoute::Signup.path()
                        class=class_for(AppRoute::Signup)
                        on:click=move |_| on_navigate.run(())
                    >
                        "Register"
                    </a>
                }
            }
        >
            <a
                href=AppRoute::EditProfile.path()
                class=class_for(AppRoute::EditProfile)
                on:click=move |_| on_navigate.run(())
            >
                "Edit Profile"
            </a>
            <button class="navbar__logout" type="button" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </Show>
    }
}
