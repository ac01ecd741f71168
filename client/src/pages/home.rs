//! Landing page: a welcome hero for visitors, a greeting and profile card
//! for signed-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::net::types::UserProfile;
use crate::routes::AppRoute;
use crate::state::auth::{AuthState, use_auth};
use crate::util::profile_display::{avatar_initial, greeting_name};

/// What the home page shows for a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
enum HomeView {
    Welcome,
    LoadingProfile,
    Profile(UserProfile),
}

fn home_view(state: &AuthState) -> HomeView {
    if !state.is_authenticated() {
        return HomeView::Welcome;
    }
    state
        .current_user()
        .cloned()
        .map_or(HomeView::LoadingProfile, HomeView::Profile)
}

const FEATURES: [(&str, &str); 3] = [
    ("Secure & Private", "Your session token never leaves this browser except to talk to the API."),
    ("Fast & Responsive", "Pages render on the server and hydrate into a WASM app."),
    ("Beautiful UI", "A clean layout for viewing and editing your details."),
];

fn footer_text(year: i32) -> String {
    format!("© {year} ProfileApp. All rights reserved.")
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <main class="home-page">
            {move || match home_view(&auth.state()) {
                HomeView::Welcome => view! { <WelcomeHero/> }.into_any(),
                HomeView::LoadingProfile => {
                    view! { <p class="home-page__loading">"Loading your profile..."</p> }.into_any()
                }
                HomeView::Profile(user) => {
                    let name = greeting_name(&user);
                    let initial = avatar_initial(&user);
                    view! {
                        <section class="home-page__greeting">
                            <span class="avatar avatar--large">{initial}</span>
                            <h1>{format!("Hello, {name}!")}</h1>
                        </section>
                        <ProfileCard user=user/>
                        <a href=AppRoute::EditProfile.path() class="button">"View Your Profile"</a>
                    }
                        .into_any()
                }
            }}
            <section class="home-page__features">
                <h2>"Why Choose ProfileApp"</h2>
                <ul class="feature-list">
                    {FEATURES
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <li class="feature-list__item">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <footer class="home-page__footer">
                <p>{footer_text(current_year())}</p>
            </footer>
        </main>
    }
}

#[component]
fn WelcomeHero() -> impl IntoView {
    view! {
        <section class="home-page__hero">
            <h1>
                <span>"Welcome to"</span>
                " "
                <span class="home-page__brand">"ProfileApp"</span>
            </h1>
            <p>"Create an account to keep your profile details in one place."</p>
            <div class="home-page__actions">
                <a href=AppRoute::Login.path() class="button button--primary">"Sign In"</a>
                <a href=AppRoute::Signup.path() class="button">"Create Account"</a>
            </div>
            <a href=AppRoute::Signup.path() class="home-page__cta">"Get Started"</a>
        </section>
    }
}
