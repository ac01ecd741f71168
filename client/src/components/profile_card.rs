//! Read-only profile summary shown on the home page.

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::routes::AppRoute;
use crate::util::profile_display::{display_location, or_not_provided};

#[component]
pub fn ProfileCard(user: UserProfile) -> impl IntoView {
    let first_name = or_not_provided(user.first_name.as_deref());
    let last_name = or_not_provided(user.last_name.as_deref());
    let location = display_location(&user);

    view! {
        <section class="profile-card">
            <header class="profile-card__header">
                <h2>"Your Profile"</h2>
                <a href=AppRoute::EditProfile.path() class="profile-card__edit">"Edit"</a>
            </header>
            <dl class="profile-card__fields">
                <div class="profile-card__row">
                    <dt>"Username"</dt>
                    <dd>{user.username}</dd>
                </div>
                <div class="profile-card__row">
                    <dt>"First Name"</dt>
                    <dd>{first_name}</dd>
                </div>
                <div class="profile-card__row">
                    <dt>"Last Name"</dt>
                    <dd>{last_name}</dd>
                </div>
                <div class="profile-card__row">
                    <dt>"Email Address"</dt>
                    <dd>{user.email}</dd>
                </div>
                {location.map(|location| {
                    view! {
                        <div class="profile-card__row">
                            <dt>"Location"</dt>
                            <dd>{location}</dd>
                        </div>
                    }
                })}
            </dl>
            <a href=AppRoute::EditProfile.path() class="button button--primary">"Edit Your Profile"</a>
        </section>
    }
}
