//! Page reached after a valid login. Its only action is logout.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::auth::AuthConfig;
use crate::auth::handlers::Navigation;
use crate::util::navigation;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let logout = Navigation::logout(&AuthConfig::default());

    view! {
        <Title text="Windsurf - Secure Area"/>
        <div class="login-container">
            <div class="logo">
                <img src="windsurf-white-wordmark.svg" alt="Windsurf"/>
            </div>
            <h1 id="success-heading">"Secure Area"</h1>
            <p id="success-message" class="flash success">"You have successfully logged in!"</p>
            <button
                type="button"
                id="logout-btn"
                class="logout-button"
                on:click=move |_| navigation::go(&logout)
            >
                "Logout"
            </button>
        </div>
    }
}
