//! Entry page: login form, signup form, and the toggle between them.
//!
//! Element ids are a stable contract for browser automation: `login-form`,
//! `signup-form`, `username`, `password`, `new-username`, `new-password`,
//! `confirm-password`, `form-title`, `error-message`, `signup-message`,
//! `create-account-btn`, `back-to-login-btn`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::auth::AuthConfig;
use crate::auth::controller::AuthController;
use crate::auth::form::FormState;
use crate::util::navigation;
use crate::util::storage::BrowserCredentials;
use crate::util::timer::BrowserScheduler;

type PageController = AuthController<BrowserCredentials, BrowserScheduler>;

/// Inline style for `#signup-message`; empty when no message is shown.
pub(crate) fn signup_message_style(state: &FormState) -> String {
    state
        .signup_message
        .as_ref()
        .map(|m| format!("color: {}", m.tone.css_color()))
        .unwrap_or_default()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = AuthConfig::default();
    let form = RwSignal::new(FormState::new());
    let controller = StoredValue::new_local(
        AuthController::new(BrowserCredentials::new(config.storage_key.clone()), BrowserScheduler, config)
            .with_listener(move |state| form.set(state.clone())),
    );

    // Seed in an effect: localStorage exists only after hydration, and effects
    // never run during SSR. A failure is logged; login then reports storage
    // as unavailable.
    Effect::new(move || {
        controller.update_value(|c| {
            if let Err(e) = c.ensure_seeded() {
                log::warn!("could not seed default account: {e}");
            }
        });
    });
    on_cleanup(move || {
        controller.try_update_value(PageController::cancel_pending_return);
    });

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut nav = None;
        controller.update_value(|c| nav = c.submit_login());
        if let Some(nav) = nav {
            navigation::go(&nav);
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.update_value(|c| {
            c.submit_signup();
        });
    };

    view! {
        <Title text="Windsurf - Login"/>
        <div class="login-container">
            <div class="logo">
                <img src="windsurf-white-wordmark.svg" alt="Windsurf"/>
            </div>
            <h1 id="form-title">{move || form.with(FormState::title)}</h1>

            <form id="login-form" class=move || form.with(|f| f.view.login_class()) on:submit=on_login>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.login.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_value(|c| c.edit_login(|f| f.username = value));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.login.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_value(|c| c.edit_login(|f| f.password = value));
                        }
                    />
                </div>
                <p id="error-message" class="error-message">{move || form.with(|f| f.login_error.clone())}</p>
                <button type="submit" class="primary-button">"Login"</button>
                <button
                    type="button"
                    id="create-account-btn"
                    class="secondary-button"
                    on:click=move |_| controller.update_value(|c| c.show_signup())
                >
                    "Create New Account"
                </button>
            </form>

            <form id="signup-form" class=move || form.with(|f| f.view.signup_class()) on:submit=on_signup>
                <div class="form-group">
                    <label for="new-username">"Username"</label>
                    <input
                        type="text"
                        id="new-username"
                        name="new-username"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.signup.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_value(|c| c.edit_signup(|f| f.username = value));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="new-password">"Password"</label>
                    <input
                        type="password"
                        id="new-password"
                        name="new-password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.signup.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_value(|c| c.edit_signup(|f| f.password = value));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        type="password"
                        id="confirm-password"
                        name="confirm-password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.signup.confirm.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            controller.update_value(|c| c.edit_signup(|f| f.confirm = value));
                        }
                    />
                </div>
                <p id="signup-message" class="signup-message" style=move || form.with(signup_message_style)>
                    {move || form.with(|f| f.signup_message_text().to_owned())}
                </p>
                <button type="submit" class="primary-button">"Sign Up"</button>
                <button
                    type="button"
                    id="back-to-login-btn"
                    class="secondary-button"
                    on:click=move |_| controller.update_value(|c| c.show_login())
                >
                    "Back to Login"
                </button>
            </form>
        </div>
    }
}
