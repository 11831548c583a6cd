//! Login/signup view state machine.
//!
//! DESIGN
//! ======
//! Exactly one of the two forms is active at a time, so the view is a
//! two-variant enum with total transitions. DOM class names and title text
//! are derived from it rather than mutated independently, which keeps the
//! visible state from drifting out of sync.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const LOGIN_TITLE: &str = "Welcome Back";
pub const SIGNUP_TITLE: &str = "Create Account";
pub const ACTIVE_FORM_CLASS: &str = "active-form";
pub const HIDDEN_FORM_CLASS: &str = "hidden-form";

/// Which form is currently presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormView {
    #[default]
    Login,
    Signup,
}

impl FormView {
    /// Transition to the signup form. Valid from either state.
    #[must_use]
    pub fn show_signup(self) -> Self {
        Self::Signup
    }

    /// Transition to the login form. Valid from either state.
    #[must_use]
    pub fn show_login(self) -> Self {
        Self::Login
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => LOGIN_TITLE,
            Self::Signup => SIGNUP_TITLE,
        }
    }

    #[must_use]
    pub fn login_class(self) -> &'static str {
        match self {
            Self::Login => ACTIVE_FORM_CLASS,
            Self::Signup => HIDDEN_FORM_CLASS,
        }
    }

    #[must_use]
    pub fn signup_class(self) -> &'static str {
        match self {
            Self::Login => HIDDEN_FORM_CLASS,
            Self::Signup => ACTIVE_FORM_CLASS,
        }
    }
}

/// Styling applied to the signup message element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Error,
    Success,
}

impl MessageTone {
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Error => "var(--color-error)",
            Self::Success => "var(--color-success)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupMessage {
    pub text: String,
    pub tone: MessageTone,
}

impl SignupMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: MessageTone::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: MessageTone::Success }
    }
}

/// Draft values of the login form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

/// Draft values of the signup form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub username: String,
    pub password: String,
    pub confirm: String,
}

/// Everything the auth screen renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub view: FormView,
    pub login: LoginFields,
    pub signup: SignupFields,
    /// Inline login error; empty when nothing is shown.
    pub login_error: String,
    pub signup_message: Option<SignupMessage>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap to the signup form and clear any login error.
    pub fn show_signup(&mut self) {
        self.view = self.view.show_signup();
        self.login_error.clear();
    }

    /// Swap to the login form and clear any signup message.
    pub fn show_login(&mut self) {
        self.view = self.view.show_login();
        self.signup_message = None;
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    #[must_use]
    pub fn signup_message_text(&self) -> &str {
        self.signup_message.as_ref().map_or("", |m| m.text.as_str())
    }
}
