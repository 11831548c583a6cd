//! Auth screen controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page owns one controller. User events call into it, it applies
//! the rules from `handlers` against the injected repository, and it notifies
//! a listener whenever [`FormState`] changes so the page can mirror that
//! state into a reactive signal.
//!
//! TRADE-OFFS
//! ==========
//! The auto-return after signup is not cancelled by manual toggles; if the
//! user flips forms before it fires, it still forces the login view. Every
//! successful signup arms its own return; an earlier one is never replaced
//! by a later one.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::AuthConfig;
use super::form::{FormState, LoginFields, SignupFields, SignupMessage};
use super::handlers::{self, AuthError, Navigation, SIGNUP_SUCCESS_TEXT};
use super::schedule::{ScheduledTask, Scheduler};
use super::store::{self, CredentialRepository, StoreError};

type Listener = Rc<dyn Fn(&FormState)>;

struct PendingReturn {
    fired: Rc<Cell<bool>>,
    task: ScheduledTask,
}

pub struct AuthController<R, S> {
    repo: R,
    scheduler: S,
    config: AuthConfig,
    state: Rc<RefCell<FormState>>,
    listener: Option<Listener>,
    pending_returns: Vec<PendingReturn>,
}

impl<R, S> AuthController<R, S>
where
    R: CredentialRepository,
    S: Scheduler,
{
    pub fn new(repo: R, scheduler: S, config: AuthConfig) -> Self {
        Self {
            repo,
            scheduler,
            config,
            state: Rc::new(RefCell::new(FormState::new())),
            listener: None,
            pending_returns: Vec::new(),
        }
    }

    /// Register a callback invoked after every state change, including the
    /// scheduled return to login.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&FormState) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Seed the default account on first use.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the store cannot be read or written.
    pub fn ensure_seeded(&mut self) -> Result<bool, StoreError> {
        let seeded = store::seed_default(&mut self.repo, &self.config)?;
        if seeded {
            log::info!("seeded default account username={}", self.config.seed_username);
        }
        Ok(seeded)
    }

    pub fn show_signup(&mut self) {
        self.update(FormState::show_signup);
    }

    pub fn show_login(&mut self) {
        self.update(FormState::show_login);
    }

    pub fn edit_login(&mut self, f: impl FnOnce(&mut LoginFields)) {
        self.update(|s| f(&mut s.login));
    }

    pub fn edit_signup(&mut self, f: impl FnOnce(&mut SignupFields)) {
        self.update(|s| f(&mut s.signup));
    }

    /// Submit the login form. Returns where to navigate on success; on
    /// failure the inline error is set and the view stays put.
    pub fn submit_login(&mut self) -> Option<Navigation> {
        let fields = self.state.borrow().login.clone();
        match handlers::login(&self.repo, &fields, &self.config) {
            Ok(nav) => Some(nav),
            Err(err) => {
                log_storage_failure(&err);
                self.update(|s| s.login_error = err.to_string());
                None
            }
        }
    }

    /// Submit the signup form. On success the account is stored, the fields
    /// are reset, and the return to login is armed. Returns whether the
    /// account was created.
    pub fn submit_signup(&mut self) -> bool {
        let fields = self.state.borrow().signup.clone();
        match handlers::signup(&mut self.repo, &fields) {
            Ok(()) => {
                log::info!("account created username={}", fields.username);
                self.update(|s| {
                    s.signup_message = Some(SignupMessage::success(SIGNUP_SUCCESS_TEXT));
                    s.signup = SignupFields::default();
                });
                self.arm_return_to_login();
                true
            }
            Err(err) => {
                log_storage_failure(&err);
                self.update(|s| s.signup_message = Some(SignupMessage::error(err.to_string())));
                false
            }
        }
    }

    /// Disarm every pending return to login.
    pub fn cancel_pending_return(&mut self) {
        for pending in self.pending_returns.drain(..) {
            pending.task.cancel();
        }
    }

    fn arm_return_to_login(&mut self) {
        self.pending_returns.retain(|p| !p.fired.get());

        let fired = Rc::new(Cell::new(false));
        let state = Rc::clone(&self.state);
        let listener = self.listener.clone();
        let flag = Rc::clone(&fired);
        let task = self.scheduler.schedule(
            self.config.signup_return_delay,
            Box::new(move || {
                flag.set(true);
                state.borrow_mut().show_login();
                notify(listener.as_ref(), &state);
            }),
        );
        self.pending_returns.push(PendingReturn { fired, task });
    }

    fn update(&mut self, f: impl FnOnce(&mut FormState)) {
        f(&mut *self.state.borrow_mut());
        notify(self.listener.as_ref(), &self.state);
    }
}

fn notify(listener: Option<&Listener>, state: &RefCell<FormState>) {
    if let Some(listener) = listener {
        let snapshot = state.borrow().clone();
        listener(&snapshot);
    }
}

fn log_storage_failure(err: &AuthError) {
    if let AuthError::Storage(source) = err {
        log::warn!("credential storage failure: {source}");
    }
}
