//! Full-document navigation.

use crate::auth::handlers::Navigation;

/// Replace the current document with `nav.href`.
pub fn go(nav: &Navigation) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; cannot navigate to {}", nav.href);
            return;
        };
        if let Err(e) = window.location().set_href(&nav.href) {
            log::warn!("navigation to {} failed: {e:?}", nav.href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("navigation to {} skipped outside the browser", nav.href);
    }
}
