//! External-link capability used by the buy flow.
//!
//! Opening the hosted checkout is fire-and-forget: the page never observes
//! whether the new window actually appeared. The capability is injected so
//! tests (and platforms with their own browser integration) can substitute it.

use std::fmt;
use std::rc::Rc;

use crate::error::OpenError;

/// Opens a URL in a new browsing context.
pub trait LinkOpener {
    fn open_external(&self, url: &str) -> Result<(), OpenError>;
}

/// Default opener: evaluates `window.open(url, "_blank")` through the Dioxus
/// document bridge. Works in the browser and in the desktop webview.
///
/// Must be called from within a Dioxus runtime (an event handler).
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowOpener;

impl LinkOpener for WindowOpener {
    fn open_external(&self, url: &str) -> Result<(), OpenError> {
        let literal = serde_json::to_string(url).map_err(|err| OpenError::Bridge(err.to_string()))?;
        // `window.open` returns null when a pop-up blocker steps in.
        let script = format!(
            "const w = window.open({literal}, '_blank'); if (w) {{ w.opener = null; }} return w !== null;"
        );
        let eval = dioxus::document::eval(&script);
        let url = url.to_string();
        dioxus::prelude::spawn(async move {
            let outcome = match eval.await {
                Ok(value) => open_outcome(&value, NULL_MEANS_BLOCKED),
                Err(err) => Err(OpenError::Bridge(format!("{err:?}"))),
            };
            match outcome {
                Ok(()) => tracing::debug!(%url, "external link opened"),
                // Only logged; the visitor sees nothing.
                Err(err) => tracing::warn!(%url, %err, "external link did not open"),
            }
        });
        Ok(())
    }
}

/// In a browser a `null` window means a pop-up blocker stepped in. The
/// desktop webview hands new windows to the system browser and reports
/// `null` even when the page opened.
const NULL_MEANS_BLOCKED: bool = cfg!(target_arch = "wasm32");

/// Interpret the script's `w !== null` result.
fn open_outcome(value: &serde_json::Value, null_means_blocked: bool) -> Result<(), OpenError> {
    match value {
        serde_json::Value::Bool(true) => Ok(()),
        serde_json::Value::Bool(false) if !null_means_blocked => Ok(()),
        serde_json::Value::Bool(false) => Err(OpenError::Blocked),
        other => Err(OpenError::Bridge(format!("unexpected result {other}"))),
    }
}

/// Cloneable handle for providing a [`LinkOpener`] through Dioxus context.
#[derive(Clone)]
pub struct LinkOpenerHandle(Rc<dyn LinkOpener>);

impl LinkOpenerHandle {
    pub fn new(opener: impl LinkOpener + 'static) -> Self {
        Self(Rc::new(opener))
    }

    pub fn opener(&self) -> &dyn LinkOpener {
        &*self.0
    }
}

impl Default for LinkOpenerHandle {
    fn default() -> Self {
        Self::new(WindowOpener)
    }
}

impl fmt::Debug for LinkOpenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkOpenerHandle(..)")
    }
}

impl PartialEq for LinkOpenerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
