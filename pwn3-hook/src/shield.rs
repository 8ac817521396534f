//! FFI Boundary Shield
//!
//! Every override the host calls runs its body through [`HookSite::run`].
//! Errors and panics are logged and swallowed: the host has no way to handle
//! either, and an unwind across the boundary would take the client down.
//!
//! # Logging Policy
//!
//! - Transient host states (no world yet, nobody in game, `GameWorld` not
//!   mapped yet) are logged at `trace`; they happen every tick on the menu.
//! - Anything else is logged at `error` the first time a site hits it and at
//!   `debug` afterwards, so a broken host does not flood stderr at tick rate.

use pwn3_core::HostError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

/// One host-facing entry point.
#[derive(Debug)]
pub struct HookSite {
    name: &'static str,
    reported: AtomicBool,
}

impl HookSite {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            reported: AtomicBool::new(false),
        }
    }

    /// Run `body`, never letting an error or panic escape.
    ///
    /// # Returns
    /// `true` if the body completed without error.
    pub fn run<F>(&self, body: F) -> bool
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                self.report(&err);
                false
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_string());
                log::error!("{} panicked: {}", self.name, message);
                false
            }
        }
    }

    fn report(&self, err: &anyhow::Error) {
        let transient = err
            .downcast_ref::<HostError>()
            .map(|host| host.is_transient() || matches!(host, HostError::SymbolMissing { .. }))
            .unwrap_or(false);

        if transient {
            log::trace!("{} skipped: {}", self.name, err);
        } else if !self.reported.swap(true, Ordering::Relaxed) {
            log::error!("{} failed: {:#}", self.name, err);
        } else {
            log::debug!("{} failed: {:#}", self.name, err);
        }
    }

    /// Whether a non-transient failure has been reported for this site.
    pub fn has_reported(&self) -> bool {
        self.reported.load(Ordering::Relaxed)
    }
}
