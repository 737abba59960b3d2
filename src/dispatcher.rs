//! Turns one [`ActionRequest`] into one window-manager invocation.
//!
//! [`Dispatcher`] validates the request and, only if it is complete, issues
//! exactly one [`WindowManager::run`] call with the action's fixed argument
//! list.  The tool's exit code is returned unchanged.

use crate::action::{ActionError, ActionRequest};
use crate::traits::WindowManager;
use log::{debug, info};

/// Possible errors from the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The request was rejected before anything ran.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The window manager could not be invoked.
    #[error("{0}")]
    WindowManager(String),
}

/// Dispatches validated actions to a [`WindowManager`].
pub struct Dispatcher<W: WindowManager> {
    wm: W,
}

impl<W: WindowManager> Dispatcher<W> {
    pub fn new(wm: W) -> Self {
        Self { wm }
    }

    /// Return a shared reference to the underlying window manager.
    pub fn window_manager(&self) -> &W {
        &self.wm
    }

    /// Validate `request` and invoke the window manager once.
    ///
    /// Returns the tool's exit code.  Validation failures never reach the
    /// window manager.
    pub fn dispatch(&self, request: &ActionRequest) -> Result<i32, DispatchError> {
        let action = request.validate()?;
        let args = action.argv();
        info!("{}", action.kind());
        debug!("argv: {:?}", args);
        let code = self
            .wm
            .run(&args)
            .map_err(|e| DispatchError::WindowManager(e.to_string()))?;
        debug!("exit code {}", code);
        Ok(code)
    }
}
