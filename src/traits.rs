//! Core traits that decouple the workflow from process spawning.
//!
//! The [`Dispatcher`](crate::dispatcher::Dispatcher) and the
//! [`filter`](crate::filter) only depend on these abstractions, so tests can
//! substitute recording doubles for the real `aerospace` binary and for
//! Spotlight.

use std::path::PathBuf;

/// Abstraction over an external window-manager CLI.
///
/// An implementation might spawn the `aerospace` binary, or it might be a
/// stub that records argument lists in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Invoke the tool once with `args`, letting it write to our stdout and
    /// stderr, and return its exit code.
    ///
    /// A non-zero exit code is **not** an error: it is handed back for the
    /// caller to pass through.
    fn run(&self, args: &[String]) -> Result<i32, Self::Error>;

    /// Invoke the tool once with `args` and return its standard output.
    ///
    /// A non-zero exit code is an error here, since the output would not be
    /// meaningful.
    fn capture(&self, args: &[String]) -> Result<String, Self::Error>;
}

/// Resolves an application bundle id to the path of the application.
pub trait AppLocator {
    /// Return the application path for `bundle_id`, or `None` if it cannot
    /// be found.
    fn locate(&self, bundle_id: &str) -> Option<PathBuf>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording test doubles shared by the unit tests.

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error: {0}")]
    pub struct MockError(pub String);

    /// A [`WindowManager`] that records every call and replies from a table
    /// keyed by the first argument.
    #[derive(Debug, Default)]
    pub struct MockWm {
        pub calls: RefCell<Vec<Vec<String>>>,
        pub exit_code: i32,
        pub outputs: HashMap<String, String>,
    }

    impl MockWm {
        pub fn with_output(mut self, subcommand: &str, output: &str) -> Self {
            self.outputs.insert(subcommand.into(), output.into());
            self
        }
    }

    impl WindowManager for MockWm {
        type Error = MockError;

        fn run(&self, args: &[String]) -> Result<i32, MockError> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(self.exit_code)
        }

        fn capture(&self, args: &[String]) -> Result<String, MockError> {
            self.calls.borrow_mut().push(args.to_vec());
            let key = args.first().cloned().unwrap_or_default();
            self.outputs
                .get(&key)
                .cloned()
                .ok_or_else(|| MockError(format!("no output for {}", key)))
        }
    }

    /// An [`AppLocator`] backed by a fixed table that counts lookups.
    #[derive(Debug, Default)]
    pub struct MockLocator {
        pub apps: HashMap<String, PathBuf>,
        pub lookups: RefCell<Vec<String>>,
    }

    impl AppLocator for MockLocator {
        fn locate(&self, bundle_id: &str) -> Option<PathBuf> {
            self.lookups.borrow_mut().push(bundle_id.to_string());
            self.apps.get(bundle_id).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;

    #[test]
    fn mock_wm_records_runs() {
        let wm = MockWm {
            exit_code: 3,
            ..Default::default()
        };
        let code = wm.run(&["workspace".to_string(), "1".to_string()]).unwrap();
        assert_eq!(code, 3);
        assert_eq!(wm.calls.borrow().len(), 1);
        assert_eq!(wm.calls.borrow()[0], vec!["workspace", "1"]);
    }

    #[test]
    fn mock_wm_capture_without_output_fails() {
        let wm = MockWm::default().with_output("list-workspaces", "[]");
        assert_eq!(
            wm.capture(&["list-workspaces".to_string()]).unwrap(),
            "[]"
        );
        assert!(wm.capture(&["list-windows".to_string()]).is_err());
    }
}
