//! [`WindowManager`] implementation backed by the `aerospace` binary.
//!
//! Every call spawns one short-lived child process.  [`run`](WindowManager::run)
//! inherits our stdio so the tool's own messages reach Alfred unmodified;
//! [`capture`](WindowManager::capture) pipes stdout for parsing.

use crate::traits::WindowManager;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Binary name used when neither the command line nor the config names one.
pub const DEFAULT_BINARY: &str = "aerospace";

/// `aerospace`-backed window manager.
#[derive(Debug, Clone)]
pub struct AerospaceCli {
    binary: PathBuf,
}

/// Errors that can occur when invoking the `aerospace` binary.
#[derive(Debug, thiserror::Error)]
pub enum AerospaceError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`aerospace {args}` exited with code {code}: {stderr}")]
    Failed {
        args: String,
        code: i32,
        stderr: String,
    },
    #[error("aerospace output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Default for AerospaceCli {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl AerospaceCli {
    /// Create a handle for the binary at `binary` (a bare name is looked up
    /// on `PATH` at spawn time).
    pub fn new(binary: impl AsRef<Path>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    fn command(&self, args: &[String]) -> Command {
        debug!("spawning {} {}", self.binary.display(), args.join(" "));
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> AerospaceError {
        AerospaceError::Spawn {
            binary: self.binary.display().to_string(),
            source,
        }
    }
}

impl WindowManager for AerospaceCli {
    type Error = AerospaceError;

    fn run(&self, args: &[String]) -> Result<i32, Self::Error> {
        let status = self
            .command(args)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        // Terminated by a signal: no code to pass through.
        Ok(status.code().unwrap_or(1))
    }

    fn capture(&self, args: &[String]) -> Result<String, Self::Error> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(AerospaceError::Failed {
                args: args.join(" "),
                code: output.status.code().unwrap_or(1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}
