//! # Remote Sync
//!
//! Copies the local document to and from a bucket by running an external
//! transfer tool (`aws s3 cp` unless configured otherwise). The copy is opaque:
//! whatever the tool does is what happens.
//!
//! - [`RemoteSync::pull`] overwrites the local file with the remote one.
//!   Local edits that were never pushed are lost.
//! - [`RemoteSync::push`] overwrites the remote file with the local one.
//!   Remote changes made since the last pull are lost.
//!
//! The call blocks until the tool exits. No timeout is imposed and nothing is
//! retried. A non-zero exit becomes [`CinedbError::Transfer`] carrying the
//! tool's stdout followed by its stderr.

use crate::error::{CinedbError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Push,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Pull => f.write_str("download from"),
            Direction::Push => f.write_str("upload to"),
        }
    }
}

/// Why a single copy failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFailure {
    pub status: String,
    pub output: String,
}

/// Something that can copy a file between two locations, local or remote.
pub trait TransferTool {
    fn copy(&self, source: &str, destination: &str) -> std::result::Result<(), TransferFailure>;
}

/// Runs `program args... <source> <destination>`.
#[derive(Debug, Clone)]
pub struct CommandTransfer {
    program: String,
    args: Vec<String>,
}

impl CommandTransfer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl TransferTool for CommandTransfer {
    fn copy(&self, source: &str, destination: &str) -> std::result::Result<(), TransferFailure> {
        debug!(
            program = %self.program,
            args = ?self.args,
            source,
            destination,
            "running transfer tool"
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .arg(destination)
            .output()
            .map_err(|e| TransferFailure {
                status: format!("failed to run {}: {}", self.program, e),
                output: String::new(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(TransferFailure {
            status: output.status.to_string(),
            output: combined,
        })
    }
}

/// The local document paired with its remote copy.
pub struct RemoteSync<T: TransferTool> {
    bucket: String,
    remote_file: String,
    local_path: PathBuf,
    tool: T,
}

impl<T: TransferTool> RemoteSync<T> {
    pub fn new(
        bucket: impl Into<String>,
        remote_file: impl Into<String>,
        local_path: impl Into<PathBuf>,
        tool: T,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            remote_file: remote_file.into(),
            local_path: local_path.into(),
            tool,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// `<bucket>/<remote_file>`, tolerating a trailing slash on the bucket.
    pub fn remote_location(&self) -> String {
        format!(
            "{}/{}",
            self.bucket.trim_end_matches('/'),
            self.remote_file
        )
    }

    pub fn pull(&self) -> Result<()> {
        let remote = self.remote_location();
        let local = self.local_path.to_string_lossy();
        self.run(Direction::Pull, &remote, &local, &remote)?;
        info!(from = %remote, to = %local, "pulled dataset");
        Ok(())
    }

    pub fn push(&self) -> Result<()> {
        let remote = self.remote_location();
        let local = self.local_path.to_string_lossy();
        self.run(Direction::Push, &local, &remote, &remote)?;
        info!(from = %local, to = %remote, "pushed dataset");
        Ok(())
    }

    fn run(&self, direction: Direction, source: &str, destination: &str, location: &str) -> Result<()> {
        self.tool
            .copy(source, destination)
            .map_err(|failure| CinedbError::Transfer {
                direction,
                location: location.to_string(),
                status: failure.status,
                output: failure.output,
            })
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::RefCell;

    /// Records every copy; fails them all when `failure` is set.
    #[derive(Debug, Default)]
    pub struct RecordingTransfer {
        pub calls: RefCell<Vec<(String, String)>>,
        pub failure: Option<TransferFailure>,
    }

    impl RecordingTransfer {
        pub fn failing(status: &str, output: &str) -> Self {
            Self {
                calls: RefCell::default(),
                failure: Some(TransferFailure {
                    status: status.to_string(),
                    output: output.to_string(),
                }),
            }
        }
    }

    impl TransferTool for RecordingTransfer {
        fn copy(&self, source: &str, destination: &str) -> std::result::Result<(), TransferFailure> {
            self.calls
                .borrow_mut()
                .push((source.to_string(), destination.to_string()));
            match &self.failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(()),
            }
        }
    }
}
