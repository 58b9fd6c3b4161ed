//! External runner invocation.
//!
//! Builds the `java -jar <runner> ...` argv for each mode and runs it in the
//! foreground with inherited stdio. Prerequisites (java, the jar, the config)
//! are not checked; their absence shows up as the runner's own failure.

use crate::paths::Layout;
use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, ExitStatus};

/// Program used to start the runner archive
pub const JAVA: &str = "java";

/// Port the capture server listens on
pub const SERVER_PORT: u16 = 2309;

/// Browser the capture server launches
pub const BROWSER: &str = "google-chrome";

/// Test selector for a batch run
pub const ALL_TESTS: &str = "all";

/// A fully-built external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl RunnerCommand {
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `java -jar <runner> --port 2309 --config <conf> --browser google-chrome`
    pub fn server(layout: &Layout) -> Self {
        Self::new(
            JAVA,
            [
                OsString::from("-jar"),
                layout.runner_jar.clone().into(),
                "--port".into(),
                SERVER_PORT.to_string().into(),
                "--config".into(),
                layout.config_file.clone().into(),
                "--browser".into(),
                BROWSER.into(),
            ],
        )
    }

    /// `java -jar <runner> --config <conf> --tests all`
    pub fn tests(layout: &Layout) -> Self {
        Self::new(
            JAVA,
            [
                OsString::from("-jar"),
                layout.runner_jar.clone().into(),
                "--config".into(),
                layout.config_file.clone().into(),
                "--tests".into(),
                ALL_TESTS.into(),
            ],
        )
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run in the foreground and return the child's exit code.
    pub fn run(&self) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .with_context(|| format!("Failed to launch {}", self.program.to_string_lossy()))?;

        Ok(exit_code(status))
    }
}

impl fmt::Display for RunnerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Map a child's status to the code this process exits with.
///
/// Signal deaths follow the shell convention (128 + signal) on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
