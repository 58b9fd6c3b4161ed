//! Single source of truth for the jstestdriver filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O and no validation.
//!
//! ```text
//! <cwd>/
//! ├── jstestdriver.conf            # Runner config (authored by the project)
//! └── jstestdriver/                # Install root (created by `setup`)
//!     ├── JsTestDriver-1.3.3c.jar  # Runner archive
//!     └── plugins/
//!         └── coverage-1.3.3c.jar  # Coverage plugin archive
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Runner archive download location
pub const RUNNER_URL: &str = "http://js-test-driver.googlecode.com/files/JsTestDriver-1.3.3c.jar";

/// Coverage plugin archive download location
pub const COVERAGE_URL: &str = "http://js-test-driver.googlecode.com/files/coverage-1.3.3c.jar";

/// Install root, relative to the working directory
pub const INSTALL_DIR: &str = "jstestdriver";

/// Plugins directory, relative to the install root
pub const PLUGINS_DIR: &str = "plugins";

/// Runner configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "jstestdriver.conf";

/// A downloadable archive, identified by its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub url: String,
}

impl Artifact {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Local file name: the last `/`-separated segment of the URL.
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// The two archives `setup` installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub runner: Artifact,
    pub coverage: Artifact,
}

impl Default for Artifacts {
    fn default() -> Self {
        Self {
            runner: Artifact::new(RUNNER_URL),
            coverage: Artifact::new(COVERAGE_URL),
        }
    }
}

/// Every path the commands touch, computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Install root: `<cwd>/jstestdriver/`
    pub install_dir: PathBuf,
    /// Plugin directory: `<cwd>/jstestdriver/plugins/`
    pub plugins_dir: PathBuf,
    /// Runner archive: `<cwd>/jstestdriver/<runner file name>`
    pub runner_jar: PathBuf,
    /// Coverage archive: `<cwd>/jstestdriver/plugins/<coverage file name>`
    pub coverage_jar: PathBuf,
    /// Runner config: `<cwd>/jstestdriver.conf`
    pub config_file: PathBuf,
}

impl Layout {
    /// Resolve the layout under `root`. Pure path arithmetic.
    pub fn resolve(root: &Path, artifacts: &Artifacts) -> Self {
        let install_dir = root.join(INSTALL_DIR);
        let plugins_dir = install_dir.join(PLUGINS_DIR);

        Self {
            runner_jar: install_dir.join(artifacts.runner.file_name()),
            coverage_jar: plugins_dir.join(artifacts.coverage.file_name()),
            config_file: root.join(CONFIG_FILE),
            install_dir,
            plugins_dir,
        }
    }

    /// Resolve the layout under the process working directory.
    pub fn current(artifacts: &Artifacts) -> Result<Self> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::resolve(&root, artifacts))
    }
}
