use crate::download::Fetcher;
use crate::paths::{Artifacts, Layout};
use anyhow::{Context, Result};
use std::fs;

/// Install the runner and coverage plugin under the layout's install root.
///
/// Both directories must not exist yet. A failure part-way leaves whatever
/// was already created on disk; remove the install root before retrying.
pub fn execute(layout: &Layout, artifacts: &Artifacts, fetcher: &Fetcher) -> Result<()> {
    fs::create_dir(&layout.install_dir).with_context(|| {
        format!(
            "Failed to create directory {}",
            layout.install_dir.display()
        )
    })?;
    fs::create_dir(&layout.plugins_dir).with_context(|| {
        format!(
            "Failed to create directory {}",
            layout.plugins_dir.display()
        )
    })?;

    fetcher.fetch(&artifacts.runner.url, &layout.runner_jar)?;
    fetcher.fetch(&artifacts.coverage.url, &layout.coverage_jar)?;

    println!();
    println!(
        "✅ jstestdriver installed in {}",
        layout.install_dir.display()
    );

    Ok(())
}
