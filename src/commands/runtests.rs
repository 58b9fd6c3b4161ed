use crate::paths::Layout;
use crate::runner::RunnerCommand;
use anyhow::Result;

/// Run every configured test once. Returns the runner's exit code.
pub fn execute(layout: &Layout) -> Result<i32> {
    let command = RunnerCommand::tests(layout);

    println!("🧪 Running tests: {}", command);
    println!();

    command.run()
}
