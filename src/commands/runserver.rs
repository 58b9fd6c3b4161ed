use crate::paths::Layout;
use crate::runner::RunnerCommand;
use anyhow::Result;

/// Start the capture server in the foreground. Returns the runner's exit code.
pub fn execute(layout: &Layout) -> Result<i32> {
    let command = RunnerCommand::server(layout);

    println!("🚀 Launching jstestdriver: {}", command);
    println!();

    command.run()
}
