use anyhow::Result;
use jstd::cli::{self, Selection};

fn main() -> Result<()> {
    let command = match cli::select(std::env::args_os()) {
        Selection::Run(command) => command,
        Selection::Usage => {
            println!("{}", cli::usage());
            std::process::exit(1);
        }
    };

    let exit_code = cli::run(command)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
