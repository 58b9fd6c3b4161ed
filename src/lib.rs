pub mod cli;
pub mod commands;
pub mod download;
pub mod paths;
pub mod runner;

#[cfg(test)]
mod test_support;
