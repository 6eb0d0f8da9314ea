pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, OutputMode};
pub(crate) use commands::InteractiveCommand;
