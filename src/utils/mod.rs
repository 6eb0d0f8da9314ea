pub(crate) mod command;
pub(crate) mod debug;
pub(crate) mod env;
pub(crate) mod timezone;

pub(crate) use command::{Captured, CommandSpec, run_capture};
pub(crate) use debug::{echo_log_enabled, set_echo_log};
pub(crate) use env::{EnvLookup, ProcessEnv};
pub(crate) use timezone::Timezone;
