use std::collections::HashMap;

/// Read access to environment variables
pub(crate) trait EnvLookup {
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, treating an empty value as unset
    fn non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}
