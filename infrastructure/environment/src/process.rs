use std::env::{self, VarError};

use business::domain::credential::source::EnvironmentSource;

/// Reads variables from the current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(variable = name, "ignoring non-unicode environment value");
                None
            }
        }
    }
}
