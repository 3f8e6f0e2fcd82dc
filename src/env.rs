//! Lookup of the `CALCLI_*` variables and the log filter fallbacks.
//!
//! The config loader reads server, timeout, locale and color overrides
//! through [`Env`], and logging asks it for a filter directive. Values that
//! are blank after trimming count as unset, so `CALCLI_SERVER_URL=` in a
//! shell profile does not wipe out a URL from `.calcli.toml`.
//!
//! Tests build an [`Env::mock()`] instead of touching the process
//! environment.

use std::collections::HashMap;

/// Source of environment overrides: the process, or a fixed table.
#[derive(Clone, Debug, Default)]
pub struct Env {
    table: Option<HashMap<String, String>>,
}

impl Env {
    pub fn real() -> Self {
        Self { table: None }
    }

    /// Fixed table of variables; nothing else is visible.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            table: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Trimmed value of `name`, or `None` when missing or blank.
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = match &self.table {
            Some(table) => table.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    /// First non-blank value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.get(name))
    }

    /// On/off switch such as `CALCLI_COLOR`.
    ///
    /// `None` when unset; `Some(Err(raw))` when the value is not a
    /// recognised spelling.
    pub fn switch(&self, name: &str) -> Option<Result<bool, String>> {
        let raw = self.get(name)?;
        Some(match raw.to_lowercase().as_str() {
            "false" | "0" | "no" | "off" | "never" => Ok(false),
            "true" | "1" | "yes" | "on" | "always" => Ok(true),
            _ => Err(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ENV_COLOR, ENV_LOCALE, ENV_LOG, ENV_SERVER_URL};

    #[test]
    fn blank_override_does_not_count() {
        let env = Env::mock([(ENV_SERVER_URL, "   "), (ENV_LOCALE, "")]);
        assert_eq!(env.get(ENV_SERVER_URL), None);
        assert_eq!(env.get(ENV_LOCALE), None);
    }

    #[test]
    fn values_come_back_trimmed() {
        let env = Env::mock([(ENV_SERVER_URL, "  http://calc.local\n")]);
        assert_eq!(env.get(ENV_SERVER_URL).as_deref(), Some("http://calc.local"));
    }

    #[test]
    fn first_of_skips_blank_entries() {
        let env = Env::mock([(ENV_LOG, " "), ("RUST_LOG", "calcli=trace")]);
        assert_eq!(
            env.first_of(&[ENV_LOG, "RUST_LOG"]).as_deref(),
            Some("calcli=trace")
        );
        assert_eq!(Env::mock([(ENV_LOG, "")]).first_of(&[ENV_LOG]), None);
    }

    #[test]
    fn switch_spellings() {
        for off in ["false", "0", "NO", "off", "never"] {
            assert_eq!(Env::mock([(ENV_COLOR, off)]).switch(ENV_COLOR), Some(Ok(false)));
        }
        for on in ["true", "1", "Yes", "on", "always"] {
            assert_eq!(Env::mock([(ENV_COLOR, on)]).switch(ENV_COLOR), Some(Ok(true)));
        }
        assert_eq!(
            Env::mock([(ENV_COLOR, "sometimes")]).switch(ENV_COLOR),
            Some(Err("sometimes".to_string()))
        );
        assert_eq!(Env::mock([(ENV_LOCALE, "ru")]).switch(ENV_COLOR), None);
    }

    #[test]
    fn real_env_sees_cargo_variables() {
        assert!(Env::real().get("CARGO_MANIFEST_DIR").is_some());
    }
}
