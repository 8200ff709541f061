//! `${VAR}` and `${VAR:-default}` substitution in configuration strings.

use crate::ConfigError;

/// Substitutes variable references in configuration values.
///
/// The lookup is injected so the process environment is only one possible
/// source.
pub(crate) struct Expander<L> {
    lookup: L,
}

/// Expander backed by the process environment.
pub(crate) fn from_env() -> Expander<impl Fn(&str) -> Option<String>> {
    Expander::new(|name: &str| std::env::var(name).ok())
}

impl<L> Expander<L>
where
    L: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Replace `value` with its expansion.
    ///
    /// Values without `${` are left alone, so a lone `$` stays literal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvVar`] naming `field` when a variable has
    /// neither a value nor a default.
    pub(crate) fn expand(&self, field: &str, value: &mut String) -> Result<(), ConfigError> {
        if !value.contains("${") {
            return Ok(());
        }

        let expanded = shellexpand::env_with_context(value.as_str(), |name| {
            (self.lookup)(name).map(Some).ok_or(())
        })
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?
        .into_owned();

        *value = expanded;
        Ok(())
    }
}
