#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
impl TomlConfig {
    /// Applies command-line flags on top of file values. Flags can only
    /// switch options on.
    pub fn apply_overrides(&mut self, cli: &CliConfig) {
        if cli.fold_case {
            self.conversion.case_mode = crate::domain::model::CaseMode::Fold;
            tracing::debug!("case folding enabled from command line");
        }
        if cli.memoize {
            self.conversion.memoize = true;
            tracing::debug!("memoization enabled from command line");
        }
    }
}
