use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for TyScan.
    pub tyscan: TyScanConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for TyScan.
pub struct TyScanConfig {
    /// Whether the receiver-aliasing rule runs. Defaults to on.
    pub no_this_alias: Option<bool>,
    /// Whether the missing-await rule runs. Defaults to on.
    pub require_await: Option<bool>,
    /// Options for the receiver-aliasing rule.
    #[serde(default)]
    pub alias: ThisAliasOptions,
}

#[derive(Debug, Deserialize, Clone)]
/// Options for the receiver-aliasing rule. Immutable for a run.
pub struct ThisAliasOptions {
    /// Whether to ignore destructurings, such as `const { props, state } = this`.
    #[serde(default = "default_true")]
    pub allow_destructuring: bool,
    /// Names to ignore, such as `["self"]` for `const self = this`.
    #[serde(default)]
    pub allowed_names: Vec<String>,
}

impl Default for ThisAliasOptions {
    fn default() -> Self {
        Self {
            allow_destructuring: true,
            allowed_names: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
