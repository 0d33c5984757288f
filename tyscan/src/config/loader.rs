use std::fs;
use std::path::Path;

use super::models::Config;

const CONFIG_FILENAME: &str = "tyscan.toml";

pub(super) fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let tyscan_toml = current.join(CONFIG_FILENAME);
        if tyscan_toml.exists() {
            if let Ok(content) = fs::read_to_string(&tyscan_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(tyscan_toml);
                    return config;
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}
