// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Filesystem layout for pipeline inputs and outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory containing the raw projects.json source file
    pub data_dir: PathBuf,
    /// Directory receiving processed JSON and HTML snippets
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            output_dir: PathBuf::from("etl/output"),
        }
    }
}

/// Main configuration for octofolio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    /// Uses the explicit path when given, otherwise looks for octofolio.toml
    /// in the working directory, falling back to the embedded template
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from("octofolio.toml"),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else if path.is_some() {
            // An explicitly requested config file must exist
            anyhow::bail!("Config file not found: {}", config_path.display())
        } else {
            let template_content = include_str!("../config-templates/default.toml");
            let config: Self = toml::from_str(template_content)?;
            Ok(config)
        }
    }

    /// Source file holding the raw project records
    pub fn raw_data_path(&self) -> PathBuf {
        self.paths.data_dir.join("projects.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.paths.data_dir, PathBuf::from("assets/data"));
        assert_eq!(config.paths.output_dir, PathBuf::from("etl/output"));
        assert_eq!(
            config.raw_data_path(),
            PathBuf::from("assets/data/projects.json")
        );
    }

    #[test]
    fn test_embedded_template_parses() {
        let template = include_str!("../config-templates/default.toml");
        let config: Config = toml::from_str(template).expect("template must parse");
        assert_eq!(config.paths.data_dir, PathBuf::from("assets/data"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/octofolio.toml")));
        assert!(result.is_err());
    }
}
