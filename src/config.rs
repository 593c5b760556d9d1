// VNF-BD: Generation of IETF BMWG VNF Benchmarking Descriptors from Experiment Configurations
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Run configuration and settings of the descriptor generator.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading input files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration of a benchmarking run. Only the execution targets are of interest here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RunConfig {
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

impl RunConfig {
    /// Load the run configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

/// Execution platform on which the experiments are run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Platform driver, e.g. `vimemu` or `osmmano`
    #[serde(default)]
    pub pdriver: Option<String>,
    #[serde(default)]
    pub pdriver_config: Option<DriverConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DriverConfig {
    /// Endpoint of the platform driver
    #[serde(default)]
    pub host: Option<String>,
}

/// Settings of one generator invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Output directory. Nothing is generated if it is unset.
    pub ibbd_dir: Option<PathBuf>,
    pub config: RunConfig,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_run_config() {
        let config: RunConfig = serde_yaml::from_str(
            r#"
inputs:
  - some: thing
targets:
  - name: vim-emu
    description: Local emulation
    pdriver: vimemu
    pdriver_config:
      host: 127.0.0.1
      port: 5000
  - name: second
"#,
        )
        .unwrap();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].pdriver.as_deref(), Some("vimemu"));
        assert_eq!(
            config.targets[0]
                .pdriver_config
                .as_ref()
                .unwrap()
                .host
                .as_deref(),
            Some("127.0.0.1")
        );
        assert!(config.targets[1].pdriver_config.is_none());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            RunConfig::from_file("/nonexistent/run-config.yml"),
            Err(ConfigError::Io(_))
        ));
    }
}
