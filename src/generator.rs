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
//! Generation of descriptor files for all experiment configurations of a run.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    config::Settings,
    experiment::{ExperimentConfiguration, ServiceExperiment},
    mapper::{DescriptorMapper, MappingError},
    render::{render, RenderError},
};

/// Errors while generating the descriptor of a single experiment configuration.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Mapping failed: {0}")]
    Mapping(#[from] MappingError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of generating the descriptor for one experiment configuration.
#[derive(Debug)]
pub struct EcOutcome {
    pub ex_id: usize,
    pub ec_name: String,
    pub result: Result<PathBuf, GenerateError>,
}

impl EcOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Path of the descriptor for the configuration named `ec_name`.
pub fn bd_path(ibbd_dir: impl AsRef<Path>, ec_name: &str) -> PathBuf {
    ibbd_dir.as_ref().join(format!("{ec_name}-bd.yaml"))
}

/// Writes one descriptor file per experiment configuration.
pub struct BdGenerator<'a> {
    settings: &'a Settings,
    experiments: &'a [ServiceExperiment],
}

impl<'a> BdGenerator<'a> {
    pub fn new(settings: &'a Settings, experiments: &'a [ServiceExperiment]) -> Self {
        Self {
            settings,
            experiments,
        }
    }

    /// Generate all descriptors, one configuration after the other.
    ///
    /// A failing configuration is logged and does not stop the remaining ones. Returns nothing
    /// if no output directory is configured.
    pub fn run(&self) -> Vec<EcOutcome> {
        let Some(ibbd_dir) = self.settings.ibbd_dir.as_deref() else {
            log::info!("IETF BMWG BD dir not specified (--ibbd). Skipping.");
            return Vec::new();
        };
        let mapper = DescriptorMapper::new(&self.settings.config);

        let mut outcomes = Vec::new();
        for (ex_id, ex) in self.experiments.iter().enumerate() {
            for ec in ex.experiment_configurations.iter() {
                let result = generate_bd(&mapper, ibbd_dir, ex_id, ec);
                match &result {
                    Ok(path) => log::debug!("Generated IETF BMWG BD: {}", path.display()),
                    Err(e) => log::error!("Could not generate IETF VNF BD for EC: {ec}\n{e}"),
                }
                outcomes.push(EcOutcome {
                    ex_id,
                    ec_name: ec.name.clone(),
                    result,
                });
            }
        }
        outcomes
    }
}

/// Map, render and write the descriptor of a single configuration.
fn generate_bd(
    mapper: &DescriptorMapper<'_>,
    ibbd_dir: &Path,
    ex_id: usize,
    ec: &ExperimentConfiguration,
) -> Result<PathBuf, GenerateError> {
    let path = bd_path(ibbd_dir, &ec.name);
    let doc = mapper.map(ex_id, ec)?;
    let text = render(&doc)?;
    log::trace!("{ec}:\n{text}");
    vnfbd_utils::fs::write_file(&path, text)?;
    Ok(path)
}
