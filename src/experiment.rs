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
//! Experiment configurations as produced by the experiment generator.
//!
//! A service experiment expands into a list of experiment configurations (ECs), each one a
//! concrete, fully-parameterized run. This module only reads them; nothing here is ever written
//! back.

use std::{fmt, fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use vnfbd_utils::serde::Scalar;

use crate::{
    config::ConfigError,
    descriptor::{Nsd, Vnfd},
};

/// Parameter holding the id of the configuration within its experiment.
pub const EP_CONFIG_ID: &str = "ep::header::all::config_id";
/// Parameter holding the repetition counter of a configuration.
pub const EP_REPETITION: &str = "ep::header::all::repetition";
/// Parameter holding the time limit (in seconds) of a single run.
pub const EP_TIME_LIMIT: &str = "ep::header::all::time_limit";

/// Flat mapping of `ep::<scope>::<target>::<field>` keys to values, in file order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Parameters(IndexMap<String, Scalar>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.0.insert(key.into(), value.into())
    }

    /// Exact lookup of a single parameter.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    /// Fuzzy lookup of a per-node parameter.
    ///
    /// Returns the value of the first key (in insertion order) that contains both `node_id` and
    /// `field` as substrings. A miss is not an error; callers substitute their own default.
    pub fn lookup(&self, node_id: &str, field: &str) -> Option<&Scalar> {
        let found = self
            .0
            .iter()
            .find(|(k, _)| k.contains(node_id) && k.contains(field))
            .map(|(_, v)| v);
        if found.is_none() {
            log::warn!("Could not find parameter {field} for node: {node_id}");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Identity of the system under test.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TargetDescriptor {
    #[serde(default)]
    pub vendor: Option<Scalar>,
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub version: Option<Scalar>,
}

/// The experiment an EC was derived from. Only the target is of interest here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExperimentRef {
    #[serde(default)]
    pub target: TargetDescriptor,
}

/// One concrete run of an experiment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExperimentConfiguration {
    /// Unique name, used as the output file stem
    pub name: String,
    pub run_id: u64,
    #[serde(default)]
    pub parameter: Parameters,
    /// Function descriptors keyed by the path they were loaded from
    #[serde(default)]
    pub vnfds: Option<IndexMap<String, Vnfd>>,
    #[serde(default)]
    pub nsd: Option<Nsd>,
    #[serde(default)]
    pub experiment: ExperimentRef,
}

impl fmt::Display for ExperimentConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (run {})", self.name, self.run_id)
    }
}

/// A service experiment and all configurations generated from it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServiceExperiment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub experiment_configurations: Vec<ExperimentConfiguration>,
}

/// Load a list of service experiments from a YAML (or JSON) file.
pub fn load_experiments(path: impl AsRef<Path>) -> Result<Vec<ServiceExperiment>, ConfigError> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(serde_yaml::from_str(&text)?)
}
