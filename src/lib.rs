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
//! Library for generating IETF BMWG VNF benchmarking descriptors (VNF-BD) from the experiment
//! configurations of a benchmarking run.

pub mod config;
pub mod descriptor;
pub mod experiment;
pub mod generator;
pub mod mapper;
pub mod model;
pub mod render;
pub mod resolver;
pub mod util;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use super::{
        config::{RunConfig, Settings},
        experiment::{ExperimentConfiguration, Parameters, ServiceExperiment},
        generator::{BdGenerator, EcOutcome},
        mapper::DescriptorMapper,
        model::BdDocument,
        render::render,
    };
}
