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
//! Mapping of a single experiment configuration onto a VNF benchmarking descriptor.
//!
//! The mapper is a fixed pipeline: header, experiments, environment, targets, scenario (nodes
//! and links) and proceedings. It performs no I/O; rendering and writing the result is left to
//! [`crate::render`] and [`crate::generator`].

use std::collections::HashSet;

use strum::IntoEnumIterator;
use thiserror::Error;

use vnfbd_utils::serde::Scalar;

use crate::{
    config::RunConfig,
    descriptor::{Nsd, Vnfd},
    experiment::{ExperimentConfiguration, EP_CONFIG_ID, EP_REPETITION, EP_TIME_LIMIT},
    model::{BdDocument, ModelError, VnfBd, Workflow},
    resolver::NodeIdentity,
};

pub const BD_VERSION: &str = "0.1";
pub const BD_AUTHOR: &str = "tng-bench";
pub const BD_DESCRIPTION: &str = "BD generated by tng-bench (https://sndzoo.github.io/).";
/// Id of the single target entry.
pub const TARGET_ID: &str = "01";
/// All nodes are deployed by an external orchestrator.
pub const NODE_TYPE: &str = "external";
pub const PLUGIN_ENTRYPOINT: &str = "entrypoint";
pub const ATTR_DURATION: &str = "duration";
/// Value used for experiment counters that are missing from the parameters.
const MISSING_COUNTER: &str = "-1";

/// Errors while mapping a single experiment configuration.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("The run configuration defines no targets")]
    NoTarget,
    #[error("Target {0:?} of the run configuration has no pdriver_config")]
    NoDriverConfig(String),
    #[error("Function descriptor {0:?} has no name")]
    NoName(String),
    #[error("A virtual link of service {0:?} has no id")]
    NoLinkId(String),
    #[error("Function {0:?} has no virtual deployment units")]
    NoVdu(String),
    #[error("Function {vnf:?} is missing {field} in its first virtual deployment unit")]
    MissingResource { vnf: String, field: &'static str },
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Maps experiment configurations of one run configuration onto descriptors.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorMapper<'a> {
    config: &'a RunConfig,
}

impl<'a> DescriptorMapper<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Build the descriptor for `ec`, the configuration of the `ex_id`-th service experiment.
    pub fn map(
        &self,
        ex_id: usize,
        ec: &ExperimentConfiguration,
    ) -> Result<BdDocument, MappingError> {
        let mut bd = VnfBd::default();

        self.header(&mut bd, ec);
        self.experiments(&mut bd, ex_id, ec);
        self.environment(&mut bd)?;
        self.targets(&mut bd, ec)?;
        self.nodes(&mut bd, ec)?;
        if let Some(nsd) = ec.nsd.as_ref() {
            self.links(&mut bd, nsd)?;
        }
        self.proceedings(&mut bd, ec)?;

        let service = ec
            .nsd
            .as_ref()
            .and_then(|nsd| nsd.name.as_deref())
            .unwrap_or_default();
        for (link, cp) in divergent_link_refs(&bd) {
            log::warn!("{ec}: link {link} of {service:?} references unknown connection point {cp}");
        }

        Ok(BdDocument { vnf_bd: bd })
    }

    fn header(&self, bd: &mut VnfBd, ec: &ExperimentConfiguration) {
        bd.id = format!("{:05}", ec.run_id);
        bd.name = ec.name.clone();
        bd.version = BD_VERSION.to_string();
        bd.author = BD_AUTHOR.to_string();
        bd.description = BD_DESCRIPTION.to_string();
    }

    fn experiments(&self, bd: &mut VnfBd, ex_id: usize, ec: &ExperimentConfiguration) {
        let counter = |key: &str| {
            ec.parameter
                .get(key)
                .map(Scalar::to_string)
                .unwrap_or_else(|| MISSING_COUNTER.to_string())
        };
        bd.experiments.methods = ex_id.to_string();
        bd.experiments.tests = counter(EP_CONFIG_ID);
        bd.experiments.trials = counter(EP_REPETITION);
    }

    fn environment(&self, bd: &mut VnfBd) -> Result<(), MappingError> {
        let target = self.config.targets.first().ok_or(MappingError::NoTarget)?;
        let driver_config = target
            .pdriver_config
            .as_ref()
            .ok_or_else(|| MappingError::NoDriverConfig(target.name.clone().unwrap_or_default()))?;

        let env = &mut bd.environment;
        env.name = target.name.clone();
        env.description = target.description.clone();
        env.plugin.kind = target.pdriver.clone();
        env.plugin.parameters.add(PLUGIN_ENTRYPOINT)?.value = driver_config.host.clone();
        Ok(())
    }

    fn targets(&self, bd: &mut VnfBd, ec: &ExperimentConfiguration) -> Result<(), MappingError> {
        let source = &ec.experiment.target;
        let target = bd.targets.add(TARGET_ID)?;
        target.author = source.vendor.as_ref().map(Scalar::to_string);
        target.name = source.name.as_ref().map(Scalar::to_string);
        target.version = source.version.as_ref().map(Scalar::to_string);
        Ok(())
    }

    fn nodes(&self, bd: &mut VnfBd, ec: &ExperimentConfiguration) -> Result<(), MappingError> {
        let Some(vnfds) = ec.vnfds.as_ref() else {
            return Ok(());
        };
        for (path, vnfd) in vnfds {
            log::trace!("{ec}: adding node for {path}");
            self.node(bd, path, vnfd, ec)?;
        }
        Ok(())
    }

    fn node(
        &self,
        bd: &mut VnfBd,
        path: &str,
        vnfd: &Vnfd,
        ec: &ExperimentConfiguration,
    ) -> Result<(), MappingError> {
        let identity = NodeIdentity::of(vnfd, ec.nsd.as_ref())
            .ok_or_else(|| MappingError::NoName(path.to_string()))?;
        let name = vnfd.name.clone().unwrap_or_default();
        // only the first VDU is considered
        let vdu = vnfd
            .virtual_deployment_units
            .as_ref()
            .and_then(|vdus| vdus.first())
            .ok_or_else(|| MappingError::NoVdu(name.clone()))?;
        let missing = |field| MappingError::MissingResource {
            vnf: name.clone(),
            field,
        };
        let res = vdu
            .resource_requirements
            .as_ref()
            .ok_or_else(|| missing("resource_requirements"))?;
        let cpu = res.cpu.as_ref().ok_or_else(|| missing("cpu"))?;
        let memory = res.memory.as_ref().ok_or_else(|| missing("memory"))?;
        let storage = res.storage.as_ref().ok_or_else(|| missing("storage"))?;

        let node = bd.scenario.nodes.add(identity.id.as_str())?;
        node.kind = Some(NODE_TYPE.to_string());
        node.image = vdu.vm_image.clone();
        node.image_format = vdu.vm_image_format.clone();

        let r = &mut node.resources;
        r.cpu.vcpus = truthy_string(&cpu.vcpus);
        r.cpu.cpu_bw = truthy_string(&cpu.cpu_bw);
        r.cpu.pinning = truthy_string(&cpu.vcpus);
        r.memory.size = truthy_string(&memory.size);
        r.memory.unit = truthy_string(&memory.size_unit);
        r.storage.size = truthy_string(&storage.size);
        r.storage.unit = truthy_string(&storage.size_unit);
        r.storage.volumes = None;

        for cp in vnfd.connection_points.iter() {
            let new_cp = node
                .connection_points
                .add(identity.connection_point(&cp.id))?;
            new_cp.interface = cp.interface.clone();
            new_cp.kind = cp.kind.clone();
        }

        for workflow in Workflow::iter() {
            node.lifecycle.add(workflow)?.implementation = ec
                .parameter
                .lookup(&identity.id, &workflow.command_parameter())
                .map(Scalar::to_string)
                .unwrap_or_default();
        }
        Ok(())
    }

    fn links(&self, bd: &mut VnfBd, nsd: &Nsd) -> Result<(), MappingError> {
        for vl in nsd.virtual_links.iter() {
            let id = vl
                .id
                .as_deref()
                .ok_or_else(|| MappingError::NoLinkId(nsd.name.clone().unwrap_or_default()))?;
            let link = bd.scenario.links.add(id)?;
            link.kind = vl.connectivity_type.clone();
            link.connection_point_refs
                .extend(vl.connection_points_reference.iter().cloned());
        }
        Ok(())
    }

    fn proceedings(&self, bd: &mut VnfBd, ec: &ExperimentConfiguration) -> Result<(), MappingError> {
        // a missing time limit is rendered as `None`, like a null value
        let duration = ec
            .parameter
            .get(EP_TIME_LIMIT)
            .map(Scalar::to_string)
            .unwrap_or_else(|| Scalar::Null.to_string());
        bd.proceedings.attributes.add(ATTR_DURATION)?.value = Some(duration);
        Ok(())
    }
}

/// Copy a source value as string, but only if it is set and non-zero.
fn truthy_string(value: &Option<Scalar>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| v.is_truthy())
        .map(Scalar::to_string)
}

/// Find link references that name a connection point on a node of the scenario, but that the
/// node does not have.
///
/// Links copy the references of the NSD verbatim, while nodes build their connection point ids
/// from the resolved short id. References whose prefix is not a short id of any node are
/// service endpoints and are not reported.
pub fn divergent_link_refs(bd: &VnfBd) -> Vec<(String, String)> {
    let cps: HashSet<&str> = bd
        .scenario
        .nodes
        .iter()
        .flat_map(|n| n.connection_points.iter().map(|cp| cp.id.as_str()))
        .collect();
    let prefixes: HashSet<&str> = cps
        .iter()
        .filter_map(|cp| cp.rsplit_once(':').map(|(prefix, _)| prefix))
        .collect();
    bd.scenario
        .links
        .iter()
        .flat_map(|l| l.connection_point_refs.iter().map(move |r| (l, r)))
        .filter(|(_, r)| !cps.contains(r.as_str()))
        .filter(|(_, r)| {
            r.rsplit_once(':')
                .is_some_and(|(prefix, _)| prefixes.contains(prefix))
        })
        .map(|(l, r)| (l.id.clone(), r.clone()))
        .collect()
}
