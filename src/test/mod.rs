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
//! End-to-end tests of the descriptor generation.
//!
//! Use the following commands to see the log output:
//!
//! ```shell
//! RUST_LOG=trace cargo test -- --nocapture --test-threads 1
//! ```

use indexmap::IndexMap;

use vnfbd_utils::serde::Scalar;

use crate::{
    config::{DriverConfig, RunConfig, TargetConfig},
    descriptor::{
        ConnectionPoint, CpuRequirements, NetworkFunction, Nsd, ResourceRequirements,
        SizeRequirements, Vdu, VirtualLink, Vnfd,
    },
    experiment::{ExperimentConfiguration, ExperimentRef, Parameters, TargetDescriptor},
};


pub fn run_config() -> RunConfig {
    RunConfig {
        targets: vec![TargetConfig {
            name: Some("vim-emu".to_string()),
            description: Some("Local emulation environment".to_string()),
            pdriver: Some("vimemu".to_string()),
            pdriver_config: Some(DriverConfig {
                host: Some("127.0.0.1".to_string()),
            }),
        }],
    }
}

pub fn ec(name: &str, run_id: u64) -> ExperimentConfiguration {
    ExperimentConfiguration {
        name: name.to_string(),
        run_id,
        parameter: Parameters::new(),
        vnfds: None,
        nsd: None,
        experiment: ExperimentRef {
            target: TargetDescriptor {
                vendor: Some("de.upb".into()),
                name: Some("ns-1vnf-ids".into()),
                version: Some("0.1".into()),
            },
        },
    }
}

pub fn vdu(image: &str, format: &str, vcpus: Option<Scalar>) -> Vdu {
    Vdu {
        vm_image: Some(image.to_string()),
        vm_image_format: Some(format.to_string()),
        resource_requirements: Some(ResourceRequirements {
            cpu: Some(CpuRequirements {
                vcpus,
                cpu_bw: None,
            }),
            memory: Some(SizeRequirements::default()),
            storage: Some(SizeRequirements::default()),
        }),
    }
}

pub fn vnfd(vendor: &str, name: &str, version: &str, cps: &[&str]) -> Vnfd {
    Vnfd {
        name: Some(name.to_string()),
        vendor: vendor.into(),
        version: version.into(),
        virtual_deployment_units: Some(vec![vdu("img.qcow2", "qcow2", Some(Scalar::Int(1)))]),
        connection_points: cps
            .iter()
            .map(|id| ConnectionPoint {
                id: (*id).into(),
                interface: Some("ipv4".to_string()),
                kind: Some("internal".to_string()),
            })
            .collect(),
    }
}

pub fn vnfds(vnfds: impl IntoIterator<Item = Vnfd>) -> Option<IndexMap<String, Vnfd>> {
    Some(
        vnfds
            .into_iter()
            .map(|v| (format!("{}.yml", v.name.as_deref().unwrap_or("vnfd")), v))
            .collect(),
    )
}

/// Service `mp.input -> suricata -> mp.output`.
pub fn ids_service() -> (IndexMap<String, Vnfd>, Nsd) {
    let functions = vnfds([
        vnfd("de.upb", "mp.input", "0.1", &["data"]),
        vnfd("de.upb", "ns-1vnf-ids-suricata", "0.1", &["data", "mgmt"]),
        vnfd("de.upb", "mp.output", "0.1", &["data"]),
    ])
    .unwrap_or_default();
    let nsd = Nsd {
        name: Some("ns-1vnf-ids".to_string()),
        network_functions: vec![NetworkFunction {
            vnf_id: "vnf0".into(),
            vnf_name: Some("ns-1vnf-ids-suricata".to_string()),
        }],
        virtual_links: vec![
            VirtualLink {
                id: Some("link-input".to_string()),
                connectivity_type: Some("E-Line".to_string()),
                connection_points_reference: vec![
                    "mp.input:data".to_string(),
                    "vnf0:data".to_string(),
                ],
            },
            VirtualLink {
                id: Some("link-output".to_string()),
                connectivity_type: Some("E-Line".to_string()),
                connection_points_reference: vec![
                    "vnf0:mgmt".to_string(),
                    "mp.output:data".to_string(),
                ],
            },
        ],
    };
    (functions, nsd)
}
