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
//! Source descriptors of the service under test: function descriptors (VNFD) and the network
//! service descriptor (NSD) that wires them together.
//!
//! Only the fields used to build a benchmarking descriptor are modelled; everything else in the
//! descriptor files is ignored during deserialization.

use serde::{Deserialize, Serialize};

use vnfbd_utils::serde::Scalar;

/// Virtual network function descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Vnfd {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vendor: Scalar,
    #[serde(default)]
    pub version: Scalar,
    #[serde(default)]
    pub virtual_deployment_units: Option<Vec<Vdu>>,
    #[serde(default)]
    pub connection_points: Vec<ConnectionPoint>,
}

/// Virtual deployment unit, i.e., one deployable image of a function.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Vdu {
    #[serde(default)]
    pub vm_image: Option<String>,
    #[serde(default)]
    pub vm_image_format: Option<String>,
    #[serde(default)]
    pub resource_requirements: Option<ResourceRequirements>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourceRequirements {
    #[serde(default)]
    pub cpu: Option<CpuRequirements>,
    #[serde(default)]
    pub memory: Option<SizeRequirements>,
    #[serde(default)]
    pub storage: Option<SizeRequirements>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CpuRequirements {
    #[serde(default)]
    pub vcpus: Option<Scalar>,
    /// Fraction of a CPU the function may use
    #[serde(default)]
    pub cpu_bw: Option<Scalar>,
}

/// Memory or storage requirement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SizeRequirements {
    #[serde(default)]
    pub size: Option<Scalar>,
    #[serde(default)]
    pub size_unit: Option<Scalar>,
}

/// Network attachment point of a function.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConnectionPoint {
    /// A missing id is rendered as `None`
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Network service descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Nsd {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network_functions: Vec<NetworkFunction>,
    #[serde(default)]
    pub virtual_links: Vec<VirtualLink>,
}

/// Reference from the service to one of its functions, carrying the service-local short id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NetworkFunction {
    #[serde(default)]
    pub vnf_id: Scalar,
    #[serde(default)]
    pub vnf_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VirtualLink {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub connectivity_type: Option<String>,
    /// Connection points in `<vnf_id>:<cp_id>` form, in declaration order
    #[serde(default)]
    pub connection_points_reference: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_vnfd() {
        let vnfd: Vnfd = serde_yaml::from_str(
            r#"
descriptor_version: vnfd-schema-01
vendor: de.upb
name: ns-1vnf-ids-suricata
version: "0.1"
virtual_deployment_units:
  - id: vdu01
    vm_image: mpeuster/suricata
    vm_image_format: docker
    resource_requirements:
      cpu: {vcpus: 1, cpu_bw: 0.5}
      memory: {size: 1, size_unit: GB}
      storage: {size: 10, size_unit: GB}
connection_points:
  - {id: data, interface: ipv4, type: internal}
"#,
        )
        .unwrap();
        assert_eq!(vnfd.vendor, Scalar::from("de.upb"));
        let vdus = vnfd.virtual_deployment_units.unwrap();
        assert_eq!(vdus.len(), 1);
        let res = vdus[0].resource_requirements.as_ref().unwrap();
        assert_eq!(res.cpu.as_ref().unwrap().cpu_bw, Some(Scalar::Float(0.5)));
        assert_eq!(
            res.storage.as_ref().unwrap().size_unit,
            Some(Scalar::from("GB"))
        );
        assert_eq!(vnfd.connection_points[0].kind.as_deref(), Some("internal"));
    }

    #[test]
    fn deserialize_nsd() {
        let nsd: Nsd = serde_yaml::from_str(
            r#"
name: ns-1vnf-ids
network_functions:
  - {vnf_id: vnf0, vnf_name: ns-1vnf-ids-suricata, vnf_vendor: de.upb, vnf_version: "0.1"}
virtual_links:
  - id: data-in
    connectivity_type: E-Line
    connection_points_reference: ["vnf0:data", "input"]
"#,
        )
        .unwrap();
        assert_eq!(nsd.network_functions[0].vnf_id, Scalar::from("vnf0"));
        assert_eq!(nsd.name.as_deref(), Some("ns-1vnf-ids"));
        assert_eq!(
            nsd.virtual_links[0].connection_points_reference,
            vec!["vnf0:data".to_string(), "input".to_string()]
        );
    }

    #[test]
    fn deserialize_incomplete() {
        let vnfd: Vnfd = serde_yaml::from_str("connection_points: [{interface: ipv4}]").unwrap();
        assert_eq!(vnfd.name, None);
        assert_eq!(vnfd.connection_points[0].id, Scalar::Null);

        let nsd: Nsd = serde_yaml::from_str(
            "{network_functions: [{vnf_id: vnf0}], virtual_links: [{connectivity_type: E-LAN}]}",
        )
        .unwrap();
        assert_eq!(nsd.network_functions[0].vnf_name, None);
        assert_eq!(nsd.virtual_links[0].id, None);
    }
}
