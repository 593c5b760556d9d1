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
//! Resolution of node identifiers.
//!
//! Function descriptors only carry their global identity (`vendor.name.version`), while the
//! service descriptor assigns each function a short, service-local `vnf_id`. Connection points
//! are named after the short id, nodes after the global one.

use std::fmt::Display;

use crate::descriptor::{Nsd, Vnfd};

/// Functions whose name contains this marker belong to the measurement plane and keep their
/// bare name as node id.
pub const MP_MARKER: &str = "mp.";

/// Whether the function is a measurement-plane function.
pub fn is_measurement_point(vnf_name: &str) -> bool {
    vnf_name.contains(MP_MARKER)
}

/// Look up the short `vnf_id` that `nsd` assigns to the function called `vnf_name`.
///
/// Falls back to `vnf_name` itself if there is no NSD or it does not reference the function.
/// Entries without a `vnf_name` never match; a matching entry without `vnf_id` yields `None`.
pub fn resolve_short_id(vnf_name: &str, nsd: Option<&Nsd>) -> String {
    nsd.and_then(|nsd| {
        nsd.network_functions
            .iter()
            .find(|f| f.vnf_name.as_deref() == Some(vnf_name))
            .map(|f| f.vnf_id.to_string())
    })
    .unwrap_or_else(|| vnf_name.to_string())
}

/// Build the identifier of a connection point: `<short-node-id>:<cp-id>`.
pub fn connection_point_id(short_id: &str, cp_id: impl Display) -> String {
    format!("{short_id}:{cp_id}")
}

/// Node id and short id of one function in the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeIdentity {
    /// Id of the node in the scenario
    pub id: String,
    /// Prefix of all connection point ids of the node
    pub short_id: String,
}

impl NodeIdentity {
    /// Compute the identity of `vnfd` within the service `nsd`. Returns `None` if the function
    /// has no name.
    pub fn of(vnfd: &Vnfd, nsd: Option<&Nsd>) -> Option<Self> {
        let name = vnfd.name.as_deref()?;
        if is_measurement_point(name) {
            return Some(Self {
                id: name.to_string(),
                short_id: name.to_string(),
            });
        }
        let id = format!("{}.{}.{}", vnfd.vendor, name, vnfd.version);
        let short_id = match nsd {
            Some(nsd) => resolve_short_id(name, Some(nsd)),
            None => id.clone(),
        };
        Some(Self { id, short_id })
    }

    /// Identifier of the connection point `cp_id` on this node.
    pub fn connection_point(&self, cp_id: impl Display) -> String {
        connection_point_id(&self.short_id, cp_id)
    }
}
