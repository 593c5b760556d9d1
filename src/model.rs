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
//! Typed object model of the IETF BMWG VNF benchmarking descriptor (VNF-BD).
//!
//! All leaves are strings. Unset leaves and empty containers are skipped during serialization,
//! so that only what was assigned ends up in the rendered document. YANG lists are represented
//! by [`KeyedList`], which keeps insertion order and rejects duplicate keys.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors while assembling a descriptor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Duplicate key {key:?} in list {list}")]
    DuplicateKey { list: &'static str, key: String },
}

/// Entry of a YANG list, identified by its key leaf.
pub trait Keyed {
    type Key: PartialEq + fmt::Display;
    /// Name of the list, used in error messages.
    const LIST: &'static str;

    fn key(&self) -> &Self::Key;
    fn with_key(key: Self::Key) -> Self;
}

/// Ordered list of entries with unique keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyedList<T> {
    entries: Vec<T>,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Keyed> KeyedList<T> {
    /// Create a new entry with the given key and return a mutable reference to it.
    pub fn add(&mut self, key: impl Into<T::Key>) -> Result<&mut T, ModelError> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(ModelError::DuplicateKey {
                list: T::LIST,
                key: key.to_string(),
            });
        }
        self.entries.push(T::with_key(key));
        let idx = self.entries.len() - 1;
        Ok(&mut self.entries[idx])
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.entries.iter().find(|e| e.key() == key)
    }
}

impl<T> KeyedList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a KeyedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

macro_rules! keyed {
    ($t:ty, $field:ident, $list:literal) => {
        impl Keyed for $t {
            type Key = String;
            const LIST: &'static str = $list;

            fn key(&self) -> &String {
                &self.$field
            }

            fn with_key(key: String) -> Self {
                Self {
                    $field: key,
                    ..Default::default()
                }
            }
        }
    };
}

/// Root of the document, serialized as `vnf-bd: {...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BdDocument {
    #[serde(rename = "vnf-bd")]
    pub vnf_bd: VnfBd,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VnfBd {
    pub id: String,
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub experiments: Experiments,
    #[serde(skip_serializing_if = "Environment::is_empty")]
    pub environment: Environment,
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub targets: KeyedList<Target>,
    #[serde(skip_serializing_if = "Scenario::is_empty")]
    pub scenario: Scenario,
    #[serde(skip_serializing_if = "Proceedings::is_empty")]
    pub proceedings: Proceedings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Experiments {
    pub methods: String,
    pub tests: String,
    pub trials: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Plugin::is_empty")]
    pub plugin: Plugin,
}

impl Environment {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.plugin.is_empty()
    }
}

/// Plugin driving the environment (e.g., the emulator or the orchestrator endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugin {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub parameters: KeyedList<PluginParameter>,
}

impl Plugin {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.parameters.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginParameter {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
keyed!(PluginParameter, input, "environment.plugin.parameters");

/// System under test.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Target {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
keyed!(Target, id, "targets");

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scenario {
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub nodes: KeyedList<Node>,
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub links: KeyedList<Link>,
}

impl Scenario {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_format: Option<String>,
    #[serde(skip_serializing_if = "Resources::is_empty")]
    pub resources: Resources,
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub connection_points: KeyedList<ConnectionPoint>,
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub lifecycle: KeyedList<Lifecycle>,
}
keyed!(Node, id, "scenario.nodes");

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resources {
    #[serde(skip_serializing_if = "Cpu::is_empty")]
    pub cpu: Cpu,
    #[serde(skip_serializing_if = "Memory::is_empty")]
    pub memory: Memory,
    #[serde(skip_serializing_if = "Storage::is_empty")]
    pub storage: Storage,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.memory.is_empty() && self.storage.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cpu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_bw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinning: Option<String>,
}

impl Cpu {
    pub fn is_empty(&self) -> bool {
        self.vcpus.is_none() && self.cpu_bw.is_none() && self.pinning.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Memory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Memory {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.unit.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Storage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Volumes are not supported and always stay unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<String>,
}

impl Storage {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.unit.is_none() && self.volumes.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectionPoint {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
keyed!(ConnectionPoint, id, "scenario.nodes.connection_points");

/// Lifecycle workflows supported by the generator.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Workflow {
    #[default]
    Start,
    Stop,
}

impl Workflow {
    /// Per-function parameter holding the command of this workflow, e.g. `cmd_start`.
    pub fn command_parameter(&self) -> String {
        format!("cmd_{self}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lifecycle {
    pub workflow: Workflow,
    pub implementation: String,
}

impl Keyed for Lifecycle {
    type Key = Workflow;
    const LIST: &'static str = "scenario.nodes.lifecycle";

    fn key(&self) -> &Workflow {
        &self.workflow
    }

    fn with_key(workflow: Workflow) -> Self {
        Self {
            workflow,
            implementation: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Link {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_point_refs: Vec<String>,
}
keyed!(Link, id, "scenario.links");

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Proceedings {
    #[serde(skip_serializing_if = "KeyedList::is_empty")]
    pub attributes: KeyedList<Attribute>,
}

impl Proceedings {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
keyed!(Attribute, name, "proceedings.attributes");
