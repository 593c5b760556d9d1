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
//! Rendering of descriptors as YAML text.

use thiserror::Error;

use crate::model::BdDocument;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize the document to its canonical JSON form, and re-encode that as YAML. Key order
/// follows the schema.
pub fn render(doc: &BdDocument) -> Result<String, RenderError> {
    let json = serde_json::to_value(doc)?;
    Ok(serde_yaml::to_string(&json)?)
}
