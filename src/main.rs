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
use std::path::PathBuf;

use clap::Parser;

use vnfbd::{
    config::{RunConfig, Settings},
    experiment::load_experiments,
    generator::BdGenerator,
    util,
};

#[derive(Parser, Debug)]
#[command(author, version, about)] // get author/version information from Cargo.toml
struct Args {
    /// Run configuration (YAML) containing the execution targets.
    #[arg(short, long)]
    config: PathBuf,
    /// Service experiments with their generated experiment configurations (YAML or JSON).
    #[arg(short, long)]
    experiments: PathBuf,
    /// Output directory for the IETF BMWG VNF-BD files. Nothing is generated if unset.
    #[arg(long = "ibbd")]
    ibbd_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    let args = Args::parse();
    let settings = Settings {
        ibbd_dir: args.ibbd_dir,
        config: RunConfig::from_file(&args.config)?,
    };
    let experiments = load_experiments(&args.experiments)?;

    let outcomes = BdGenerator::new(&settings, &experiments).run();
    if !outcomes.is_empty() {
        let written = outcomes.iter().filter(|o| o.is_ok()).count();
        log::info!(
            "Generated {written} IETF BMWG BDs, {} failed.",
            outcomes.len() - written
        );
    }

    Ok(())
}
