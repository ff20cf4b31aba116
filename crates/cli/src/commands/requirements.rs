use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;
use unity_runner_core::Requirement;

use crate::cli::ParameterArgs;
use crate::utils::{load_parameters, run_type};

#[derive(Debug, Serialize)]
struct RequirementsReport<'a> {
    run_type: &'a str,
    requirements: &'a [Requirement],
}

pub fn requirements_command(input: &ParameterArgs, json: bool) -> Result<()> {
    let parameters = load_parameters(input)?;
    let run_type = run_type();
    let requirements = run_type.requirements(&parameters);
    debug!("Resolved {} requirements", requirements.len());

    if json {
        let report = RequirementsReport {
            run_type: run_type.run_type(),
            requirements: &requirements,
        };
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize requirements")?;
        println!("{}", output);
    } else {
        for requirement in &requirements {
            println!("{}", requirement);
        }
    }

    Ok(())
}
