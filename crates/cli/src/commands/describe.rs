use anyhow::Result;
use tracing::debug;

use crate::cli::ParameterArgs;
use crate::utils::{load_parameters, run_type};

pub fn describe_command(input: &ParameterArgs) -> Result<()> {
    let parameters = load_parameters(input)?;
    debug!("Describing {} parameters", parameters.len());

    println!("{}", run_type().describe_parameters(&parameters));
    Ok(())
}
