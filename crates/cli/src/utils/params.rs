use anyhow::{Context, Result};
use tracing::{debug, warn};
use unity_runner_core::{ParameterMapping, RunTypeRegistry, UnityRunType, params::keys};

use crate::cli::ParameterArgs;

/// Registry stand-in for running outside a build server: nothing else is
/// registered
struct EmptyRegistry;

impl RunTypeRegistry for EmptyRegistry {
    fn find_run_type(&self, _id: &str) -> bool {
        false
    }
}

pub fn run_type() -> UnityRunType {
    UnityRunType::new(&EmptyRegistry)
}

/// Build the parameter mapping from a file, then `--param` overrides, then
/// defaults for whatever is still missing
pub fn load_parameters(args: &ParameterArgs) -> Result<ParameterMapping> {
    let mut parameters = match args.params_file {
        Some(ref path) => ParameterMapping::from_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => ParameterMapping::new(),
    };

    let mut overrides = ParameterMapping::new();
    for assignment in &args.params {
        let (key, value) = ParameterMapping::parse_assignment(assignment)?;
        debug!("Parameter override {}={}", key, value);
        overrides.insert(key, value);
    }
    parameters.merge(&overrides);

    if args.defaults {
        parameters.apply_defaults(&run_type().default_properties());
    }

    for (key, _) in parameters.iter() {
        if !keys::is_known(key) {
            warn!("Ignoring unknown parameter '{}'", key);
        }
    }

    Ok(parameters)
}
