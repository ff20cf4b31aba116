//! Human-readable summaries of Unity build step parameters

mod builder;
pub mod rules;

pub use builder::DescriptionBuilder;
pub use rules::{DescriptionContext, DescriptionRule, RULES};

use crate::params::ParameterMapping;
use tracing::{debug, trace};

/// Summarize the effective configuration of a build step
///
/// One line per configured parameter in a fixed order; an empty string when
/// nothing is worth showing.
pub fn describe_parameters(parameters: &ParameterMapping) -> String {
    let context = DescriptionContext::new(parameters);
    debug!("Describing parameters in {} detection mode", context.detection_mode);

    let mut builder = DescriptionBuilder::new();
    for rule in &RULES {
        match rule.line(&context) {
            Some(line) => builder.add_parameter(&line),
            None => trace!("Nothing to describe for {}", rule.name),
        }
    }
    builder.build()
}
