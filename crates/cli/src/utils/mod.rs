pub mod params;

pub use params::{load_parameters, run_type};
