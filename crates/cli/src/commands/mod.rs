pub mod defaults;
pub mod describe;
pub mod requirements;

pub use defaults::defaults_command;
pub use describe::describe_command;
pub use requirements::requirements_command;
