pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::driver::GreetingDriver;
pub use domain::model::{Greeter, Person, PersonInput};
pub use utils::error::{GreeterError, Result};
