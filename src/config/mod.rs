pub mod toml_config;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::driver::GreetingDriver;
    use crate::domain::model::{Greeter, Person, PersonInput};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_paired_fields, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "greeter")]
    #[command(about = "Prints a greeting, then greets each configured person")]
    pub struct CliConfig {
        /// Path to a TOML run file ([greeter] message, [[people]] list)
        #[arg(short, long)]
        pub config: Option<String>,

        /// Override the greeting message
        #[arg(short, long)]
        pub message: Option<String>,

        /// First name of the person to greet (requires --last-name)
        #[arg(long)]
        pub first_name: Option<String>,

        /// Last name of the person to greet (requires --first-name)
        #[arg(long)]
        pub last_name: Option<String>,

        /// Person to greet as a JSON object
        #[arg(long, conflicts_with_all = ["first_name", "last_name"])]
        pub person_json: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON on stderr")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// 依序套用：內建預設 → TOML 檔案 → 命令列覆蓋
        pub fn resolve_driver(&self) -> Result<GreetingDriver> {
            let base = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    let file_config = TomlConfig::from_file(path)?;
                    file_config.validate()?;
                    file_config.build_driver()?
                }
                None => GreetingDriver::default(),
            };

            let greeter = match &self.message {
                Some(message) => {
                    tracing::debug!("🔧 Message overridden to: {:?}", message);
                    Greeter::new(message.as_str())
                }
                None => base.greeter().clone(),
            };

            let people = match self.person_override()? {
                Some(person) => vec![person],
                None => base.people().to_vec(),
            };

            Ok(GreetingDriver::new(greeter, people))
        }

        fn person_override(&self) -> Result<Option<Person>> {
            if let Some(json) = &self.person_json {
                return Person::from_json(json).map(Some);
            }

            if self.first_name.is_none() && self.last_name.is_none() {
                return Ok(None);
            }

            let input = PersonInput {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
            };
            Person::try_from(input).map(Some)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            validate_paired_fields(
                "first_name",
                &self.first_name,
                "last_name",
                &self.last_name,
            )
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
