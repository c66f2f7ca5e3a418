use crate::core::driver::{GreetingDriver, DEFAULT_MESSAGE};
use crate::domain::model::{Greeter, Person, PersonInput};
use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeter: GreeterSection,
    pub people: Option<Vec<PersonInput>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreeterSection {
    pub message: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GreeterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreeterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GreeterError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn message(&self) -> &str {
        self.greeter.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    /// 未設定 `[[people]]` 時回傳 `None`，由呼叫端決定預設名單
    pub fn people(&self) -> Result<Option<Vec<Person>>> {
        self.people
            .as_ref()
            .map(|inputs| {
                inputs
                    .iter()
                    .enumerate()
                    .map(|(index, input)| {
                        Person::try_from(input.clone()).map_err(|e| match e {
                            GreeterError::MissingFieldError { field } => {
                                GreeterError::MissingFieldError {
                                    field: format!("people[{}].{}", index, field),
                                }
                            }
                            other => other,
                        })
                    })
                    .collect::<Result<Vec<Person>>>()
            })
            .transpose()
    }

    pub fn build_driver(&self) -> Result<GreetingDriver> {
        let greeter = Greeter::new(self.message());
        let people = match self.people()? {
            Some(people) => people,
            None => GreetingDriver::default().people().to_vec(),
        };
        Ok(GreetingDriver::new(greeter, people))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.people().map(|_| ())
    }
}
