use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use serde::{Deserialize, Serialize};

const GREETING_PREFIX: &str = "Hello, ";

/// Holds a greeting message and renders greeting lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeter {
    pub greeting: String,
}

impl Greeter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            greeting: message.into(),
        }
    }

    pub fn greet(&self) -> String {
        format!("{}{}", GREETING_PREFIX, self.greeting)
    }

    /// 與 `greeting` 無關，只取決於傳入的人名
    pub fn greet_person(&self, person: &Person) -> String {
        format!(
            "{}{} {}",
            GREETING_PREFIX, person.first_name, person.last_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// 從 JSON 物件解析，缺少任一欄位即回傳 `MissingFieldError`
    pub fn from_json(content: &str) -> Result<Self> {
        let input: PersonInput = serde_json::from_str(content)?;
        Self::try_from(input)
    }
}

/// A person as it arrives from loosely-shaped input, before presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
}

impl TryFrom<PersonInput> for Person {
    type Error = crate::utils::error::GreeterError;

    fn try_from(input: PersonInput) -> Result<Self> {
        let first_name = validate_required_field("first_name", &input.first_name)?;
        let last_name = validate_required_field("last_name", &input.last_name)?;
        Ok(Person::new(first_name.as_str(), last_name.as_str()))
    }
}
