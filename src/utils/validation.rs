use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GreeterError::MissingFieldError {
        field: field_name.to_string(),
    })
}

/// 兩個欄位必須同時提供或同時省略
pub fn validate_paired_fields<A, B>(
    first_name: &str,
    first: &Option<A>,
    second_name: &str,
    second: &Option<B>,
) -> Result<()> {
    match (first.is_some(), second.is_some()) {
        (true, false) => Err(GreeterError::MissingFieldError {
            field: second_name.to_string(),
        }),
        (false, true) => Err(GreeterError::MissingFieldError {
            field: first_name.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "greeter.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Mike".to_string());
        assert_eq!(validate_required_field("first_name", &present).unwrap(), "Mike");

        let absent: Option<String> = None;
        match validate_required_field("first_name", &absent) {
            Err(GreeterError::MissingFieldError { field }) => assert_eq!(field, "first_name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_paired_fields() {
        let some = Some("x");
        let none: Option<&str> = None;
        assert!(validate_paired_fields("a", &some, "b", &some).is_ok());
        assert!(validate_paired_fields("a", &none, "b", &none).is_ok());

        match validate_paired_fields("a", &some, "b", &none) {
            Err(GreeterError::MissingFieldError { field }) => assert_eq!(field, "b"),
            other => panic!("unexpected result: {:?}", other),
        }
        match validate_paired_fields("a", &none, "b", &some) {
            Err(GreeterError::MissingFieldError { field }) => assert_eq!(field, "a"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
