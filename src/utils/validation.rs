use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CheckError::invalid_config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_env_var_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('=') || name.contains('\0') {
        return Err(CheckError::invalid_config(
            field_name,
            format!("'{}' is not a valid environment variable name", name),
        ));
    }
    Ok(())
}

pub fn validate_program(field_name: &str, program: &str) -> Result<()> {
    validate_non_empty_string(field_name, program)?;

    if program.contains('\0') {
        return Err(CheckError::invalid_config(
            field_name,
            "Program path contains null bytes",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("source.var", "ANSWER").is_ok());
        assert!(validate_non_empty_string("source.var", "").is_err());
        assert!(validate_non_empty_string("source.var", "   ").is_err());
    }

    #[test]
    fn test_validate_env_var_name() {
        assert!(validate_env_var_name("source.var", "ANSWER_VALUE").is_ok());
        assert!(validate_env_var_name("source.var", "A=B").is_err());
    }

    #[test]
    fn test_validate_program() {
        assert!(validate_program("source.program", "/bin/echo").is_ok());
        assert!(validate_program("source.program", "").is_err());
        assert!(validate_program("source.program", "bad\0path").is_err());
    }
}
