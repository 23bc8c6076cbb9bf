//! Custom validator functions used by the payload derives

use std::borrow::Cow;
use validator::ValidationError;

/// Rejects empty and whitespace-only strings
pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("required"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("Ada").is_ok());
        assert!(required("").is_err());
        assert!(required("   \t").is_err());
    }
}
