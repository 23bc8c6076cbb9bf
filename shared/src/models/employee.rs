//! Employee Model

use super::serde_helpers;
use super::validation::required;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee ID type
pub type EmployeeId = i32;

/// Stored employee record
///
/// `is_active` is false once the employee has been soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    pub hire_date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match against name, email, position and department
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.position,
            &self.department,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Create / update employee payload
///
/// Server-owned fields (`hireDate`, `isActive`, `fullName`) are accepted
/// and ignored. A missing `id` reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default)]
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "max length exceeded")
    )]
    pub first_name: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "max length exceeded")
    )]
    pub last_name: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(
        custom(function = "required"),
        email(message = "invalid email syntax")
    )]
    pub email: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(length(max = 50, message = "max length exceeded"))]
    pub department: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    #[validate(length(max = 100, message = "max length exceeded"))]
    pub position: String,
}

impl From<&Employee> for EmployeePayload {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
        }
    }
}

/// Employee as returned by the API, with the derived `fullName`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(flatten)]
    pub employee: Employee,
    pub full_name: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.full_name(),
            employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            id: 0,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Analyst".into(),
        }
    }

    fn employee() -> Employee {
        Employee {
            id: 7,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Analyst".into(),
            hire_date: Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let p = EmployeePayload {
            first_name: "  ".into(),
            last_name: String::new(),
            ..payload()
        };
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_length_limits_count_chars() {
        let ok = EmployeePayload {
            department: "é".repeat(50),
            ..payload()
        };
        assert!(ok.validate().is_ok());

        let too_long = EmployeePayload {
            department: "x".repeat(51),
            first_name: "y".repeat(101),
            ..payload()
        };
        let errors = too_long.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("department"));
        assert!(fields.contains_key("first_name"));
    }

    #[test]
    fn test_invalid_email() {
        let p = EmployeePayload {
            email: "not-an-email".into(),
            ..payload()
        };
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_payload_ignores_server_owned_fields() {
        let json = r#"{
            "id": 3, "firstName": "Ada", "lastName": "Lovelace",
            "email": "ada@example.com", "department": null,
            "hireDate": "2020-01-01T00:00:00Z", "isActive": false,
            "fullName": "whatever", "tasks": []
        }"#;
        let p: EmployeePayload = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 3);
        assert_eq!(p.department, "");
        assert_eq!(p.position, "");
    }

    #[test]
    fn test_missing_id_defaults_to_zero() {
        let p: EmployeePayload = serde_json::from_str(r#"{"firstName":"A"}"#).unwrap();
        assert_eq!(p.id, 0);
        assert_eq!(p.email, "");
    }

    #[test]
    fn test_full_name_and_response() {
        let resp = EmployeeResponse::from(employee());
        assert_eq!(resp.full_name, "Ada Lovelace");

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn test_matches_search() {
        let e = employee();
        assert!(e.matches_search("love"));
        assert!(e.matches_search("ENGINEER"));
        assert!(e.matches_search("example.com"));
        assert!(e.matches_search(""));
        assert!(!e.matches_search("sales"));
    }
}
