//! Mock account data and sign-in form checks.
//!
//! Nothing here authenticates anyone: forms are checked for shape only and the
//! profile is a fixed demo record.
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("please fill in your {0}")]
    MissingField(&'static str),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
    #[error("passwords don't match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns an error when a field is blank or the email is malformed.
    pub fn validate(&self) -> Result<(), SignupError> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        check_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns an error when a field is blank, the email is malformed or the
    /// two passwords differ.
    pub fn validate(&self) -> Result<(), SignupError> {
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        require("email", &self.email)?;
        require("phone number", &self.phone)?;
        require("password", &self.password)?;
        check_email(&self.email)?;
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }

    /// Form field setter keyed by the input element id.
    pub fn set_field(&mut self, id: &str, value: String) {
        match id {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "password" => self.password = value,
            "confirmPassword" => self.confirm_password = value,
            _ => log::debug!("ignoring unknown signup field {id}"),
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), SignupError> {
    if value.trim().is_empty() {
        Err(SignupError::MissingField(field))
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), SignupError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(SignupError::InvalidEmail(email.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    Processing,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Processing => "Processing",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub label: String,
    pub line: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub brand: String,
    pub last4: String,
    pub expires: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
    #[serde(default)]
    pub cards: Vec<SavedCard>,
}

impl Profile {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a profile.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Initials for the avatar fallback, e.g. "JD" for "John Doe".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Orders newest first.
    #[must_use]
    pub fn recent_orders(&self) -> Vec<&OrderSummary> {
        let mut orders: Vec<&OrderSummary> = self.orders.iter().collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765 43210".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }
    }

    #[test]
    fn signup_accepts_complete_form() {
        assert_eq!(signup().validate(), Ok(()));
    }

    #[test]
    fn signup_rejects_password_mismatch() {
        let mut form = signup();
        form.set_field("confirmPassword", "other".into());
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn signup_reports_first_missing_field() {
        let mut form = signup();
        form.set_field("lastName", "  ".into());
        assert_eq!(form.validate(), Err(SignupError::MissingField("last name")));
    }

    #[test]
    fn login_rejects_malformed_email() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "pw".into(),
        };
        assert!(matches!(form.validate(), Err(SignupError::InvalidEmail(_))));
    }

    #[test]
    fn profile_initials_and_order_sorting() {
        let profile = Profile::from_json(
            r#"{
                "name": "John Doe", "email": "john@example.com", "phone": "1",
                "address": "Street",
                "orders": [
                    {"id": "ORD-1", "date": "2023-07-15", "status": "Delivered", "total": 420},
                    {"id": "ORD-2", "date": "2023-07-30", "status": "Processing", "total": 580}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.initials(), "JD");
        let recent = profile.recent_orders();
        assert_eq!(recent[0].id, "ORD-2");
        assert_eq!(recent[0].status.label(), "Processing");
    }
}
