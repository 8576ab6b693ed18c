//! Form validation
//!
//! Runs before any request is sent. Every failure is an [`AppError`]
//! carrying a `field` detail so the form can point at the offending input.

use regex::Regex;
use std::sync::LazyLock;

use crate::client::{CenterSignup, DriverSignup, SignupRequest};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{ItemDraft, Role};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PHONE_DIGITS: usize = 10;
pub const MIN_CENTER_CAPACITY: i64 = 1;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Reject blank input
pub fn validate_required_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field, format!("{field} is required")));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten digits once spaces and dashes are removed
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
    digits.len() == PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

/// Signup form as filled in, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub role: Option<Role>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    // STAFF
    pub center_name: String,
    pub center_location: String,
    pub max_capacity: i64,
    // DRIVER
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_number: String,
    pub vehicle_type: String,
}

/// Validate the signup form and build the request.
///
/// Checks run in form order: role, account fields, then the
/// role-specific section. The first failure is returned.
pub fn validate_signup(form: &SignupForm) -> AppResult<SignupRequest> {
    // 1. Role
    let role = form
        .role
        .ok_or_else(|| AppError::required("role", "Please select a role"))?;

    // 2. Account
    for (value, field) in [
        (&form.username, "username"),
        (&form.email, "email"),
        (&form.password, "password"),
        (&form.confirm_password, "confirmPassword"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::required(field, "All fields are required"));
        }
    }
    if form.password != form.confirm_password {
        return Err(AppError::new(ErrorCode::PasswordMismatch).with_detail("field", "confirmPassword"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort).with_detail("field", "password"));
    }
    if !is_valid_email(&form.email) {
        return Err(AppError::invalid_format("email", "Please enter a valid email address"));
    }

    // 3. Role-specific section
    let mut request = SignupRequest {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        role,
        collection_center: None,
        driver_info: None,
    };
    match role {
        Role::Staff => {
            validate_required_text(&form.center_name, "centerName")?;
            validate_required_text(&form.center_location, "centerLocation")?;
            if form.max_capacity < MIN_CENTER_CAPACITY {
                return Err(AppError::new(ErrorCode::CenterInvalidCapacity).with_detail("field", "maxCapacity"));
            }
            request.collection_center = Some(CenterSignup {
                name: form.center_name.trim().to_string(),
                location: form.center_location.trim().to_string(),
                max_capacity: form.max_capacity,
            });
        }
        Role::Driver => {
            validate_required_text(&form.driver_name, "driverName")?;
            validate_required_text(&form.driver_phone, "driverPhone")?;
            if !is_valid_phone(&form.driver_phone) {
                return Err(AppError::invalid_format(
                    "driverPhone",
                    "Please enter a valid 10-digit phone number",
                ));
            }
            request.driver_info = Some(DriverSignup {
                name: form.driver_name.trim().to_string(),
                phone: form.driver_phone.trim().to_string(),
                vehicle_number: non_blank(&form.vehicle_number),
                vehicle_type: non_blank(&form.vehicle_type),
            });
        }
        Role::Donor | Role::Admin => {}
    }
    Ok(request)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Donation name and at least one complete item line
pub fn validate_donation_form(name: &str, items: &[ItemDraft]) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::required("name", "Please enter a donation name"));
    }
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::DonationEmpty).with_detail("field", "items"));
    }
    if let Some(index) = items
        .iter()
        .position(|item| item.item_name.trim().is_empty() || item.quantity <= 0)
    {
        return Err(AppError::required("items", "Please fill in all item details").with_detail("index", index));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemType, Unit};

    fn donor_form() -> SignupForm {
        SignupForm {
            role: Some(Role::Donor),
            username: "dana".into(),
            email: "dana@example.org".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            ..Default::default()
        }
    }

    fn item(name: &str, quantity: i32) -> ItemDraft {
        ItemDraft {
            item_name: name.into(),
            quantity,
            unit: Unit::Kg,
            item_type: ItemType::Food,
        }
    }

    #[test]
    fn test_valid_donor_signup() {
        let req = validate_signup(&donor_form()).unwrap();
        assert_eq!(req.role, Role::Donor);
        assert!(req.collection_center.is_none());
    }

    #[test]
    fn test_signup_failures_in_order() {
        let err = validate_signup(&SignupForm { role: None, ..donor_form() }).unwrap_err();
        assert_eq!(err.field(), Some("role"));

        let err = validate_signup(&SignupForm { email: " ".into(), ..donor_form() }).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.field(), Some("email"));

        let err = validate_signup(&SignupForm { confirm_password: "secret2".into(), ..donor_form() }).unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordMismatch);

        let short = SignupForm {
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..donor_form()
        };
        assert_eq!(validate_signup(&short).unwrap_err().code, ErrorCode::PasswordTooShort);

        let err = validate_signup(&SignupForm { email: "dana@example".into(), ..donor_form() }).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_staff_signup_needs_center() {
        let staff = SignupForm {
            role: Some(Role::Staff),
            center_name: "Downtown".into(),
            center_location: "Main St".into(),
            max_capacity: 0,
            ..donor_form()
        };
        assert_eq!(validate_signup(&staff).unwrap_err().code, ErrorCode::CenterInvalidCapacity);

        let no_location = SignupForm { center_location: "".into(), max_capacity: 100, ..staff.clone() };
        assert_eq!(validate_signup(&no_location).unwrap_err().field(), Some("centerLocation"));

        let req = validate_signup(&SignupForm { max_capacity: 100, ..staff }).unwrap();
        assert_eq!(req.collection_center.unwrap().max_capacity, 100);
    }

    #[test]
    fn test_driver_phone() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("555 123 4567"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("(555)1234567"));
        assert!(!is_valid_phone("555123456a"));

        let driver = SignupForm {
            role: Some(Role::Driver),
            driver_name: "Sam".into(),
            driver_phone: "555-123-4567".into(),
            vehicle_type: "Van".into(),
            ..donor_form()
        };
        let info = validate_signup(&driver).unwrap().driver_info.unwrap();
        assert_eq!(info.vehicle_type.as_deref(), Some("Van"));
        assert_eq!(info.vehicle_number, None);

        let bad = SignupForm { driver_phone: "12345".into(), ..driver };
        assert_eq!(validate_signup(&bad).unwrap_err().field(), Some("driverPhone"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn test_donation_form() {
        assert!(validate_donation_form("Rice", &[item("Rice", 5)]).is_ok());
        assert_eq!(validate_donation_form(" ", &[item("Rice", 5)]).unwrap_err().field(), Some("name"));
        assert_eq!(validate_donation_form("Rice", &[]).unwrap_err().code, ErrorCode::DonationEmpty);
        let err = validate_donation_form("Rice", &[item("Rice", 5), item("", 2)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(validate_donation_form("Rice", &[item("Beans", 0)]).is_err());
    }
}
