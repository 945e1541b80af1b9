//! # Validation Module
//!
//! Form rules for the storefront: registration, review, and support.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View layer (external)                                         │
//! │  ├── Field presence, input masking                                      │
//! │  └── Immediate feedback while typing                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                            │
//! │  ├── The actual rules, as pure functions                                │
//! │  └── Per-field errors the view maps onto inputs                         │
//! │                                                                         │
//! │  There is no third layer: nothing here reaches a server.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field validators return the first broken rule for that field; the form
//! aggregates collect one error per failed field so the view can paint all
//! of them in a single pass.
//!
//! ## Usage
//! ```rust
//! use levelup_core::validation::{validate_display_name, parse_quantity};
//!
//! validate_display_name("Ana Martínez").unwrap();
//! assert_eq!(parse_quantity("3"), 3);
//! assert_eq!(parse_quantity("abc"), 1);
//! ```

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{
    DUOC_DISCOUNT_BPS, DUOC_EMAIL_DOMAIN, MAX_RATING, MIN_ACCOUNT_AGE_YEARS, MIN_RATING,
    NAME_MIN_LEN, PASSWORD_MIN_LEN, REVIEW_COMMENT_MAX_LEN, REVIEW_COMMENT_WARN_LEN,
};

// =============================================================================
// Quantity Parsing
// =============================================================================

/// Parses the free-text quantity input next to an "add to cart" button.
///
/// The storefront is deliberately permissive here: unparseable text, an
/// empty box, zero, or a negative number all mean "one". Positive integers
/// pass through unchanged. There is no upper bound.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|qty| *qty >= 1)
        .unwrap_or(1)
}

// =============================================================================
// Registration Field Validators
// =============================================================================

/// Validates a customer display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at least 2 characters
/// - Letters and spaces only (accented letters and ñ included)
///
/// ## Example
/// ```rust
/// use levelup_core::validation::validate_display_name;
///
/// assert!(validate_display_name("Ana Martínez").is_ok());
/// assert!(validate_display_name("X").is_err());
/// assert!(validate_display_name("R2-D2").is_err());
/// ```
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: NAME_MIN_LEN,
        });
    }

    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must contain only letters and spaces".to_string(),
        });
    }

    Ok(())
}

/// The perk attached to a valid registration email.
///
/// A `@duoc.cl` address unlocks the student discount; every other valid
/// address gets no perk. A perk is part of the success value, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmailPerk {
    /// No perk attached.
    Standard,
    /// Student discount for duoc.cl addresses.
    DuocDiscount,
}

impl EmailPerk {
    /// The discount this perk grants, in basis points.
    pub const fn discount_bps(&self) -> u32 {
        match self {
            EmailPerk::Standard => 0,
            EmailPerk::DuocDiscount => DUOC_DISCOUNT_BPS,
        }
    }

    /// Applies the perk's discount to a price.
    pub fn discounted(&self, price: Money) -> Money {
        price.apply_percentage_discount(self.discount_bps())
    }
}

/// Validates an email address and reports its perk.
///
/// ## Rules
/// - Must not be empty
/// - Shape `local@domain.tld`: exactly one `@`, no whitespace, and a dot
///   inside the domain with text on both sides
/// - A `@duoc.cl` address (case-insensitive) passes and carries
///   [`EmailPerk::DuocDiscount`]
///
/// ## Example
/// ```rust
/// use levelup_core::validation::{validate_email, EmailPerk};
///
/// assert_eq!(validate_email("ana@gmail.com").unwrap(), EmailPerk::Standard);
/// assert_eq!(validate_email("ana@duoc.cl").unwrap(), EmailPerk::DuocDiscount);
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<EmailPerk> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.tld".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((before, tld)) if !before.is_empty() && !tld.is_empty() => {}
        _ => return Err(invalid()),
    }

    let perk = if email
        .to_lowercase()
        .ends_with(&format!("@{}", DUOC_EMAIL_DOMAIN))
    {
        EmailPerk::DuocDiscount
    } else {
        EmailPerk::Standard
    };

    Ok(perk)
}

/// Validates a birth date string against the minimum account age.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as `YYYY-MM-DD` (the shape a date input submits)
/// - The registrant must be at least 18 on `today`
///
/// `today` is injected so the boundary is testable; [`RegistrationForm`]
/// passes the current date.
pub fn validate_birth_date(value: &str, today: NaiveDate) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "birth date".to_string(),
        });
    }

    let birth = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        ValidationError::InvalidFormat {
            field: "birth date".to_string(),
            reason: format!("must be YYYY-MM-DD: {}", e),
        }
    })?;

    if age_in_years(birth, today) < MIN_ACCOUNT_AGE_YEARS as i32 {
        return Err(ValidationError::UnderAge {
            minimum_years: MIN_ACCOUNT_AGE_YEARS,
        });
    }

    Ok(birth)
}

/// Whole years between `birth` and `today`, counting a year only once the
/// birthday has passed.
fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validates password strength.
///
/// ## Rules
/// - At least 8 characters
/// - At least one lowercase letter, one uppercase letter, and one digit
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: PASSWORD_MIN_LEN,
        });
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_lower && has_upper && has_digit) {
        return Err(ValidationError::InvalidFormat {
            field: "password".to_string(),
            reason: "must include uppercase, lowercase, and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates that the confirmation field repeats the password exactly.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult<()> {
    if confirmation != password {
        return Err(ValidationError::Mismatch {
            field: "password confirmation".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Review Field Validators
// =============================================================================

/// Validates a review comment.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 500 characters
pub fn validate_review_comment(comment: &str) -> ValidationResult<()> {
    if comment.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "comment".to_string(),
        });
    }

    if comment.chars().count() > REVIEW_COMMENT_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "comment".to_string(),
            max: REVIEW_COMMENT_MAX_LEN,
        });
    }

    Ok(())
}

/// Live length gauge for the review comment counter.
///
/// The view colors the character counter by this reading while the
/// reviewer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CommentGauge {
    /// Comfortably under the limit.
    Normal,
    /// Above the warning threshold (400), still acceptable.
    NearLimit,
    /// Over the 500-character limit; submission will be rejected.
    OverLimit,
}

/// Reads the gauge for a comment in progress.
pub fn comment_gauge(comment: &str) -> CommentGauge {
    let count = comment.chars().count();
    if count > REVIEW_COMMENT_MAX_LEN {
        CommentGauge::OverLimit
    } else if count > REVIEW_COMMENT_WARN_LEN {
        CommentGauge::NearLimit
    } else {
        CommentGauge::Normal
    }
}

/// Validates a star rating.
///
/// ## Rules
/// - Must be between 1 and 5 stars
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING as i64,
            max: MAX_RATING as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Form Aggregates
// =============================================================================

/// The registration form as submitted by the view layer.
///
/// All fields arrive as text; the birth date is the `YYYY-MM-DD` string a
/// date input produces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    /// Validates every field, collecting one error per failed field.
    ///
    /// On success returns the email's [`EmailPerk`] so the caller can show
    /// the student-discount banner.
    pub fn validate(&self, today: NaiveDate) -> Result<EmailPerk, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut perk = EmailPerk::Standard;

        if let Err(e) = validate_display_name(&self.name) {
            errors.push(e);
        }
        match validate_email(&self.email) {
            Ok(p) => perk = p,
            Err(e) => errors.push(e),
        }
        if let Err(e) = validate_birth_date(&self.birth_date, today) {
            errors.push(e);
        }
        if let Err(e) = validate_password(&self.password) {
            errors.push(e);
        }
        if let Err(e) = validate_password_confirmation(&self.password, &self.password_confirmation)
        {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(perk)
        } else {
            Err(errors)
        }
    }

    /// Validates against the current date.
    pub fn validate_today(&self) -> Result<EmailPerk, Vec<ValidationError>> {
        self.validate(Utc::now().date_naive())
    }
}

/// The review form as submitted by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewForm {
    /// Code of the product being reviewed.
    pub product_code: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Free-text comment, at most 500 characters.
    pub comment: String,
}

impl ReviewForm {
    /// Validates every field, collecting one error per failed field.
    ///
    /// The product must exist in the catalog: reviews for products the
    /// store does not sell are rejected.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let code = self.product_code.trim();
        if code.is_empty() {
            errors.push(ValidationError::Required {
                field: "product".to_string(),
            });
        } else if !catalog.contains(code) {
            errors.push(ValidationError::NotInCatalog {
                code: code.to_string(),
            });
        }
        if let Err(e) = validate_rating(self.rating) {
            errors.push(e);
        }
        if let Err(e) = validate_review_comment(&self.comment) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The support-contact form as submitted by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SupportForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SupportForm {
    /// Validates every field, collecting one error per failed field.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::Required {
                field: "name".to_string(),
            });
        }
        if let Err(e) = validate_email(&self.email) {
            errors.push(e);
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::Required {
                field: "message".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Ana Martínez").is_ok());
        assert!(validate_display_name("Ñandú").is_ok());

        assert!(matches!(
            validate_display_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_display_name("X"),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate_display_name("R2-D2"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_email_shapes() {
        assert_eq!(validate_email("ana@gmail.com").unwrap(), EmailPerk::Standard);

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("@nodomain.com").is_err());
        assert!(validate_email("nolocal@").is_err());
        assert!(validate_email("ana@sin-punto").is_err());
        assert!(validate_email("ana @gmail.com").is_err());
    }

    #[test]
    fn test_validate_email_duoc_perk() {
        assert_eq!(
            validate_email("ana@duoc.cl").unwrap(),
            EmailPerk::DuocDiscount
        );
        // Case-insensitive, like the original check
        assert_eq!(
            validate_email("Ana@DUOC.CL").unwrap(),
            EmailPerk::DuocDiscount
        );
        // Similar-looking domains get no perk
        assert_eq!(
            validate_email("ana@notduoc.cl.com").unwrap(),
            EmailPerk::Standard
        );
    }

    #[test]
    fn test_perk_discount_arithmetic() {
        let mouse_price = Money::from_minor(49_990);
        assert_eq!(
            EmailPerk::DuocDiscount.discounted(mouse_price).minor(),
            39_992
        );
        assert_eq!(EmailPerk::Standard.discounted(mouse_price), mouse_price);
    }

    #[test]
    fn test_validate_birth_date() {
        assert!(validate_birth_date("2000-01-15", today()).is_ok());

        assert!(matches!(
            validate_birth_date("", today()),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_birth_date("15/01/2000", today()),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_birth_date("2015-06-01", today()),
            Err(ValidationError::UnderAge { minimum_years: 18 })
        ));
    }

    #[test]
    fn test_birth_date_eighteenth_birthday_boundary() {
        // today() is 2026-08-06; born 2008-08-06 turns 18 exactly today
        assert!(validate_birth_date("2008-08-06", today()).is_ok());
        // One day younger is still 17
        assert!(matches!(
            validate_birth_date("2008-08-07", today()),
            Err(ValidationError::UnderAge { .. })
        ));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdef12").is_ok());

        assert!(matches!(
            validate_password(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_password("Ab1"),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate_password("alllowercase1"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_password("NODIGITSHERE"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_password_confirmation() {
        assert!(validate_password_confirmation("Abcdef12", "Abcdef12").is_ok());
        assert!(matches!(
            validate_password_confirmation("Abcdef12", "Abcdef13"),
            Err(ValidationError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_validate_review_comment_and_gauge() {
        assert!(validate_review_comment("Excelente mouse").is_ok());
        assert!(validate_review_comment("").is_err());
        assert!(validate_review_comment(&"x".repeat(500)).is_ok());
        assert!(validate_review_comment(&"x".repeat(501)).is_err());

        assert_eq!(comment_gauge(&"x".repeat(400)), CommentGauge::Normal);
        assert_eq!(comment_gauge(&"x".repeat(401)), CommentGauge::NearLimit);
        assert_eq!(comment_gauge(&"x".repeat(500)), CommentGauge::NearLimit);
        assert_eq!(comment_gauge(&"x".repeat(501)), CommentGauge::OverLimit);
    }

    #[test]
    fn test_validate_rating() {
        for rating in 1..=5u8 {
            assert!(validate_rating(rating).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_registration_form_happy_path() {
        let form = RegistrationForm {
            name: "Ana Martínez".to_string(),
            email: "ana@duoc.cl".to_string(),
            birth_date: "2000-01-15".to_string(),
            password: "Abcdef12".to_string(),
            password_confirmation: "Abcdef12".to_string(),
        };

        let perk = form.validate(today()).unwrap();
        assert_eq!(perk, EmailPerk::DuocDiscount);
    }

    #[test]
    fn test_registration_form_collects_every_failed_field() {
        let form = RegistrationForm {
            name: "X".to_string(),
            email: "bad".to_string(),
            birth_date: "2015-01-01".to_string(),
            password: "short".to_string(),
            password_confirmation: "different".to_string(),
        };

        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_review_form_against_catalog() {
        let catalog = Catalog::new(vec![Product::new(
            "MS001",
            "Mouse Gamer Logitech G502",
            49_990,
            "accesorios",
        )]);

        let ok = ReviewForm {
            product_code: "MS001".to_string(),
            rating: 5,
            comment: "Excelente".to_string(),
        };
        assert!(ok.validate(&catalog).is_ok());

        let bad = ReviewForm {
            product_code: "XX999".to_string(),
            rating: 0,
            comment: String::new(),
        };
        let errors = bad.validate(&catalog).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::NotInCatalog { code } if code == "XX999")));
    }

    #[test]
    fn test_support_form() {
        let ok = SupportForm {
            name: "Ana".to_string(),
            email: "ana@gmail.com".to_string(),
            message: "No llega mi pedido".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = SupportForm {
            name: String::new(),
            email: "bad".to_string(),
            message: "  ".to_string(),
        };
        assert_eq!(bad.validate().unwrap_err().len(), 3);
    }
}
