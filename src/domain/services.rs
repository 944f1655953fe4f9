//! Validation and table generation services.
//!
//! This module turns the raw text of the two form fields into validated
//! parameters and derives a multiplication table from them. Everything here
//! is pure: no state, no I/O.

use super::errors::{DomainResult, ValidationError};
use super::models::{MultiplicationTable, ValidatedParameters};

/// Parses free-form field text as a decimal number.
///
/// Surrounding whitespace is ignored. Signed integers, decimals and
/// exponent notation are accepted. Anything that is not a finite number
/// (including blank text, `NaN` and `inf`) yields `None`.
///
/// # Examples
///
/// ```
/// use timestable::domain::parse_number;
///
/// assert_eq!(parse_number("-2.5"), Some(-2.5));
/// assert_eq!(parse_number(" 7 "), Some(7.0));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("NaN"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validates the two form fields.
pub struct FormValidator;

impl FormValidator {
    /// Parses and validates the raw text of both fields.
    ///
    /// The number is checked first; when it is invalid the limit is not
    /// examined at all, so a form with two bad fields reports the number.
    ///
    /// # Arguments
    ///
    /// * `number_text` - Raw text of the "Number" field
    /// * `upper_bound_text` - Raw text of the "Multiply till" field
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidBase`] if the number is not finite
    /// * [`ValidationError::InvalidLimit`] if the limit is not finite or not
    ///   strictly positive
    ///
    /// # Examples
    ///
    /// ```
    /// use timestable::domain::{FormValidator, ValidationError};
    ///
    /// let params = FormValidator::validate("7", "5").unwrap();
    /// assert_eq!((params.base, params.limit), (7.0, 5.0));
    ///
    /// assert_eq!(FormValidator::validate("x", "-1"), Err(ValidationError::InvalidBase));
    /// assert_eq!(FormValidator::validate("7", "0"), Err(ValidationError::InvalidLimit));
    /// ```
    pub fn validate(number_text: &str, upper_bound_text: &str) -> DomainResult<ValidatedParameters> {
        let base = parse_number(number_text).ok_or(ValidationError::InvalidBase)?;
        let limit = parse_number(upper_bound_text)
            .filter(|limit| *limit > 0.0)
            .ok_or(ValidationError::InvalidLimit)?;
        Ok(ValidatedParameters { base, limit })
    }
}

/// Derives multiplication tables.
pub struct TableGenerator;

impl TableGenerator {
    /// Generates the table for `base` with multipliers `1..=limit`.
    ///
    /// The multiplier keeps counting while it is `<= limit`, so a
    /// fractional limit is truncated rather than rounded: a limit of 3.7
    /// gives three rows. A limit below 1 gives an empty table. Never fails
    /// for finite input.
    ///
    /// # Examples
    ///
    /// ```
    /// use timestable::domain::TableGenerator;
    ///
    /// let table = TableGenerator::generate(2.5, 3.0);
    /// let rows: Vec<(u64, f64)> = table.rows().map(|r| (r.multiplier, r.product)).collect();
    /// assert_eq!(rows, vec![(1, 2.5), (2, 5.0), (3, 7.5)]);
    ///
    /// assert_eq!(TableGenerator::generate(4.0, 3.7).len(), 3);
    /// assert!(TableGenerator::generate(4.0, 0.5).is_empty());
    /// ```
    pub fn generate(base: f64, limit: f64) -> MultiplicationTable {
        MultiplicationTable::new(base, Self::row_count(limit))
    }

    /// Generates the table for already validated parameters.
    pub fn generate_from(params: ValidatedParameters) -> MultiplicationTable {
        Self::generate(params.base, params.limit)
    }

    /// Number of multipliers `i >= 1` with `i <= limit`.
    fn row_count(limit: f64) -> u64 {
        if limit >= 1.0 {
            // Saturates at u64::MAX for limits beyond its range.
            limit.floor() as u64
        } else {
            0
        }
    }
}
