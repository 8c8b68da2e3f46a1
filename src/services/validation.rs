//! Input validation shared by the job board mutations

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::sync::LazyLock;

use crate::errors::{AppError, AppResult};

/// Longest address that fits the `applicant_email` column
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Salaries are stored as NUMERIC(10, 2)
pub const SALARY_MAX_DIGITS: u32 = 10;
pub const SALARY_DECIMAL_PLACES: u32 = 2;

pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const INVALID_NUMBER_MESSAGE: &str = "Enter a number.";
pub const SALARY_TOO_LARGE_MESSAGE: &str =
    "Ensure that there are no more than 10 digits in total.";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^[A-Za-z0-9!\#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!\#$%&'*+/=?^_`{|}~-]+)*
        @
        (?:
            localhost
            |
            (?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+
            # top-level label may be punycode but never ends in a hyphen
            [A-Za-z0-9-]{1,62}[A-Za-z0-9]
        )$
        ",
    )
    .expect("email pattern is valid")
});

/// Trim and check that `email` looks like an address, returning the trimmed form
pub fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim();
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(email) {
        return Err(AppError::validation(INVALID_EMAIL_MESSAGE));
    }
    Ok(email.to_string())
}

/// Convert a client-supplied salary into the stored NUMERIC(10, 2) form
pub fn normalize_salary(salary: f64) -> AppResult<Decimal> {
    if !salary.is_finite() {
        return Err(AppError::validation(INVALID_NUMBER_MESSAGE));
    }

    let value = Decimal::from_f64(salary)
        .ok_or_else(|| AppError::validation(INVALID_NUMBER_MESSAGE))?
        .round_dp(SALARY_DECIMAL_PLACES);

    let integer_digits_allowed = SALARY_MAX_DIGITS - SALARY_DECIMAL_PLACES;
    let limit = Decimal::from(10_i64.pow(integer_digits_allowed));
    if value.abs() >= limit {
        return Err(AppError::validation(SALARY_TOO_LARGE_MESSAGE));
    }

    Ok(value)
}
