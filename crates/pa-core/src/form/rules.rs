use chrono::NaiveDate;
use thiserror::Error;

use super::field::FormField;
use crate::product::{one_year_after, parse_input_date};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,

    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    #[error("not a valid date (expected YYYY-MM-DD)")]
    InvalidDate,

    #[error("release date must be today or later")]
    ReleaseInPast,

    #[error("revision date must be exactly one year after the release date")]
    RevisionMismatch,

    #[error("this id is already taken")]
    IdTaken,

    #[error("could not verify whether this id is available")]
    IdUnverified,
}

/// Run the synchronous rules of `field`.
///
/// `release` is the current raw value of the release date field; only the
/// revision rule reads it. `today` anchors the release rule.
pub fn validate_field(
    field: FormField,
    value: &str,
    release: &str,
    today: NaiveDate,
) -> Result<(), FieldError> {
    match field {
        FormField::Id => check_length(value, 3, 10),
        FormField::Name => check_length(value, 5, 100),
        FormField::Description => check_length(value, 10, 200),
        FormField::Logo => check_required(value),
        FormField::DateRelease => check_release(value, today),
        FormField::DateRevision => check_revision(value, release),
    }
}

fn check_required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

fn check_length(value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    check_required(value)?;
    let len = value.chars().count();
    if len < min {
        Err(FieldError::TooShort { min })
    } else if len > max {
        Err(FieldError::TooLong { max })
    } else {
        Ok(())
    }
}

fn check_release(value: &str, today: NaiveDate) -> Result<(), FieldError> {
    check_required(value)?;
    let release = parse_input_date(value).ok_or(FieldError::InvalidDate)?;
    if release < today {
        Err(FieldError::ReleaseInPast)
    } else {
        Ok(())
    }
}

fn check_revision(value: &str, release: &str) -> Result<(), FieldError> {
    check_required(value)?;
    let revision = parse_input_date(value).ok_or(FieldError::InvalidDate)?;
    let expected = parse_input_date(release).and_then(one_year_after);
    if expected == Some(revision) {
        Ok(())
    } else {
        Err(FieldError::RevisionMismatch)
    }
}
