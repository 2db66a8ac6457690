//! Turn inbound payloads into validated drafts. Only type coercion is checked: a title must be
//! present, `due_date` must parse as a timestamp and `completed` as a boolean.

use crate::error::AppError;
use crate::models::{TodoDraft, TodoForm, TodoPayload};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a JSON body. `completed` defaults to false; omitted optionals stay null.
    pub fn validate(payload: TodoPayload) -> Result<TodoDraft, AppError> {
        let title = payload
            .title
            .ok_or_else(|| AppError::Validation("title is required".into()))?;
        let due_date = payload.due_date.as_deref().map(parse_due_date).transpose()?;
        Ok(TodoDraft {
            title,
            category: payload.category,
            description: payload.description,
            due_date,
            completed: payload.completed.unwrap_or(false),
        })
    }

    /// Validate a submitted form. Blank optional inputs become null and an absent checkbox is false.
    pub fn validate_form(form: TodoForm) -> Result<TodoDraft, AppError> {
        let title = form
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("title is required".into()))?;
        let due_date = blank_to_none(form.due_date)
            .as_deref()
            .map(parse_due_date)
            .transpose()?;
        let completed = blank_to_none(form.completed)
            .as_deref()
            .map(parse_form_bool)
            .transpose()?
            .unwrap_or(false);
        Ok(TodoDraft {
            title,
            category: blank_to_none(form.category),
            description: blank_to_none(form.description),
            due_date,
            completed,
        })
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a due date. Offset-bearing timestamps are normalized to UTC; a bare date means midnight.
pub fn parse_due_date(s: &str) -> Result<NaiveDateTime, AppError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::Validation(format!("due_date is not a valid datetime: '{}'", s)))
}

/// Checkbox and form boolean values.
pub fn parse_form_bool(s: &str) -> Result<bool, AppError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!("completed is not a valid boolean: '{}'", other))),
    }
}
