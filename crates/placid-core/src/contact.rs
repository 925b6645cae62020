//! Contact form validation.
//!
//! Validation is local only: the form never submits anywhere. Every field is
//! checked on each attempt and all failures are reported together.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Class marking an invalid field.
pub const INVALID_CLASS: &str = "error";

/// Accessibility attribute set on invalid fields.
pub const ARIA_INVALID_ATTR: &str = "aria-invalid";

/// Message shown when any field fails.
pub const ERROR_MESSAGE: &str =
    "Please complete all required fields and ensure your email address is valid.";

/// Message shown when the submission is accepted.
pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out. Your message has been received and our team will respond within 48 hours.";

// Deliberately permissive: local@domain.tld with no whitespace or extra `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Check an email address against the site's pattern.
pub fn validate_email(value: &str) -> bool {
    let email = value.trim();
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::FullName, Field::Email, Field::Subject, Field::Message];

    /// Element id of the field within the contact form.
    pub fn id(self) -> &'static str {
        match self {
            Self::FullName => "full-name",
            Self::Email => "email-address",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// `#id` selector for the field.
    pub fn selector(self) -> String {
        format!("#{}", self.id())
    }

    /// Whether `value` is acceptable for this field.
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Self::FullName | Self::Message => !value.trim().is_empty(),
            Self::Email => validate_email(value),
            Self::Subject => !value.is_empty(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Values of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Fields that fail validation, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !field.is_valid(self.value(*field)))
            .collect()
    }

    pub fn validate(&self) -> SubmissionOutcome {
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected(invalid)
        }
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(Vec<Field>),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Fields to mark invalid.
    pub fn invalid_fields(&self) -> &[Field] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(fields) => fields,
        }
    }

    pub fn feedback(&self) -> FeedbackState {
        match self {
            Self::Accepted => FeedbackState::Success,
            Self::Rejected(_) => FeedbackState::Error,
        }
    }
}

/// State of the form feedback region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Success,
    Error,
}

impl FeedbackState {
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Error => ERROR_MESSAGE,
        }
    }

    /// Class applied to the feedback region.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "is-success",
            Self::Error => "is-error",
        }
    }

    /// Class removed from the feedback region.
    pub fn opposite_class(self) -> &'static str {
        match self {
            Self::Success => Self::Error.class(),
            Self::Error => Self::Success.class(),
        }
    }
}
