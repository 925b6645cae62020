//! Contact form component with inline validation.

use leptos::prelude::*;
use placid_core::{ContactSubmission, FeedbackState, Field};
use serde::{Deserialize, Serialize};

/// A choice in the subject dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectOption {
    /// Submitted value.
    pub value: String,

    /// Display label.
    pub label: String,
}

impl SubjectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Subjects offered when none are given.
pub fn default_subjects() -> Vec<SubjectOption> {
    vec![
        SubjectOption::new("general", "General enquiry"),
        SubjectOption::new("support", "Support"),
        SubjectOption::new("partnership", "Partnership"),
    ]
}

/// Contact form validated entirely in the browser.
///
/// Submitting never sends anything: invalid fields are marked, and a valid
/// form shows a confirmation and clears itself.
#[component]
pub fn ContactForm(
    /// Subject choices after the empty placeholder option.
    #[prop(default = default_subjects())]
    subjects: Vec<SubjectOption>,
) -> impl IntoView {
    let form = RwSignal::new(ContactSubmission::default());
    let invalid = RwSignal::new(Vec::<Field>::new());
    let feedback = RwSignal::new(None::<FeedbackState>);

    let is_invalid = move |field: Field| invalid.with(|fields| fields.contains(&field));
    let aria_invalid = move |field: Field| is_invalid(field).then_some("true");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.with_untracked(ContactSubmission::validate);
        invalid.set(outcome.invalid_fields().to_vec());
        feedback.set(Some(outcome.feedback()));
        if outcome.is_accepted() {
            form.set(ContactSubmission::default());
        } else {
            log::debug!("contact form rejected: {:?}", outcome.invalid_fields());
        }
    };

    view! {
      <form class="contact-form" data-contact-form="" on:submit=on_submit>
        <label class="form-field">
          <span>"Full name"</span>
          <input
            id=Field::FullName.id()
            name="full_name"
            type="text"
            autocomplete="name"
            class:error=move || is_invalid(Field::FullName)
            aria-invalid=move || aria_invalid(Field::FullName)
            prop:value=move || form.with(|f| f.full_name.clone())
            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
          />
        </label>
        <label class="form-field">
          <span>"Email address"</span>
          <input
            id=Field::Email.id()
            name="email"
            type="email"
            autocomplete="email"
            class:error=move || is_invalid(Field::Email)
            aria-invalid=move || aria_invalid(Field::Email)
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
          />
        </label>
        <label class="form-field">
          <span>"Subject"</span>
          <select
            id=Field::Subject.id()
            name="subject"
            class:error=move || is_invalid(Field::Subject)
            aria-invalid=move || aria_invalid(Field::Subject)
            prop:value=move || form.with(|f| f.subject.clone())
            on:change=move |ev| form.update(|f| f.subject = event_target_value(&ev))
          >
            <option value="">"Choose a subject"</option>
            {subjects
              .into_iter()
              .map(|subject| view! { <option value=subject.value>{subject.label}</option> })
              .collect_view()}
          </select>
        </label>
        <label class="form-field">
          <span>"Message"</span>
          <textarea
            id=Field::Message.id()
            name="message"
            rows="5"
            class:error=move || is_invalid(Field::Message)
            aria-invalid=move || aria_invalid(Field::Message)
            prop:value=move || form.with(|f| f.message.clone())
            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
          ></textarea>
        </label>
        <button type="submit" class="button">
          "Send message"
        </button>
        <p
          class="form-feedback"
          aria-live="polite"
          class:is-error=move || feedback.get() == Some(FeedbackState::Error)
          class:is-success=move || feedback.get() == Some(FeedbackState::Success)
        >
          {move || feedback.get().map(FeedbackState::message).unwrap_or_default()}
        </p>
      </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subjects_have_values() {
        let subjects = default_subjects();
        assert_eq!(subjects.len(), 3);
        assert!(subjects.iter().all(|s| Field::Subject.is_valid(&s.value)));
    }

    #[test]
    fn test_placeholder_subject_is_invalid() {
        assert!(!Field::Subject.is_valid(""));
    }

    #[test]
    fn test_subject_option_serialization() {
        let option = SubjectOption::new("support", "Support");
        let json = serde_json::to_string(&option).unwrap();
        assert!(json.contains("\"value\":\"support\""));
    }
}
