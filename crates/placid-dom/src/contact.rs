//! Contact form validation wiring.
//!
//! Submission is always suppressed; the handler only marks fields and shows
//! feedback.

use placid_core::{
    ContactSubmission, Field,
    config::ContactHooks,
    contact::{ARIA_INVALID_ATTR, INVALID_CLASS},
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::{
    error::Result,
    page::{claim, control_value, listen, query, report},
};

/// The four contact fields of a form.
#[derive(Debug, Clone)]
pub struct ContactFields {
    full_name: Element,
    email: Element,
    subject: Element,
    message: Element,
}

impl ContactFields {
    /// Look the fields up inside `form`. `None` if any is missing.
    pub fn lookup(form: &Element) -> Option<Self> {
        Some(Self {
            full_name: query(form, &Field::FullName.selector())?,
            email: query(form, &Field::Email.selector())?,
            subject: query(form, &Field::Subject.selector())?,
            message: query(form, &Field::Message.selector())?,
        })
    }

    pub fn element(&self, field: Field) -> &Element {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Current values of all four fields.
    pub fn submission(&self) -> ContactSubmission {
        let value = |field| control_value(self.element(field)).unwrap_or_default();
        ContactSubmission {
            full_name: value(Field::FullName),
            email: value(Field::Email),
            subject: value(Field::Subject),
            message: value(Field::Message),
        }
    }

    /// Remove invalid markers from every field.
    pub fn clear_errors(&self) -> Result<()> {
        for field in Field::ALL {
            let element = self.element(field);
            element.class_list().remove_1(INVALID_CLASS)?;
            element.remove_attribute(ARIA_INVALID_ATTR)?;
        }
        Ok(())
    }

    pub fn mark_invalid(&self, field: Field) -> Result<()> {
        let element = self.element(field);
        element.class_list().add_1(INVALID_CLASS)?;
        element.set_attribute(ARIA_INVALID_ATTR, "true")?;
        Ok(())
    }
}

/// Validate `form` on submit. No-op if the form is missing or already wired.
pub fn setup_contact_form(form: Option<Element>, hooks: &ContactHooks) -> Result<()> {
    let Some(form) = form else {
        log::debug!("contact form not present, skipping");
        return Ok(());
    };
    if !claim(&form, "contact")? {
        log::debug!("contact form already wired");
        return Ok(());
    }

    let feedback = query(&form, &hooks.feedback);
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        report("contact form", handle_submit(&target, feedback.as_ref()));
    })
}

/// Validate the fields of `form` and update markers and feedback.
pub fn handle_submit(form: &Element, feedback: Option<&Element>) -> Result<()> {
    let Some(fields) = ContactFields::lookup(form) else {
        log::warn!("contact form is missing one of its fields, ignoring submission");
        return Ok(());
    };

    fields.clear_errors()?;
    let outcome = fields.submission().validate();
    for field in outcome.invalid_fields() {
        fields.mark_invalid(*field)?;
    }

    let Some(feedback) = feedback else {
        return Ok(());
    };

    let state = outcome.feedback();
    feedback.set_text_content(Some(state.message()));
    let classes = feedback.class_list();
    classes.remove_1(state.opposite_class())?;
    classes.add_1(state.class())?;

    if outcome.is_accepted() {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    } else {
        log::debug!("contact form rejected: {:?}", outcome.invalid_fields());
    }
    Ok(())
}
