pub mod beta_request;
pub mod login;
mod panel;

pub use panel::{FormAction, FormPanel, FormPanelProps, FormPanelView, FormPhase};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are the empty string. `message` is the
    /// form-level text shown above the inputs.
    #[error("{message}")]
    MissingRequired {
        message: &'static str,
        missing: Vec<&'static str>,
    },
    #[error("Form has already been submitted")]
    AlreadySubmitted,
}

/// A single input of a form draft.
pub trait FormField: Copy + PartialEq + 'static {
    /// `name` attribute of the rendered input.
    fn name(self) -> &'static str;
    fn label(self) -> &'static str;
    fn placeholder(self) -> &'static str;
    fn input_type(self) -> &'static str {
        "text"
    }
    fn is_required(self) -> bool {
        true
    }
}

/// Field set a form holds while the user is typing.
pub trait Draft: Clone + Default + PartialEq + 'static {
    type Field: FormField;

    /// Every field, in render order.
    const FIELDS: &'static [Self::Field];
    /// Shown when any required field is empty.
    const MISSING_MESSAGE: &'static str;

    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);

    /// Required-field check. Only the empty string counts as missing;
    /// whitespace is accepted as typed.
    fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = Self::FIELDS
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .map(FormField::name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired {
                message: Self::MISSING_MESSAGE,
                missing,
            })
        }
    }
}
