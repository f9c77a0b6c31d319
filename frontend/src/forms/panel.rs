use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{Draft, FormField, ValidationError};
use crate::components::ui::{Button, ButtonVariant};

#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase<D> {
    Editing { error: Option<ValidationError> },
    /// Terminal for the lifetime of the mount.
    Submitted(D),
}

/// Draft plus display phase of one mounted form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPanel<D: Draft> {
    draft: D,
    phase: FormPhase<D>,
}

impl<D: Draft> Default for FormPanel<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> FormPanel<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            phase: FormPhase::Editing { error: None },
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> &FormPhase<D> {
        &self.phase
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match &self.phase {
            FormPhase::Editing { error } => error.as_ref(),
            FormPhase::Submitted(_) => None,
        }
    }

    pub fn submitted(&self) -> Option<&D> {
        match &self.phase {
            FormPhase::Submitted(draft) => Some(draft),
            FormPhase::Editing { .. } => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted().is_some()
    }

    /// Replaces one field with the input's current value. Ignored once submitted.
    pub fn edit(&mut self, field: D::Field, value: String) {
        if !self.is_submitted() {
            self.draft.set(field, value);
        }
    }

    /// Validates the draft. On success the panel becomes terminal and the
    /// accepted draft is returned; on failure the error replaces any previous one
    /// and the panel stays editable.
    pub fn submit(&mut self) -> Result<D, ValidationError> {
        if self.is_submitted() {
            return Err(ValidationError::AlreadySubmitted);
        }
        match self.draft.validate() {
            Ok(()) => {
                self.phase = FormPhase::Submitted(self.draft.clone());
                Ok(self.draft.clone())
            }
            Err(e) => {
                self.phase = FormPhase::Editing {
                    error: Some(e.clone()),
                };
                Err(e)
            }
        }
    }
}

pub enum FormAction<F> {
    Edit(F, String),
    Submit,
}

impl<D: Draft> Reducible for FormPanel<D> {
    type Action = FormAction<D::Field>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                if next.is_submitted() {
                    return self;
                }
                next.edit(field, value);
            }
            FormAction::Submit => match next.submit() {
                Ok(_) => log::info!("Form accepted"),
                Err(ValidationError::AlreadySubmitted) => return self,
                Err(e) => log::debug!("Form rejected: {}", e),
            },
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct FormPanelProps<D: Draft> {
    #[prop_or_default]
    pub on_submit: Option<Callback<D>>,
    pub submit_label: AttrValue,
    pub submitted_title: AttrValue,
    pub submitted_note: AttrValue,
}

#[function_component(FormPanelView)]
pub fn form_panel_view<D>(props: &FormPanelProps<D>) -> Html
where
    D: Draft,
{
    let panel = use_reducer(FormPanel::<D>::default);

    // Fires once: `submitted` only ever goes from None to Some.
    {
        let on_submit = props.on_submit.clone();
        use_effect_with_deps(
            move |submitted: &Option<D>| {
                if let (Some(draft), Some(on_submit)) = (submitted.clone(), on_submit) {
                    on_submit.emit(draft);
                }
                || ()
            },
            panel.submitted().cloned(),
        );
    }

    if panel.is_submitted() {
        return html! {
            <div class="text-center space-y-2">
                <div class="text-xl font-semibold">{props.submitted_title.clone()}</div>
                <div class="text-gray-300">{props.submitted_note.clone()}</div>
            </div>
        };
    }

    let onsubmit = {
        let panel = panel.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            panel.dispatch(FormAction::Submit);
        })
    };

    let inputs = D::FIELDS
        .iter()
        .copied()
        .map(|field| {
            let oninput = {
                let panel = panel.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    panel.dispatch(FormAction::Edit(field, input.value()));
                })
            };
            let caption = if field.is_required() {
                format!("{}*", field.label())
            } else {
                field.label().to_string()
            };
            html! {
                <label class="block" key={field.name()}>
                    <span class="block mb-1 text-sm text-gray-300">{caption}</span>
                    <input
                        type={field.input_type()}
                        name={field.name()}
                        value={panel.draft().get(field).to_string()}
                        oninput={oninput}
                        class="w-full bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 text-white outline-none focus:ring-2 focus:ring-cyan-500"
                        placeholder={field.placeholder()}
                    />
                </label>
            }
        })
        .collect::<Html>();

    let error = panel.error().map(ToString::to_string);

    html! {
        <form onsubmit={onsubmit} class="space-y-4">
            if let Some(error) = error {
                <div class="text-red-400 text-sm" role="alert">{error}</div>
            }
            <div class="grid gap-4">
                {inputs}
            </div>
            <div class="pt-2">
                <Button
                    button_type="submit"
                    variant={ButtonVariant::Primary}
                    class={classes!("custom-button-bg", "w-full")}
                >
                    {props.submit_label.clone()}
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::beta_request::{BetaField, BetaRequestDraft};
    use crate::forms::login::{LoginDraft, LoginField};
    use pretty_assertions::assert_eq;

    fn filled_beta() -> FormPanel<BetaRequestDraft> {
        let mut panel = FormPanel::<BetaRequestDraft>::default();
        panel.edit(BetaField::Email, "a@b.com".into());
        panel.edit(BetaField::Name, "Ivan".into());
        panel.edit(BetaField::Company, "Acme".into());
        panel
    }

    #[test]
    fn starts_editing_without_error() {
        let panel = FormPanel::<LoginDraft>::default();
        assert_eq!(panel.phase(), &FormPhase::Editing { error: None });
        assert_eq!(panel.draft(), &LoginDraft::default());
    }

    #[test]
    fn failed_submit_keeps_panel_editable() {
        let mut panel = FormPanel::<LoginDraft>::default();
        panel.edit(LoginField::Email, "x@y.com".into());

        let err = panel.submit().unwrap_err();

        assert!(matches!(err, ValidationError::MissingRequired { .. }));
        assert_eq!(panel.error(), Some(&err));
        assert!(!panel.is_submitted());

        panel.edit(LoginField::Password, "p".into());
        assert_eq!(panel.draft().password, "p");
    }

    #[test]
    fn success_clears_previous_error() {
        let mut panel = FormPanel::<BetaRequestDraft>::default();
        assert!(panel.submit().is_err());
        assert!(panel.error().is_some());

        panel.edit(BetaField::Email, "a@b.com".into());
        panel.edit(BetaField::Name, "Ivan".into());
        panel.edit(BetaField::Company, "Acme".into());
        assert!(panel.submit().is_ok());
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn submitted_is_terminal() {
        let mut panel = filled_beta();
        let accepted = panel.submit().unwrap();

        panel.edit(BetaField::Email, "other@b.com".into());
        assert_eq!(panel.draft().email, "a@b.com");
        assert_eq!(panel.submit(), Err(ValidationError::AlreadySubmitted));
        assert_eq!(panel.submitted(), Some(&accepted));
    }

    #[test]
    fn reducer_applies_edits_and_submit() {
        let panel = Rc::new(FormPanel::<BetaRequestDraft>::default());
        let panel = panel.reduce(FormAction::Edit(BetaField::Email, "a@b.com".into()));
        let panel = panel.reduce(FormAction::Submit);
        assert!(panel.error().is_some());

        let panel = panel.reduce(FormAction::Edit(BetaField::Name, "Ivan".into()));
        let panel = panel.reduce(FormAction::Edit(BetaField::Company, "Acme".into()));
        let panel = panel.reduce(FormAction::Submit);
        assert!(panel.is_submitted());
    }

    #[test]
    fn reducer_ignores_actions_after_submission() {
        let submitted = Rc::new(filled_beta()).reduce(FormAction::Submit);
        assert!(submitted.is_submitted());

        let after_edit = submitted
            .clone()
            .reduce(FormAction::Edit(BetaField::Name, "Petr".into()));
        assert!(Rc::ptr_eq(&submitted, &after_edit));

        let after_submit = submitted.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&submitted, &after_submit));
    }
}
