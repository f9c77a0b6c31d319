use serde::{Deserialize, Serialize};
use yew::prelude::*;

use super::{Draft, FormField, FormPanelView};

/// Payload of a beta-access request. `telegram` is optional and handed off as
/// typed, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetaRequestDraft {
    pub email: String,
    pub telegram: String,
    pub name: String,
    pub company: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetaField {
    Email,
    Telegram,
    Name,
    Company,
}

impl FormField for BetaField {
    fn name(self) -> &'static str {
        match self {
            BetaField::Email => "email",
            BetaField::Telegram => "telegram",
            BetaField::Name => "name",
            BetaField::Company => "company",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BetaField::Email => "Почта",
            BetaField::Telegram => "Тг (username)",
            BetaField::Name => "Имя",
            BetaField::Company => "Компания",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            BetaField::Email => "name@company.com",
            BetaField::Telegram => "@username",
            BetaField::Name => "Иван Иванов",
            BetaField::Company => "ООО Рога и Копыта",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            BetaField::Email => "email",
            _ => "text",
        }
    }

    fn is_required(self) -> bool {
        !matches!(self, BetaField::Telegram)
    }
}

impl Draft for BetaRequestDraft {
    type Field = BetaField;

    const FIELDS: &'static [BetaField] = &[
        BetaField::Email,
        BetaField::Telegram,
        BetaField::Name,
        BetaField::Company,
    ];
    const MISSING_MESSAGE: &'static str = "Почта, Имя и Компания обязательны";

    fn get(&self, field: BetaField) -> &str {
        match field {
            BetaField::Email => &self.email,
            BetaField::Telegram => &self.telegram,
            BetaField::Name => &self.name,
            BetaField::Company => &self.company,
        }
    }

    fn set(&mut self, field: BetaField, value: String) {
        match field {
            BetaField::Email => self.email = value,
            BetaField::Telegram => self.telegram = value,
            BetaField::Name => self.name = value,
            BetaField::Company => self.company = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BetaRequestFormProps {
    #[prop_or_default]
    pub on_submit: Option<Callback<BetaRequestDraft>>,
}

#[function_component]
pub fn BetaRequestForm(props: &BetaRequestFormProps) -> Html {
    html! {
        <FormPanelView<BetaRequestDraft>
            on_submit={props.on_submit.clone()}
            submit_label="Оставить заявку"
            submitted_title="Заявка отправлена"
            submitted_note="Мы свяжемся с вами в ближайшее время."
        />
    }
}
