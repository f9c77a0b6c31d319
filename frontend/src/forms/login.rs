use serde::{Deserialize, Serialize};
use yew::prelude::*;

use super::{Draft, FormField, FormPanelView};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Code,
}

impl FormField for LoginField {
    fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
            LoginField::Code => "code",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LoginField::Email => "Почта",
            LoginField::Password => "Пароль",
            LoginField::Code => "Код",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            LoginField::Email => "name@company.com",
            LoginField::Password => "••••••••",
            LoginField::Code => "123456",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
            LoginField::Code => "text",
        }
    }
}

impl Draft for LoginDraft {
    type Field = LoginField;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password, LoginField::Code];
    const MISSING_MESSAGE: &'static str = "Почта, Пароль и Код обязательны";

    fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
            LoginField::Code => &self.code,
        }
    }

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
            LoginField::Code => self.code = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub on_submit: Option<Callback<LoginDraft>>,
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    html! {
        <FormPanelView<LoginDraft>
            on_submit={props.on_submit.clone()}
            submit_label="Войти"
            submitted_title="Данные приняты"
            submitted_note="Вход станет доступен после запуска беты."
        />
    }
}
