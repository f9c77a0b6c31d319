use yew::prelude::*;

use crate::components::modal::{use_modal, Modal};
use crate::forms::beta_request::{BetaRequestDraft, BetaRequestForm};
use crate::forms::login::{LoginDraft, LoginForm};
use crate::pages::sections::{Benefits, Confidentiality, Header, Hero, HowItWorks};

const CUSTOM_CSS: &str = r#"
    .custom-button-bg {
        background: linear-gradient(90deg, #06b6d4, #2563eb);
    }
    .custom-button-bg:hover {
        background: linear-gradient(90deg, #0891b2, #1d4ed8);
    }
"#;

/// Header and hero, plus the beta and login dialogs their buttons open.
/// The two dialogs keep separate state.
#[function_component]
pub fn HomeHero() -> Html {
    let beta = use_modal("beta");
    let login = use_modal("login");

    let on_beta_submit = {
        let close = beta.close();
        Callback::from(move |draft: BetaRequestDraft| {
            match serde_json::to_string(&draft) {
                Ok(payload) => log::debug!("Beta request ready for hand-off: {}", payload),
                Err(e) => log::warn!("Failed to encode beta request: {}", e),
            }
            close.emit(());
        })
    };

    let on_login_submit = {
        let close = login.close();
        Callback::from(move |_: LoginDraft| {
            log::info!("Login form accepted");
            close.emit(());
        })
    };

    html! {
        <div class="min-h-screen text-white">
            <Header on_open_beta={beta.open()} on_open_login={login.open()} />
            <Hero on_open_beta={beta.open()} />

            <Modal is_open={beta.is_open()} on_close={beta.close()} title="Оставить заявку для бета-тестирования">
                <BetaRequestForm on_submit={on_beta_submit} />
            </Modal>

            <Modal is_open={login.is_open()} on_close={login.close()} title="Войти">
                <LoginForm on_submit={on_login_submit} />
            </Modal>
        </div>
    }
}

#[function_component]
pub fn Landing() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{CUSTOM_CSS}</style>
            <HomeHero />
            <Benefits />
            <HowItWorks />
            <Confidentiality />
        </div>
    }
}
