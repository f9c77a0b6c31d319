#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::Element;
use wolfs_eye::forms::beta_request::{BetaRequestDraft, BetaRequestForm};
use wolfs_eye::forms::login::{LoginDraft, LoginForm};
use yew::prelude::*;

use common::{click, find, mount_root, settle, type_into};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct BetaHostProps {
    received: Rc<RefCell<Vec<BetaRequestDraft>>>,
}

#[function_component]
fn BetaHost(props: &BetaHostProps) -> Html {
    let received = props.received.clone();
    let on_submit = Callback::from(move |draft: BetaRequestDraft| received.borrow_mut().push(draft));
    html! { <BetaRequestForm on_submit={on_submit} /> }
}

#[derive(Properties, PartialEq)]
struct LoginHostProps {
    received: Rc<RefCell<Vec<LoginDraft>>>,
}

#[function_component]
fn LoginHost(props: &LoginHostProps) -> Html {
    let received = props.received.clone();
    let on_submit = Callback::from(move |draft: LoginDraft| received.borrow_mut().push(draft));
    html! { <LoginForm on_submit={on_submit} /> }
}

fn alert_text(root: &Element) -> Option<String> {
    find(root, "[role='alert']").and_then(|alert| alert.text_content())
}

async fn submit(root: &Element) {
    click(&find(root, "button[type='submit']").unwrap());
    settle().await;
}

#[wasm_bindgen_test]
async fn beta_form_rejects_then_accepts() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let root = mount_root();
    let app = yew::Renderer::<BetaHost>::with_root_and_props(
        root.clone(),
        BetaHostProps {
            received: received.clone(),
        },
    )
    .render();
    settle().await;

    type_into(&root, "name", "Ivan");
    type_into(&root, "company", "Acme");
    settle().await;
    submit(&root).await;

    assert_eq!(alert_text(&root).as_deref(), Some("Почта, Имя и Компания обязательны"));
    assert!(received.borrow().is_empty());
    assert!(find(&root, "form").is_some());

    type_into(&root, "email", "a@b.com");
    settle().await;
    submit(&root).await;

    assert_eq!(
        *received.borrow(),
        vec![BetaRequestDraft {
            email: "a@b.com".into(),
            telegram: String::new(),
            name: "Ivan".into(),
            company: "Acme".into(),
        }]
    );
    assert!(find(&root, "form").is_none());
    assert!(root.text_content().unwrap_or_default().contains("Заявка отправлена"));

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn login_form_requires_code() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let root = mount_root();
    let app = yew::Renderer::<LoginHost>::with_root_and_props(
        root.clone(),
        LoginHostProps {
            received: received.clone(),
        },
    )
    .render();
    settle().await;

    type_into(&root, "email", "x@y.com");
    type_into(&root, "password", "p");
    settle().await;
    submit(&root).await;

    assert_eq!(alert_text(&root).as_deref(), Some("Почта, Пароль и Код обязательны"));
    assert!(received.borrow().is_empty());

    type_into(&root, "code", "123456");
    settle().await;
    submit(&root).await;

    assert_eq!(received.borrow().len(), 1);
    assert_eq!(received.borrow()[0].code, "123456");

    app.destroy();
    root.remove();
}
