#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit,
};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point appended to `<body>`.
pub fn mount_root() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the Yew scheduler flush renders and effects.
pub async fn settle() {
    TimeoutFuture::new(10).await;
}

pub fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

pub fn find(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).unwrap()
}

pub fn find_in_document(selector: &str) -> Option<Element> {
    document().query_selector(selector).unwrap()
}

pub fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

pub fn type_into(scope: &Element, name: &str, value: &str) {
    let input: HtmlInputElement = find(scope, &format!("input[name='{}']", name))
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

pub fn dialog_open() -> bool {
    find_in_document("[role='dialog']").is_some()
}

/// First `<button>` under `scope` whose trimmed text is exactly `text`.
pub fn button_with_text(scope: &Element, text: &str) -> Option<Element> {
    let buttons = scope.query_selector_all("button").unwrap();
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .find(|button| button.text_content().unwrap_or_default().trim() == text)
}

pub fn dialog_title() -> Option<String> {
    find_in_document("[role='dialog'] h3").and_then(|title| title.text_content())
}
