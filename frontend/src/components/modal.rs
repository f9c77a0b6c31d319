//! Overlay dialog shared by every form and the policy popup.
//!
//! The open/closed flag lives in the component that renders both the trigger and
//! the dialog ([`use_modal`]); [`Modal`] only receives it as a plain `bool` plus a
//! close callback. While open, the dialog renders into a dedicated overlay root
//! outside the page tree and holds a document `keydown` listener that is
//! released as soon as it closes or unmounts.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};
use yew::prelude::*;

pub const OVERLAY_ROOT_ID: &str = "overlay-root";
const DISMISS_KEY: &str = "Escape";

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open;
        self.is_open = true;
        changed
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open;
        self.is_open = false;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            ModalAction::Open => next.open(),
            ModalAction::Close => next.close(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Parent-owned handle to one modal instance. The open/close callbacks are
/// created once per mount, so they compare equal across re-renders.
#[derive(Clone)]
pub struct ModalHandle {
    state: UseReducerHandle<ModalState>,
    open: Callback<()>,
    close: Callback<()>,
}

impl ModalHandle {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn open(&self) -> Callback<()> {
        self.open.clone()
    }

    pub fn close(&self) -> Callback<()> {
        self.close.clone()
    }
}

#[hook]
pub fn use_modal(name: &'static str) -> ModalHandle {
    let state = use_reducer_eq(ModalState::default);

    let open = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |_: (), _: &()| {
                log::debug!("Opening {} modal", name);
                dispatcher.dispatch(ModalAction::Open);
            },
            (),
        )
    };
    let close = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |_: (), _: &()| {
                log::debug!("Closing {} modal", name);
                dispatcher.dispatch(ModalAction::Close);
            },
            (),
        )
    };

    ModalHandle { state, open, close }
}

/// Document-level Escape listener of an open modal. Dropping it deregisters
/// the listener.
pub struct EscapeListener {
    document: Document,
    callback: Closure<dyn Fn(KeyboardEvent)>,
}

impl EscapeListener {
    pub fn attach(on_escape: Callback<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                on_escape.emit(());
            }
        });
        if let Err(e) = document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to register keydown listener: {:?}", e);
            return None;
        }
        Some(Self { document, callback })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove keydown listener: {:?}", e);
        }
    }
}

/// Returns the overlay root, creating it under `<body>` on first use.
fn overlay_root() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    if let Some(root) = document.get_element_by_id(OVERLAY_ROOT_ID) {
        return Some(root);
    }
    let root = document.create_element("div").ok()?;
    root.set_id(OVERLAY_ROOT_ID);
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(classes!("max-w-lg"))]
    pub width: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    {
        use_effect_with_deps(
            move |(is_open, on_close): &(bool, Callback<()>)| {
                let listener = if *is_open {
                    EscapeListener::attach(on_close.clone())
                } else {
                    None
                };
                move || drop(listener)
            },
            (props.is_open, props.on_close.clone()),
        );
    }

    if !props.is_open {
        return html! {};
    }

    let Some(host) = overlay_root() else {
        log::warn!("No document to attach the modal to");
        return html! {};
    };

    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    yew::create_portal(
        html! {
            <div class="fixed inset-0 z-50">
                <div class="absolute inset-0 bg-black/60" data-modal-backdrop="" onclick={dismiss.clone()} />
                <div class="absolute inset-0 flex items-center justify-center p-4 pointer-events-none">
                    <div
                        role="dialog"
                        aria-modal="true"
                        class={classes!("w-full", props.width.clone(), "bg-gray-900", "text-white", "rounded-xl", "border", "border-gray-800", "shadow-2xl", "pointer-events-auto")}
                    >
                        <div class="flex items-center justify-between px-5 py-4 border-b border-gray-800">
                            <h3 class="text-lg font-semibold">{props.title.as_deref().unwrap_or_default().to_string()}</h3>
                            <button type="button" onclick={dismiss} aria-label="Close" class="text-gray-400 hover:text-white">
                                {"✕"}
                            </button>
                        </div>
                        <div class="px-5 py-4">{props.children.clone()}</div>
                    </div>
                </div>
            </div>
        },
        host,
    )
}
