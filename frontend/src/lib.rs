pub mod components;
pub mod config;
pub mod forms;
pub mod pages;

use yew::prelude::*;

use crate::pages::landing::Landing;

/// The whole application: a single landing page, no router.
#[function_component]
pub fn App() -> Html {
    html! { <Landing /> }
}
