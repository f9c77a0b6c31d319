//! Layout primitives. Each one composes `base + variant + size + caller classes`.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-cyan-500 hover:bg-cyan-600 text-white focus:ring-cyan-500",
            ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
            ButtonVariant::Ghost => "text-white hover:bg-gray-800 focus:ring-gray-500",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-2 text-sm",
            ButtonSize::Md => "px-6 py-3 text-base",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none";

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &Classes) -> Classes {
    classes!(BUTTON_BASE, variant.class(), size.class(), extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.button_type.clone()}
            class={button_classes(props.variant, props.size, &props.class)}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "bg-gray-800 border border-gray-700",
            CardVariant::Outlined => "border border-gray-600 bg-transparent",
            CardVariant::Elevated => "bg-gray-800 shadow-xl border border-gray-700",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("rounded-lg", "p-6", props.variant.class(), props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
    Full,
}

impl ContainerSize {
    pub fn class(self) -> &'static str {
        match self {
            ContainerSize::Sm => "max-w-2xl",
            ContainerSize::Md => "max-w-4xl",
            ContainerSize::Lg => "max-w-6xl",
            ContainerSize::Xl => "max-w-7xl",
            ContainerSize::Full => "max-w-full",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub size: ContainerSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("mx-auto", "px-4", "sm:px-6", "lg:px-8", props.size.class(), props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextBlockProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub content: Option<AttrValue>,
}

#[function_component]
pub fn TextBlock(props: &TextBlockProps) -> Html {
    html! {
        <div class="text-white">
            <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-extrabold tracking-tight leading-[1.1]">
                {props.title.clone()}
            </h1>
            if let Some(subtitle) = props.subtitle.clone() {
                <h2 class="mt-3 text-3xl text-white">{subtitle}</h2>
            }
            if let Some(content) = props.content.clone() {
                <p class="mt-6 text-lg text-white">{content}</p>
            }
        </div>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LogoSize {
    pub fn class(self) -> &'static str {
        match self {
            LogoSize::Sm => "w-8 h-8",
            LogoSize::Md => "w-12 h-12",
            LogoSize::Lg => "w-16 h-16",
            LogoSize::Xl => "w-20 h-20",
        }
    }
}

pub const WORDMARK: &str = "ГЛАЗ ВОЛКА";

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or(true)]
    pub show_text: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn Logo(props: &LogoProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "space-x-3", props.class.clone())}>
            <div class={classes!(props.size.class(), "rounded-full", "border-2", "border-cyan-400", "flex", "items-center", "justify-center")}>
                <svg class="w-6 h-6 text-cyan-400" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z" />
                </svg>
            </div>
            if props.show_text {
                <span class="text-xl font-bold text-white">{WORDMARK}</span>
            }
        </div>
    }
}
