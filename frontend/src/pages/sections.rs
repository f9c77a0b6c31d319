use web_sys::js_sys;
use yew::prelude::*;

use crate::components::modal::{use_modal, Modal};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, Container, Logo, LogoSize, TextBlock, WORDMARK,
};

/// Title and body of one card in a three-up grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const AUDIENCE: &[CardItem] = &[
    CardItem {
        title: "HR и рекрутеры",
        description: "Быстрая проверка резюме на накрутки и аномалии.",
    },
    CardItem {
        title: "Тимлиды",
        description: "Оценка релевантности кандидата задачам команды.",
    },
    CardItem {
        title: "Основатели/CEO",
        description: "Снижение рисков найма и экономия бюджета.",
    },
];

pub const STEPS: &[CardItem] = &[
    CardItem {
        title: "1. Загрузка резюме",
        description: "Добавьте PDF/Docx или ссылку на профиль.",
    },
    CardItem {
        title: "2. Анализ",
        description: "Модели выявляют накрутки, пробелы и несостыковки.",
    },
    CardItem {
        title: "3. Отчет",
        description: "Получите оценку риска и рекомендации по вопросам.",
    },
];

/// Turns an optional "open" request into a button click handler.
fn on_click(request: &Option<Callback<()>>) -> Option<Callback<MouseEvent>> {
    request.clone().map(|cb| cb.reform(|_: MouseEvent| ()))
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_open_beta: Option<Callback<()>>,
    #[prop_or_default]
    pub on_open_login: Option<Callback<()>>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    html! {
        <header class="w-full border-b border-gray-800/60">
            <Container>
                <div class="flex items-center justify-between py-4">
                    <Logo size={LogoSize::Md} />
                    <Logo size={LogoSize::Xl} show_text={false} class={classes!("mx-auto")} />
                    <div class="flex items-center space-x-3">
                        <Button
                            onclick={on_click(&props.on_open_login)}
                            variant={ButtonVariant::Ghost}
                            size={ButtonSize::Lg}
                        >
                            {"Войти"}
                        </Button>
                        <Button
                            onclick={on_click(&props.on_open_beta)}
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::Lg}
                            class={classes!("custom-button-bg")}
                        >
                            {"Оставить Заявку"}
                        </Button>
                    </div>
                </div>
            </Container>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub on_open_beta: Option<Callback<()>>,
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    html! {
        <section class="relative overflow-hidden py-16 md:py-24">
            <div class="absolute inset-0 -z-10 bg-[#0e1a30]"></div>
            <Container>
                <div class="max-w-3xl mx-0">
                    <TextBlock
                        title="Найдите лучших сотрудников без накруток"
                        content="Загрузите резюме для анализа накруток и рекомендаций. Попробуйте демо: выявляем накрутки, подсвечиваем риски, даём вопросы для верификации."
                    />
                    <div class="mt-8">
                        <Button
                            onclick={on_click(&props.on_open_beta)}
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::Lg}
                            class={classes!("custom-button-bg", "text-lg", "px-8", "py-4")}
                        >
                            {"Получить Демо"}
                        </Button>
                    </div>
                </div>
            </Container>
        </section>
    }
}

fn card_grid(heading: &'static str, items: &'static [CardItem]) -> Html {
    html! {
        <section class="py-16 text-white">
            <Container>
                <h2 class="text-3xl md:text-4xl font-bold mb-8">{heading}</h2>
                <div class="grid gap-6 md:grid-cols-3">
                    { for items.iter().map(|item| html! {
                        <Card key={item.title} class={classes!("h-full")}>
                            <h3 class="text-xl font-semibold mb-2">{item.title}</h3>
                            <p class="text-gray-300">{item.description}</p>
                        </Card>
                    }) }
                </div>
            </Container>
        </section>
    }
}

#[function_component]
pub fn Benefits() -> Html {
    card_grid("Кому может быть полезно", AUDIENCE)
}

#[function_component]
pub fn HowItWorks() -> Html {
    card_grid("Как это работает", STEPS)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Footer with the confidentiality policy, which opens in its own modal.
#[function_component]
pub fn Confidentiality() -> Html {
    let policy = use_modal("policy");
    let year = use_state(current_year);

    html! {
        <footer class="py-10 text-white border-t border-gray-800/60 bg-[#0e1a30]">
            <Container>
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-6">
                    <div class="text-2xl font-extrabold tracking-wide">{WORDMARK}</div>
                    <nav class="flex flex-col sm:flex-row gap-4 text-gray-300">
                        <button
                            type="button"
                            onclick={policy.open().reform(|_: MouseEvent| ())}
                            class="text-left hover:text-white"
                        >
                            {"Политика конфиденциальности"}
                        </button>
                    </nav>
                    <div class="text-sm text-gray-400">{format!("© {} Все права защищены", *year)}</div>
                </div>
            </Container>

            <Modal is_open={policy.is_open()} on_close={policy.close()} title="Политика конфиденциальности">
                <div class="space-y-4 text-gray-300">
                    <p>
                        {"Мы обрабатываем документы локально и безопасно. Данные не передаются третьим лицам и не используются для обучения моделей без вашего согласия."}
                    </p>
                    <p>
                        {"По запросу мы удалим все загруженные материалы и связанные метаданные. Для связи используйте форму обратной связи или напишите на support@wolfeye.ai."}
                    </p>
                    <Card class={classes!("bg-gray-800/60")}>
                        <ul class="list-disc pl-5 text-sm">
                            <li>{"Храним только необходимые технические метаданные"}</li>
                            <li>{"Шифруем данные при передаче и хранении"}</li>
                            <li>{"Доступ ограничен авторизованным персоналом"}</li>
                        </ul>
                    </Card>
                </div>
            </Modal>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_have_three_unique_cards() {
        for items in [AUDIENCE, STEPS] {
            assert_eq!(items.len(), 3);
            let mut titles: Vec<_> = items.iter().map(|item| item.title).collect();
            titles.sort();
            titles.dedup();
            assert_eq!(titles.len(), 3, "card titles double as keys");
        }
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert!(step.title.starts_with(&format!("{}.", i + 1)));
        }
    }
}
