use dioxus::logger::tracing::{error, info};
use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        pages::{CalculatorPage, ForumTestPage, GamesPage, NotFoundPage, TariffQuizPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/games")]
    Games {},
    #[route("/games/tariff-quiz")]
    TariffQuiz {},
    #[route("/forum/test")]
    ForumTest {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                info!("Restored saved settings");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        error!("Failed to persist user state: {err}");
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Games() -> Element {
    rsx! { Shell { GamesPage {} } }
}

#[component]
pub fn TariffQuiz() -> Element {
    rsx! { Shell { TariffQuizPage {} } }
}

#[component]
pub fn ForumTest() -> Element {
    rsx! { Shell { ForumTestPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
