use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, IconId, Theme};
use crate::ui::icons::Icon;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Calculator,
    Games,
    ForumTest,
    Other,
}

impl Section {
    fn of(route: &Route) -> Self {
        match route {
            Route::Calculator {} => Section::Calculator,
            Route::Games {} | Route::TariffQuiz {} => Section::Games,
            Route::ForumTest {} => Section::ForumTest,
            Route::NotFound { .. } => Section::Other,
        }
    }
}

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let theme = state.with(|s| s.theme);
    let section = Section::of(&use_route::<Route>());
    let nav = use_navigator();

    let toggle_label = match theme {
        Theme::Dark => "☀️ Light",
        Theme::Light => "🌙 Dark",
    };

    rsx! {
        div { class: "{theme::page(theme)} flex flex-col",
            header {
                class: "{theme::header_bar(theme)}",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl {theme::text_primary(theme)}",
                            Icon { id: IconId::Globe }
                        }
                        h1 { class: "text-xl font-semibold tracking-tight {theme::text_strong(theme)}", "{APP_NAME}" }
                    }

                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: section == Section::Calculator, onclick: move |_| { nav.push(Route::Calculator {}); }, label: "Calculator", theme }
                        NavButton { active: section == Section::Games, onclick: move |_| { nav.push(Route::Games {}); }, label: "Games", theme }
                        NavButton { active: section == Section::ForumTest, onclick: move |_| { nav.push(Route::ForumTest {}); }, label: "Forum Test", theme }
                    }

                    button {
                        class: "{theme::btn_ghost(theme)}",
                        title: "Switch theme",
                        onclick: move |_| {
                            let next = theme.toggled();
                            state.with_mut(|s| s.theme = next);
                            info!("Theme switched to {}", next.name());
                            persist_user_state(&state);
                        },
                        "{toggle_label}"
                    }
                }
            }
            main { class: "mx-auto w-full max-w-6xl flex-1 px-6 py-10",
                {children}
            }
            footer { class: "{theme::footer_bar(theme)}",
                div { class: "mx-auto flex max-w-6xl justify-between",
                    span { "{APP_NAME}" }
                    span { "{version_label()}" }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, theme: Theme) -> Element {
    rsx! {
        button {
            class: "{theme::nav_link(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
