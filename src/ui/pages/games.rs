use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        filter_games, AppState, DailyTask, GameCategory, GameInfo, IconId, PlayerStats, Theme,
        DAILY_TASKS, TARIFF_QUIZ_ID,
    },
    ui::{components::GameStats, icons::Icon, theme},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum HubTab {
    Games,
    Daily,
}

#[component]
pub fn GamesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let mut tab = use_signal(|| HubTab::Games);
    let mut category = use_signal(|| None::<GameCategory>);

    let player_stats = PlayerStats::default().to_stats();
    let games = filter_games(category());
    let task_stats = DAILY_TASKS.iter().map(DailyTask::to_stat).collect::<Vec<_>>();
    let tasks_done = DAILY_TASKS.iter().filter(|task| task.completed).count();

    rsx! {
        div { class: "space-y-8",
            header { class: "text-center",
                div { class: "mb-4 flex items-center justify-center gap-3",
                    span { class: "rounded-full bg-indigo-500/10 p-3 text-3xl",
                        Icon { id: IconId::Gamepad }
                    }
                    h1 { class: "text-4xl font-bold {theme::text_strong(theme)}", "Games & Challenges" }
                }
                p { class: "mx-auto max-w-2xl text-lg {theme::text_muted(theme)}",
                    "Test your knowledge, build trade routes, and compete with others in our interactive tariff and trade games."
                }
            }

            GameStats { stats: player_stats, theme }

            div { class: "grid grid-cols-2 gap-2",
                button {
                    class: "{theme::btn_small(theme, tab() == HubTab::Games)}",
                    onclick: move |_| tab.set(HubTab::Games),
                    "Games"
                }
                button {
                    class: "{theme::btn_small(theme, tab() == HubTab::Daily)}",
                    onclick: move |_| tab.set(HubTab::Daily),
                    "Daily Tasks ({tasks_done}/{DAILY_TASKS.len()})"
                }
            }

            match tab() {
                HubTab::Games => rsx! {
                    div { class: "flex flex-wrap gap-2",
                        button {
                            class: "{theme::btn_small(theme, category().is_none())}",
                            onclick: move |_| category.set(None),
                            "All Games"
                        }
                        for option in GameCategory::ALL {
                            button {
                                key: "{option.label()}",
                                class: "{theme::btn_small(theme, category() == Some(option))}",
                                onclick: move |_| category.set(Some(option)),
                                "{option.label()}"
                            }
                        }
                    }
                    div { class: "grid gap-6 md:grid-cols-2",
                        for game in games {
                            GameCard { key: "{game.id}", game: game.clone(), theme }
                        }
                    }
                },
                HubTab::Daily => rsx! {
                    section {
                        h2 { class: "mb-3 flex items-center gap-2 text-sm font-semibold uppercase tracking-wide {theme::text_muted(theme)}",
                            Icon { id: IconId::Calendar }
                            "Today's Tasks"
                        }
                        GameStats { stats: task_stats, theme }
                    }
                },
            }
        }
    }
}

#[component]
fn GameCard(game: GameInfo, theme: Theme) -> Element {
    let route = game_route(game.id);

    rsx! {
        article { class: "{theme::card(theme)} flex flex-col gap-4 p-6",
            div { class: "flex items-start justify-between gap-3",
                div { class: "flex items-center gap-3",
                    span { class: "text-3xl {theme::text_primary(theme)}",
                        Icon { id: game.icon }
                    }
                    div {
                        h3 { class: "text-lg font-semibold {theme::text_strong(theme)}", "{game.title}" }
                        p { class: "text-sm {theme::text_muted(theme)}", "{game.description}" }
                    }
                }
                div { class: "flex shrink-0 gap-1",
                    if game.is_new {
                        span { class: "rounded-full bg-emerald-500 px-2 py-0.5 text-xs font-semibold text-white", "New" }
                    }
                    if game.is_daily {
                        span { class: "rounded-full bg-orange-500 px-2 py-0.5 text-xs font-semibold text-white", "Daily" }
                    }
                }
            }
            div { class: "flex flex-wrap items-center gap-2 text-sm",
                span { class: "{theme::difficulty_badge(theme, game.difficulty)}", "{game.difficulty.label()}" }
                span { class: "{theme::pill(theme)}", "{game.category.label()}" }
                span { class: "inline-flex items-center gap-1 {theme::text_muted(theme)}",
                    Icon { id: IconId::Star }
                    "{game.points} pts"
                }
                span { class: "inline-flex items-center gap-1 {theme::text_muted(theme)}",
                    Icon { id: IconId::Clock }
                    "{game.estimated_time}"
                }
            }
            if let Some(target) = route {
                Link { class: "text-center {theme::btn_primary(theme)}", to: target, "Play" }
            } else {
                button {
                    class: "{theme::btn_disabled(theme)}",
                    disabled: true,
                    title: "Coming Soon™",
                    "Coming soon"
                }
            }
        }
    }
}

/// Games with a playable page.
fn game_route(id: &str) -> Option<Route> {
    match id {
        TARIFF_QUIZ_ID => Some(Route::TariffQuiz {}),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::games::GAMES;

    #[test]
    fn only_the_quiz_is_playable() {
        let playable: Vec<_> = GAMES
            .iter()
            .filter(|game| game_route(game.id).is_some())
            .map(|game| game.id)
            .collect();
        assert_eq!(playable, [TARIFF_QUIZ_ID]);
    }
}
