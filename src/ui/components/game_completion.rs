use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{format_duration, CompletionStats, IconId, ScoreRating, Theme};
use crate::ui::icons::Icon;
use crate::ui::theme;

#[component]
pub fn GameCompletion(
    title: String,
    description: String,
    stats: CompletionStats,
    on_restart: EventHandler<()>,
    theme: Theme,
) -> Element {
    let rating = ScoreRating::for_score(stats.score);
    let (headline, subline) = if stats.perfect_score {
        ("Perfect Score!".to_string(), "Outstanding performance!".to_string())
    } else {
        (title, description)
    };
    let completion_icon = if stats.perfect_score {
        IconId::Trophy
    } else {
        rating.icon()
    };
    let medal_class = if stats.perfect_score {
        "rounded-full bg-yellow-100 p-4 text-yellow-600"
    } else {
        "rounded-full bg-indigo-500/10 p-4"
    };
    let time_display = format_duration(stats.time_spent);

    rsx! {
        div { class: "mx-auto max-w-2xl",
            div { class: "{theme::card(theme)} p-8 text-center",
                div { class: "mb-4 flex justify-center",
                    div { class: "{medal_class}",
                        Icon { id: completion_icon, class: "text-5xl" }
                    }
                }
                h2 { class: "text-3xl font-semibold {theme::text_strong(theme)}", "{headline}" }
                p { class: "mt-1 text-lg {theme::text_muted(theme)}", "{subline}" }

                div { class: "mt-6 grid grid-cols-2 gap-4",
                    ResultTile { value: format!("{}%", stats.score), caption: "Final Score", accent: rating_class(rating), theme }
                    if let Some(correct) = stats.correct_answers {
                        ResultTile { value: correct.to_string(), caption: "Correct Answers", accent: "text-green-600", theme }
                    }
                    ResultTile { value: time_display, caption: "Time Spent", accent: "text-purple-600", theme }
                    ResultTile { value: stats.points_earned.to_string(), caption: "Points Earned", accent: "text-green-600", theme }
                }

                div { class: "mt-6",
                    span { class: "inline-flex items-center gap-2 rounded-full border px-4 py-2 text-lg {rating_class(rating)}",
                        Icon { id: rating.icon() }
                        "{rating.label()} Performance"
                    }
                }

                div { class: "mt-6 space-y-4",
                    Link {
                        class: "block w-full {theme::btn_primary(theme)}",
                        to: Route::Games {},
                        "Back to Games"
                    }
                    button {
                        class: "w-full {theme::btn_outline(theme)}",
                        onclick: move |_| on_restart.call(()),
                        Icon { id: IconId::RotateCcw, class: "mr-2" }
                        "Play Again"
                    }
                }
            }
        }
    }
}

#[component]
fn ResultTile(value: String, caption: &'static str, accent: &'static str, theme: Theme) -> Element {
    rsx! {
        div { class: "{theme::muted_block(theme)} text-center",
            div { class: "text-2xl font-bold {accent}", "{value}" }
            div { class: "text-sm {theme::text_muted(theme)}", "{caption}" }
        }
    }
}

fn rating_class(rating: ScoreRating) -> &'static str {
    match rating {
        ScoreRating::Perfect => "text-green-600",
        ScoreRating::Excellent => "text-blue-600",
        ScoreRating::Good => "text-yellow-600",
        ScoreRating::Fair => "text-orange-600",
    }
}
