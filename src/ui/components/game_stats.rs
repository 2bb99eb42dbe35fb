use dioxus::prelude::*;

use crate::domain::{StatDisplayItem, Theme};
use crate::ui::icons::Icon;
use crate::ui::theme;

/// One card per stat, in the order given.
#[component]
pub fn GameStats(stats: Vec<StatDisplayItem>, theme: Theme) -> Element {
    rsx! {
        div { class: "mb-6 grid grid-cols-2 gap-4 md:grid-cols-4",
            for (index, stat) in stats.into_iter().enumerate() {
                StatCard { key: "{index}", stat, theme }
            }
        }
    }
}

#[component]
fn StatCard(stat: StatDisplayItem, theme: Theme) -> Element {
    let progress = stat.bounded_progress();
    let icon_color = theme::stat_color(theme, stat.color);

    rsx! {
        div { class: "{theme::card(theme)} p-4",
            div { class: "flex items-center gap-3",
                span { class: "text-xl {icon_color}",
                    Icon { id: stat.icon }
                }
                div {
                    p { class: "text-sm {theme::text_muted(theme)}", "{stat.label}" }
                    p { class: "text-lg font-semibold", "{stat.value}" }
                    if let Some(caption) = stat.caption.as_deref() {
                        p { class: "text-xs {theme::text_muted(theme)}", "{caption}" }
                    }
                }
            }
            if let Some(value) = progress {
                ProgressBar { value, theme }
            }
        }
    }
}

/// Horizontal bar; `value` must already be within `[0, 100]`.
#[component]
pub fn ProgressBar(value: f64, theme: Theme) -> Element {
    let width = format!("{value:.1}%");
    rsx! {
        div {
            class: "{theme::progress_track(theme)}",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{value:.0}",
            div { class: "{theme::progress_fill(theme)}", style: "width: {width}" }
        }
    }
}
