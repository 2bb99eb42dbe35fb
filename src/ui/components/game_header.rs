use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{IconId, Theme};
use crate::ui::icons::Icon;
use crate::ui::theme;

#[component]
pub fn GameHeader(title: String, description: String, icon: IconId, theme: Theme) -> Element {
    rsx! {
        div { class: "mb-6 flex items-center gap-4",
            Link {
                class: "{theme::btn_ghost(theme)}",
                to: Route::Games {},
                Icon { id: IconId::ArrowLeft, class: "text-base" }
                "Back to Games"
            }
            div { class: "flex-1",
                h1 { class: "flex items-center gap-3 text-3xl font-bold {theme::text_strong(theme)}",
                    span { class: "{theme::text_primary(theme)}",
                        Icon { id: icon, class: "text-3xl" }
                    }
                    "{title}"
                }
                p { class: "mt-2 {theme::text_muted(theme)}", "{description}" }
            }
        }
    }
}
