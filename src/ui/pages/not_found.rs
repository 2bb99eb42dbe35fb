use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, IconId},
    ui::{icons::Icon, theme},
};

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let nav = use_navigator();
    let path = requested_path(&segments);

    rsx! {
        div { class: "flex flex-col items-center gap-6 py-16 text-center",
            span { class: "text-5xl", Icon { id: IconId::TriangleAlert } }
            h1 { class: "text-6xl font-bold {theme::text_strong(theme)}", "404" }
            h2 { class: "text-2xl font-semibold {theme::text_strong(theme)}", "Page Not Found" }
            p { class: "max-w-md {theme::text_muted(theme)}",
                "The page you're looking for doesn't exist or has been moved."
            }
            code { class: "{theme::muted_block(theme)}", "{path}" }
            div { class: "flex gap-3",
                button {
                    class: "{theme::btn_outline(theme)}",
                    onclick: move |_| nav.go_back(),
                    Icon { id: IconId::ArrowLeft }
                    " Go back"
                }
                button {
                    class: "{theme::btn_primary(theme)}",
                    onclick: move |_| {
                        nav.push(Route::Calculator {});
                    },
                    "Go back home"
                }
            }
        }
    }
}

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_rebuilt_from_segments() {
        assert_eq!(requested_path(&[]), "/");
        assert_eq!(
            requested_path(&["forum".to_string(), "missing".to_string()]),
            "/forum/missing"
        );
    }
}
