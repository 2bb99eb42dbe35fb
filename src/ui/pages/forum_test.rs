use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use serde_json::Value;
use time::{macros::format_description, OffsetDateTime};

use crate::{
    domain::{pretty_payload, AppState, FetchState, Theme},
    infra::forum::{ForumClient, ForumClientError},
    ui::theme,
};

#[component]
pub fn ForumTestPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let fetch_state = use_signal(FetchState::default);
    let fetched_at = use_signal(|| None::<String>);

    let _initial = use_future(move || {
        let mut fetch_state = fetch_state;
        let mut fetched_at = fetched_at;
        async move {
            info!("Forum test: starting categories fetch");
            let result = fetch_categories().await;
            match &result {
                Ok(_) => info!("Forum test: categories fetch succeeded"),
                Err(err) => error!("Forum test: categories fetch failed: {err}"),
            }
            fetched_at.set(Some(timestamp_now()));
            fetch_state.set(FetchState::from_result(result));
        }
    });

    let on_manual_test = move |_| {
        spawn(async move {
            info!("Forum test: manual fetch triggered");
            let result = fetch_categories().await;
            match &result {
                Ok(payload) => info!("Forum test: manual fetch payload: {payload}"),
                Err(err) => error!("Forum test: manual fetch failed: {err}"),
            }
            show_alert(&manual_test_message(&result)).await;
        });
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold {theme::text_strong(theme)}", "Forum API Test" }
                    p { class: "text-sm {theme::text_muted(theme)}",
                        "Fetches the forum categories once and shows the raw response."
                    }
                }
                button { class: "{theme::btn_outline(theme)}", onclick: on_manual_test, "Manual Test" }
            }

            FetchStatePanel { state: fetch_state(), theme }

            if let Some(stamp) = fetched_at() {
                p { class: "text-xs {theme::text_muted(theme)}", "Fetched at {stamp}" }
            }
        }
    }
}

/// Renders whichever of loading, error or payload applies.
#[component]
fn FetchStatePanel(state: FetchState, theme: Theme) -> Element {
    match state {
        FetchState::Loading => rsx! {
            div { class: "{theme::alert_info(theme)}", "Loading..." }
        },
        FetchState::Failure(message) => rsx! {
            div { class: "{theme::alert_error(theme)}",
                p { class: "font-semibold", "Error: {message}" }
            }
        },
        FetchState::Success(payload) => {
            let pretty = pretty_payload(&payload);
            rsx! {
                div { class: "{theme::alert_success(theme)} space-y-3",
                    p { class: "font-semibold", "Success! Received data:" }
                    pre { class: "json-payload {theme::muted_block(theme)}", "{pretty}" }
                }
            }
        }
    }
}

async fn fetch_categories() -> Result<Value, ForumClientError> {
    ForumClient::new()?.get_categories().await
}

fn manual_test_message<E: std::fmt::Display>(result: &Result<Value, E>) -> String {
    match result {
        Ok(_) => "Check console for results".to_string(),
        Err(err) => format!("Error: {err}"),
    }
}

async fn show_alert(message: &str) {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let eval = document::eval(&format!("alert({literal});"));
    if let Err(err) = eval.await {
        error!("Failed to show alert: {err:?}");
    }
}

fn timestamp_now() -> String {
    let format = format_description!("[hour]:[minute]:[second] UTC");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_messages() {
        let ok: Result<Value, String> = Ok(Value::Null);
        assert_eq!(manual_test_message(&ok), "Check console for results");

        let failed: Result<Value, ForumClientError> = Err(ForumClientError::Transport(
            "connect ECONNREFUSED 127.0.0.1:8080".to_string(),
        ));
        assert_eq!(
            manual_test_message(&failed),
            "Error: connect ECONNREFUSED 127.0.0.1:8080"
        );

        let rejected: Result<Value, ForumClientError> = Err(ForumClientError::Status {
            code: 404,
            message: "HTTP 404: Not Found".to_string(),
        });
        assert_eq!(manual_test_message(&rejected), "Error: HTTP 404: Not Found");
    }

    #[test]
    fn timestamp_has_clock_shape() {
        let stamp = timestamp_now();
        assert!(stamp.ends_with(" UTC"));
        assert_eq!(stamp.len(), "00:00:00 UTC".len());
    }
}
