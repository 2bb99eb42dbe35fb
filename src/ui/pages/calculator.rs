use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::persist_user_state,
    domain::{
        filter_hts_suggestions, iso_date, AppState, IconId, ShippingDate, TransportMode,
        COUNTRY_TARIFFS,
    },
    ui::{
        components::{CountryComparison, TariffResult},
        icons::Icon,
        theme,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CalculatorTab {
    Calculator,
    Compare,
}

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut tab = use_signal(|| CalculatorTab::Calculator);
    let mut shipment_error = use_signal(|| None::<String>);
    let entry_error = use_signal(|| None::<String>);
    let loading_error = use_signal(|| None::<String>);
    let mut quote_error = use_signal(|| None::<String>);

    let current = state();
    let theme = current.theme;
    let hts_code = current.hts_code.clone();
    let trimmed_code = hts_code.trim().to_string();
    let missing = current.missing_quote_input();
    let suggestions = filter_hts_suggestions(&hts_code);
    let matched = suggestions
        .iter()
        .find(|item| item.code == trimmed_code)
        .map(|item| item.description);
    let shipment_class = if shipment_error().is_some() {
        theme::input_invalid(theme)
    } else {
        theme::input_class(theme)
    };
    let calculate_class = if missing.is_some() {
        theme::btn_disabled(theme)
    } else {
        theme::btn_primary(theme)
    };
    let transport_code = current.transport_mode.map_or("", |mode| mode.code());
    let min_date = iso_date(OffsetDateTime::now_utc().date());

    let on_reset = move |_| {
        state.set(AppState {
            theme,
            ..AppState::default()
        });
        for mut error in [shipment_error, entry_error, loading_error, quote_error] {
            error.set(None);
        }
        persist_user_state(&state);
    };

    let on_calculate = move |_| match state.with_mut(|st| st.calculate_quote()) {
        Ok(quote) => {
            info!(
                "Calculated {} from {}: total {}",
                quote.hts_code, quote.origin, quote.breakdown.total
            );
            quote_error.set(None);
        }
        Err(err) => {
            warn!("Tariff calculation rejected: {err}");
            quote_error.set(Some(err));
        }
    };

    rsx! {
        div { class: "space-y-8",
            header {
                class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "flex items-center gap-3 text-2xl font-semibold {theme::text_strong(theme)}",
                        Icon { id: IconId::Calculator }
                        "Import/Export Tariff Calculator"
                    }
                    p { class: "text-sm {theme::text_muted(theme)}",
                        "Estimate duties and fees for a shipment and compare origin countries."
                    }
                }
                button { class: "{theme::btn_outline(theme)}", onclick: on_reset, "Reset" }
            }

            div { class: "grid grid-cols-2 gap-2",
                button {
                    class: "{theme::btn_small(theme, tab() == CalculatorTab::Calculator)}",
                    onclick: move |_| tab.set(CalculatorTab::Calculator),
                    "Calculator"
                }
                button {
                    class: "{theme::btn_small(theme, tab() == CalculatorTab::Compare)}",
                    onclick: move |_| tab.set(CalculatorTab::Compare),
                    "Compare Countries"
                }
            }

            match tab() {
                CalculatorTab::Calculator => rsx! {
                    div { class: "grid gap-6 lg:grid-cols-2",
                        section { class: "{theme::card(theme)} space-y-4 p-6",
                            h2 { class: "text-lg font-semibold {theme::text_strong(theme)}", "Tariff Calculator" }

                            div {
                                label { class: "{theme::label_class(theme)}", r#for: "hts-code", "HTS Code" }
                                input {
                                    id: "hts-code",
                                    class: "mt-1 {theme::input_class(theme)}",
                                    placeholder: "Search HTS codes...",
                                    list: "hts-suggestions",
                                    value: "{hts_code}",
                                    oninput: move |evt| state.with_mut(|st| st.hts_code = evt.value()),
                                    onchange: move |_| persist_user_state(&state),
                                }
                                datalist { id: "hts-suggestions",
                                    for item in suggestions {
                                        option { key: "{item.code}", value: item.code, "{item.description}" }
                                    }
                                }
                                if let Some(description) = matched {
                                    p { class: "mt-2 text-xs {theme::text_muted(theme)}", "{description}" }
                                }
                            }

                            div {
                                label { class: "{theme::label_class(theme)}", r#for: "shipment-value", "Shipment Value (USD)" }
                                input {
                                    id: "shipment-value",
                                    class: "mt-1 {shipment_class}",
                                    value: "{current.shipment_input}",
                                    oninput: move |evt| {
                                        let result = state.with_mut(|st| st.set_shipment_input(evt.value()));
                                        if let Ok(value) = result {
                                            debug!("Shipment value set to {value}");
                                        }
                                        shipment_error.set(result.err());
                                    },
                                    onchange: move |_| {
                                        if shipment_error().is_none() {
                                            persist_user_state(&state);
                                        }
                                    },
                                }
                                if let Some(message) = shipment_error() {
                                    p { class: "mt-2 text-xs text-rose-400", "{message}" }
                                }
                            }

                            div { class: "grid gap-4 sm:grid-cols-2",
                                div {
                                    label { class: "{theme::label_class(theme)}", r#for: "origin-country", "Country of Origin" }
                                    select {
                                        id: "origin-country",
                                        class: "mt-1 {theme::input_class(theme)}",
                                        value: "{current.origin_country}",
                                        onchange: move |evt| {
                                            state.with_mut(|st| st.origin_country = evt.value());
                                            persist_user_state(&state);
                                        },
                                        option { value: "", "Select origin country" }
                                        for record in COUNTRY_TARIFFS.iter() {
                                            option {
                                                key: "{record.country_name}",
                                                value: record.country_name,
                                                selected: record.country_name == current.origin_country,
                                                "{record.flag_glyph} {record.country_name}"
                                            }
                                        }
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class(theme)}", r#for: "arrival-country", "Arrival Country" }
                                    select {
                                        id: "arrival-country",
                                        class: "mt-1 {theme::input_class(theme)}",
                                        value: "{current.arrival_country}",
                                        option { value: "{current.arrival_country}", "🇺🇸 {current.arrival_country}" }
                                    }
                                }
                            }

                            div {
                                label { class: "{theme::label_class(theme)}", r#for: "transport-mode", "Mode of Transport" }
                                select {
                                    id: "transport-mode",
                                    class: "mt-1 {theme::input_class(theme)}",
                                    value: "{transport_code}",
                                    onchange: move |evt| {
                                        state.with_mut(|st| st.transport_mode = TransportMode::from_code(&evt.value()));
                                        persist_user_state(&state);
                                    },
                                    option { value: "", "Select transport mode" }
                                    for mode in TransportMode::ALL {
                                        option {
                                            key: "{mode.code()}",
                                            value: mode.code(),
                                            selected: mode.code() == transport_code,
                                            "{mode.label()}"
                                        }
                                    }
                                }
                            }

                            div { class: "grid gap-4 sm:grid-cols-2",
                                div {
                                    label { class: "{theme::label_class(theme)}", r#for: "entry-date", "Entry Date" }
                                    input {
                                        id: "entry-date",
                                        r#type: "date",
                                        class: "mt-1 {theme::input_class(theme)}",
                                        min: "{min_date}",
                                        value: "{current.entry_date}",
                                        onchange: move |evt| store_date(state, entry_error, ShippingDate::Entry, evt.value()),
                                    }
                                    if let Some(message) = entry_error() {
                                        p { class: "mt-2 text-xs text-rose-400", "{message}" }
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class(theme)}", r#for: "loading-date", "Loading Date" }
                                    input {
                                        id: "loading-date",
                                        r#type: "date",
                                        class: "mt-1 {theme::input_class(theme)}",
                                        min: "{min_date}",
                                        value: "{current.loading_date}",
                                        onchange: move |evt| store_date(state, loading_error, ShippingDate::Loading, evt.value()),
                                    }
                                    if let Some(message) = loading_error() {
                                        p { class: "mt-2 text-xs text-rose-400", "{message}" }
                                    }
                                }
                            }

                            button {
                                class: "w-full {calculate_class}",
                                disabled: missing.is_some(),
                                onclick: on_calculate,
                                Icon { id: IconId::Calculator, class: "mr-2" }
                                "Calculate Tariff Costs"
                            }
                            if let Some(hint) = missing {
                                p { class: "text-xs {theme::text_muted(theme)}", "{hint} to calculate." }
                            }
                            if let Some(message) = quote_error() {
                                p { class: "{theme::alert_error(theme)}", "{message}" }
                            }
                        }

                        TariffResult { quote: current.quote.clone(), theme }
                    }
                },
                CalculatorTab::Compare => rsx! {
                    CountryComparison {
                        hts_code: trimmed_code.clone(),
                        shipment_value: current.shipment_value,
                        theme,
                    }
                },
            }
        }
    }
}

/// Rejected dates leave the stored value alone and surface under the field.
fn store_date(
    mut state: Signal<AppState>,
    mut error: Signal<Option<String>>,
    field: ShippingDate,
    raw: String,
) {
    let today = OffsetDateTime::now_utc().date();
    let result = state.with_mut(|st| st.set_shipping_date(field, raw, today));
    if let Err(err) = &result {
        debug!("Shipping date rejected: {err}");
    }
    error.set(result.err());
}
