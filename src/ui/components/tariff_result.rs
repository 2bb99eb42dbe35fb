use dioxus::prelude::*;

use crate::domain::{IconId, TariffQuote, Theme};
use crate::ui::icons::Icon;
use crate::ui::theme;
use crate::util::format::{format_percent, format_usd, format_usd_cents};

const EMPTY_PROMPT: &str = "Enter shipment details and click calculate to see results";

/// Cost breakdown of the last calculated quote, or a prompt when there is none.
#[component]
pub fn TariffResult(quote: Option<TariffQuote>, theme: Theme) -> Element {
    let Some(quote) = quote else {
        return rsx! {
            section { class: "{theme::card(theme)} flex flex-col items-center justify-center gap-3 p-10 text-center",
                Icon { id: IconId::Calculator, class: "text-4xl opacity-60" }
                p { class: "text-sm {theme::text_muted(theme)}", "{EMPTY_PROMPT}" }
            }
        };
    };

    let (lines, total) = breakdown_lines(&quote);
    let details = summary_lines(&quote);

    rsx! {
        section { class: "{theme::card(theme)} space-y-5 p-6",
            h2 { class: "flex items-center gap-2 text-lg font-semibold {theme::text_strong(theme)}",
                Icon { id: IconId::DollarSign }
                "Cost Breakdown"
            }
            div { class: "space-y-2",
                for (label, amount) in lines {
                    div { key: "{label}", class: "flex justify-between text-sm",
                        span { class: "{theme::text_muted(theme)}", "{label}" }
                        span { class: "font-mono", "{amount}" }
                    }
                }
            }
            div { class: "{theme::total_block(theme)} flex justify-between",
                span { class: "font-semibold", "Total Cost" }
                span { class: "font-mono text-lg font-semibold", "{total}" }
            }
            div {
                h3 { class: "mb-2 text-sm font-semibold {theme::text_strong(theme)}", "Calculation Details" }
                dl { class: "grid grid-cols-2 gap-x-4 gap-y-1 text-sm",
                    for (label, value) in details {
                        dt { class: "{theme::text_muted(theme)}", "{label}" }
                        dd { class: "text-right", "{value}" }
                    }
                }
            }
        }
    }
}

/// Base tariff and fee lines, plus the formatted total.
fn breakdown_lines(quote: &TariffQuote) -> ([(&'static str, String); 2], String) {
    let breakdown = quote.breakdown;
    (
        [
            ("Base Tariff", format_usd_cents(breakdown.base_tariff)),
            ("Additional Fees", format_usd_cents(breakdown.additional_fees)),
        ],
        format_usd_cents(breakdown.total),
    )
}

fn summary_lines(quote: &TariffQuote) -> Vec<(&'static str, String)> {
    let transport = quote
        .transport
        .map_or("Not specified", |mode| mode.label());
    vec![
        ("HTS Code", quote.hts_code.clone()),
        ("Origin", quote.origin.to_string()),
        ("Destination", quote.destination.clone()),
        ("Shipment Value", format_usd(quote.shipment_value)),
        ("Tariff Rate", format_percent(quote.tariff_rate)),
        ("Transport", transport.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppState, TransportMode};

    fn mexico_quote(transport: Option<TransportMode>) -> TariffQuote {
        let mut state = AppState {
            hts_code: "8471.30.01".into(),
            origin_country: "Mexico".into(),
            transport_mode: transport,
            ..AppState::default()
        };
        state.calculate_quote().unwrap()
    }

    #[test]
    fn breakdown_shows_cents() {
        let (lines, total) = breakdown_lines(&mexico_quote(None));
        assert_eq!(lines[0], ("Base Tariff", "$200.00".to_string()));
        assert_eq!(lines[1], ("Additional Fees", "$150.00".to_string()));
        assert_eq!(total, "$350.00");
    }

    #[test]
    fn summary_echoes_the_inputs() {
        let details = summary_lines(&mexico_quote(Some(TransportMode::Sea)));
        assert_eq!(
            details,
            vec![
                ("HTS Code", "8471.30.01".to_string()),
                ("Origin", "Mexico".to_string()),
                ("Destination", "United States".to_string()),
                ("Shipment Value", "$10,000".to_string()),
                ("Tariff Rate", "2.0%".to_string()),
                ("Transport", "Sea Freight".to_string()),
            ]
        );
    }

    #[test]
    fn unset_transport_reads_not_specified() {
        let details = summary_lines(&mexico_quote(None));
        assert_eq!(details[5], ("Transport", "Not specified".to_string()));
    }
}
