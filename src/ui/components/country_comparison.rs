use dioxus::prelude::*;

use crate::domain::{comparison_rows, CountryCostRow, IconId, Theme, Trend, COUNTRY_TARIFFS};
use crate::ui::icons::Icon;
use crate::ui::theme;
use crate::util::format::{format_amount, format_percent, format_usd};

const NO_HTS_PROMPT: &str = "Enter an HTS code in the calculator to see specific comparisons";

/// Top-10 origin countries for a shipment, in authored order.
///
/// `shipment_value` is trusted to be a non-negative number; the caller validates it.
#[component]
pub fn CountryComparison(hts_code: String, shipment_value: f64, theme: Theme) -> Element {
    let rows = build_rows(&comparison_rows(&COUNTRY_TARIFFS, shipment_value), theme);
    let caption = comparison_caption(&hts_code);
    let value_display = format_usd(shipment_value);

    rsx! {
        section { class: "{theme::card_emphasis(theme)} p-6",
            header { class: "mb-4",
                h2 { class: "text-lg font-semibold {theme::text_strong(theme)}", "Top 10 Countries - Lowest Tariff Costs" }
                p { class: "text-sm {theme::text_muted(theme)}", "{caption}" }
            }
            div { class: "space-y-3",
                for row in rows {
                    ComparisonRow { key: "{row.country}", row, theme }
                }
            }
            div { class: "mt-6 {theme::muted_block(theme)}",
                p { class: "text-sm {theme::text_muted(theme)}",
                    strong { "Note: " }
                    "Calculations based on {value_display} shipment value. Actual costs may vary based on specific product classifications, trade agreements, and current regulations."
                }
            }
        }
    }
}

#[component]
fn ComparisonRow(row: RowView, theme: Theme) -> Element {
    rsx! {
        div { class: "{theme::row(theme)}",
            div { class: "flex min-w-0 items-center gap-3",
                span { class: "text-2xl", "{row.flag}" }
                div {
                    div { class: "flex items-center gap-2",
                        span { class: "font-medium", "{row.country}" }
                        span { class: "{row.badge_class}", "{row.rank_label}" }
                    }
                    div { class: "text-sm {theme::text_muted(theme)}", "{row.rate_display} tariff rate" }
                }
            }
            div { class: "flex items-center gap-4",
                div { class: "text-right",
                    div { class: "font-mono font-semibold", "{row.total_display}" }
                    div { class: "text-sm {theme::text_muted(theme)}", "{row.breakdown_display}" }
                }
                span { class: "flex items-center {row.trend_class}",
                    Icon { id: row.trend_icon }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct RowView {
    country: &'static str,
    flag: &'static str,
    rank_label: String,
    badge_class: &'static str,
    rate_display: String,
    total_display: String,
    breakdown_display: String,
    trend_icon: IconId,
    trend_class: &'static str,
}

fn build_rows(rows: &[CountryCostRow], theme: Theme) -> Vec<RowView> {
    rows.iter()
        .map(|row| RowView {
            country: row.record.country_name,
            flag: row.record.flag_glyph,
            rank_label: format!("#{}", row.rank),
            badge_class: theme::rank_badge(theme, row.tier),
            rate_display: format_percent(row.record.tariff_rate),
            total_display: format_usd(row.total_cost),
            breakdown_display: format!(
                "{} tariff + ${} fees",
                format_usd(row.tariff_cost),
                format_amount(row.record.additional_fees)
            ),
            trend_icon: trend_icon(row.record.trend),
            trend_class: theme::trend_class(theme, row.record.trend),
        })
        .collect()
}

fn trend_icon(trend: Trend) -> IconId {
    match trend {
        Trend::Up => IconId::TrendingUp,
        Trend::Down => IconId::TrendingDown,
        Trend::Stable => IconId::Minus,
    }
}

fn comparison_caption(hts_code: &str) -> String {
    if hts_code.is_empty() {
        NO_HTS_PROMPT.to_string()
    } else {
        format!("Comparison for HTS Code: {hts_code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RankTier;

    #[test]
    fn caption_prompts_without_code() {
        assert_eq!(comparison_caption(""), NO_HTS_PROMPT);
        assert_eq!(
            comparison_caption("8471.30.01"),
            "Comparison for HTS Code: 8471.30.01"
        );
    }

    #[test]
    fn views_follow_input_order_and_rank_styles() {
        let rows = build_rows(&comparison_rows(&COUNTRY_TARIFFS, 10_000.0), Theme::Dark);
        assert_eq!(rows.len(), 10);
        for (index, view) in rows.iter().enumerate() {
            assert_eq!(view.country, COUNTRY_TARIFFS[index].country_name);
            assert_eq!(view.rank_label, format!("#{}", index + 1));
            let tier = if index < 3 { RankTier::Top } else { RankTier::Standard };
            assert_eq!(view.badge_class, theme::rank_badge(Theme::Dark, tier));
        }
    }

    #[test]
    fn first_row_breaks_down_cost() {
        let rows = build_rows(&comparison_rows(&COUNTRY_TARIFFS, 10_000.0), Theme::Light);
        let mexico = &rows[0];
        assert_eq!(mexico.rate_display, "2.0%");
        assert_eq!(mexico.total_display, "$350");
        assert_eq!(mexico.breakdown_display, "$200 tariff + $150 fees");
        assert_eq!(mexico.trend_icon, IconId::TrendingDown);
    }
}
