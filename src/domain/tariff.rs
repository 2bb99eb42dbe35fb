use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

use super::icon::IconId;

/// Direction a country's tariff rate has been moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One row of the country comparison table.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryTariffRecord {
    pub country_name: &'static str,
    /// Decimal fraction, e.g. `0.02` for 2%.
    pub tariff_rate: f64,
    /// Flat fees in USD added on top of the tariff.
    pub additional_fees: f64,
    pub trend: Trend,
    pub flag_glyph: &'static str,
}

impl CountryTariffRecord {
    /// Duty owed on `shipment_value` before fees.
    pub fn tariff_cost(&self, shipment_value: f64) -> f64 {
        shipment_value * self.tariff_rate
    }

    /// Landed duty cost: `shipment_value * tariff_rate + additional_fees`.
    pub fn total_cost(&self, shipment_value: f64) -> f64 {
        shipment_value * self.tariff_rate + self.additional_fees
    }

    pub fn breakdown(&self, shipment_value: f64) -> TariffBreakdown {
        TariffBreakdown {
            base_tariff: self.tariff_cost(shipment_value),
            additional_fees: self.additional_fees,
            total: self.total_cost(shipment_value),
        }
    }
}

const fn record(
    country_name: &'static str,
    tariff_rate: f64,
    additional_fees: f64,
    trend: Trend,
    flag_glyph: &'static str,
) -> CountryTariffRecord {
    CountryTariffRecord {
        country_name,
        tariff_rate,
        additional_fees,
        trend,
        flag_glyph,
    }
}

/// Authored in ascending tariff order. Consumers trust this order and never re-sort.
pub static COUNTRY_TARIFFS: [CountryTariffRecord; 10] = [
    record("Mexico", 0.02, 150.0, Trend::Down, "🇲🇽"),
    record("Canada", 0.03, 180.0, Trend::Stable, "🇨🇦"),
    record("Vietnam", 0.04, 200.0, Trend::Down, "🇻🇳"),
    record("South Korea", 0.05, 220.0, Trend::Up, "🇰🇷"),
    record("Taiwan", 0.06, 250.0, Trend::Stable, "🇹🇼"),
    record("Germany", 0.07, 280.0, Trend::Up, "🇩🇪"),
    record("Japan", 0.08, 300.0, Trend::Down, "🇯🇵"),
    record("United Kingdom", 0.09, 320.0, Trend::Stable, "🇬🇧"),
    record("India", 0.12, 350.0, Trend::Up, "🇮🇳"),
    record("China", 0.15, 400.0, Trend::Up, "🇨🇳"),
];

/// Number of leading rows that get the highlighted rank badge.
pub const TOP_RANKED: usize = 3;

/// Rank styling bucket for a zero-based row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    Top,
    Standard,
}

impl RankTier {
    pub fn for_index(index: usize) -> Self {
        if index < TOP_RANKED {
            RankTier::Top
        } else {
            RankTier::Standard
        }
    }
}

/// A record annotated for display under a given shipment value.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryCostRow {
    pub rank: usize,
    pub tier: RankTier,
    pub record: CountryTariffRecord,
    pub tariff_cost: f64,
    pub total_cost: f64,
}

/// Annotates `records` in the order given. No sorting happens here.
pub fn comparison_rows(
    records: &[CountryTariffRecord],
    shipment_value: f64,
) -> Vec<CountryCostRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| CountryCostRow {
            rank: index + 1,
            tier: RankTier::for_index(index),
            tariff_cost: record.tariff_cost(shipment_value),
            total_cost: record.total_cost(shipment_value),
            record: record.clone(),
        })
        .collect()
}

/// Cost of one shipment from one origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TariffBreakdown {
    pub base_tariff: f64,
    pub additional_fees: f64,
    pub total: f64,
}

/// Looks up an origin by its exact country name.
pub fn find_origin(country_name: &str) -> Option<&'static CountryTariffRecord> {
    COUNTRY_TARIFFS
        .iter()
        .find(|record| record.country_name == country_name)
}

/// Only import destination the calculator supports.
pub const DEFAULT_ARRIVAL_COUNTRY: &str = "United States";

/// How the goods travel. Recorded with the quote; it does not change the duty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Sea,
    Air,
    Land,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Sea,
        TransportMode::Air,
        TransportMode::Land,
    ];

    /// Stable form value, also used in the settings file.
    pub fn code(&self) -> &'static str {
        match self {
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
            TransportMode::Land => "land",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Sea => "Sea Freight",
            TransportMode::Air => "Air Freight",
            TransportMode::Land => "Land Transport",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            TransportMode::Sea => IconId::Ship,
            TransportMode::Air => IconId::Plane,
            TransportMode::Land => IconId::Truck,
        }
    }
}

/// A breakdown together with the inputs it was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct TariffQuote {
    pub hts_code: String,
    pub origin: &'static str,
    pub destination: String,
    pub shipment_value: f64,
    pub tariff_rate: f64,
    pub transport: Option<TransportMode>,
    pub breakdown: TariffBreakdown,
}

/// `YYYY-MM-DD`, the value format of a date input.
pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Checks a shipping date field. Blank is allowed; past dates are not.
pub fn validate_shipping_date(raw: &str, today: Date) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let date = Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map_err(|_| "Enter the date as YYYY-MM-DD".to_string())?;
    if date < today {
        return Err("Please select a current or future date".to_string());
    }
    Ok(())
}

/// A known HTS classification offered as an input suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HtsSuggestion {
    pub code: &'static str,
    pub description: &'static str,
}

pub const HTS_SUGGESTIONS: [HtsSuggestion; 15] = [
    HtsSuggestion {
        code: "8471.30.01",
        description: "Portable automatic data processing machines, weighing not more than 10 kg",
    },
    HtsSuggestion {
        code: "8471.41.01",
        description: "Data processing machines, digital, comprising CPU, input/output unit",
    },
    HtsSuggestion {
        code: "8471.49.00",
        description: "Other automatic data processing machines",
    },
    HtsSuggestion {
        code: "8471.60.10",
        description: "Input or output units for automatic data processing machines",
    },
    HtsSuggestion {
        code: "8471.70.20",
        description: "Storage units for automatic data processing machines",
    },
    HtsSuggestion {
        code: "8471.80.10",
        description: "Control or adapter units for automatic data processing machines",
    },
    HtsSuggestion {
        code: "8517.12.00",
        description: "Telephones for cellular networks or for other wireless networks",
    },
    HtsSuggestion {
        code: "8517.62.00",
        description: "Machines for reception, conversion, transmission of voice, images",
    },
    HtsSuggestion {
        code: "8528.72.04",
        description: "Reception apparatus for television, color, with LCD screen",
    },
    HtsSuggestion {
        code: "8528.72.08",
        description: "Reception apparatus for television, color, with OLED screen",
    },
    HtsSuggestion {
        code: "9013.80.90",
        description: "Other optical devices, appliances and instruments",
    },
    HtsSuggestion {
        code: "9405.40.84",
        description: "Other electric lamps and lighting fittings",
    },
    HtsSuggestion {
        code: "6203.42.40",
        description: "Men's or boys' trousers and breeches of cotton",
    },
    HtsSuggestion {
        code: "6204.62.40",
        description: "Women's or girls' trousers and breeches of cotton",
    },
    HtsSuggestion {
        code: "6109.10.00",
        description: "T-shirts, singlets and other vests, of cotton, knitted",
    },
];

/// Case-insensitive match against code or description. A blank query returns everything.
pub fn filter_hts_suggestions(query: &str) -> Vec<HtsSuggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return HTS_SUGGESTIONS.to_vec();
    }

    HTS_SUGGESTIONS
        .iter()
        .filter(|item| {
            item.code.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

/// Largest shipment value the calculator accepts, in USD.
pub const MAX_SHIPMENT_VALUE: f64 = 1_000_000_000_000.0;

/// Parses the shipment value field. Blank input counts as zero.
pub fn parse_shipment_value(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let cleaned: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| "Shipment value must be a number".to_string())?;
    if !value.is_finite() {
        return Err("Shipment value must be a finite number".to_string());
    }
    if value < 0.0 {
        return Err("Shipment value cannot be negative".to_string());
    }
    if value > MAX_SHIPMENT_VALUE {
        return Err("Shipment value cannot exceed $1,000,000,000,000".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cost_is_value_times_rate_plus_fees() {
        for value in [0.0, 1.0, 999.99, 10_000.0, 1_234_567.89] {
            for record in COUNTRY_TARIFFS.iter() {
                assert_eq!(
                    record.total_cost(value),
                    value * record.tariff_rate + record.additional_fees
                );
                assert_eq!(
                    record.total_cost(value),
                    record.tariff_cost(value) + record.additional_fees
                );
            }
        }
    }

    #[test]
    fn zero_value_costs_only_fees() {
        let rows = comparison_rows(&COUNTRY_TARIFFS, 0.0);
        assert_eq!(rows[0].total_cost, 150.0);
        assert_eq!(rows[9].total_cost, 400.0);
        assert!(rows.iter().all(|row| row.tariff_cost == 0.0));
    }

    #[test]
    fn rows_keep_authored_order() {
        let rows = comparison_rows(&COUNTRY_TARIFFS, 10_000.0);
        let names: Vec<_> = rows.iter().map(|row| row.record.country_name).collect();
        let authored: Vec<_> = COUNTRY_TARIFFS.iter().map(|r| r.country_name).collect();
        assert_eq!(names, authored);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn unsorted_input_is_not_resorted() {
        let mut shuffled = COUNTRY_TARIFFS.to_vec();
        shuffled.reverse();
        let rows = comparison_rows(&shuffled, 5_000.0);
        assert_eq!(rows[0].record.country_name, "China");
        assert_eq!(rows[9].record.country_name, "Mexico");
        assert_eq!(rows[0].tier, RankTier::Top);
    }

    #[test]
    fn first_three_rows_are_top_tier() {
        let rows = comparison_rows(&COUNTRY_TARIFFS, 1_000.0);
        for (index, row) in rows.iter().enumerate() {
            let expected = if index < 3 { RankTier::Top } else { RankTier::Standard };
            assert_eq!(row.tier, expected, "row {index}");
        }
    }

    #[test]
    fn authored_table_is_ascending_by_rate() {
        assert!(COUNTRY_TARIFFS
            .windows(2)
            .all(|pair| pair[0].tariff_rate <= pair[1].tariff_rate));
    }

    #[test]
    fn suggestions_match_code_or_description() {
        assert_eq!(filter_hts_suggestions("").len(), HTS_SUGGESTIONS.len());
        assert_eq!(filter_hts_suggestions("8517").len(), 2);
        let cotton = filter_hts_suggestions("COTTON");
        assert_eq!(cotton.len(), 3);
        assert!(cotton.iter().all(|s| s.description.contains("cotton")));
        assert!(filter_hts_suggestions("zzz").is_empty());
    }

    #[test]
    fn parses_shipment_values() {
        assert_eq!(parse_shipment_value(""), Ok(0.0));
        assert_eq!(parse_shipment_value("  2500 "), Ok(2500.0));
        assert_eq!(parse_shipment_value("$10,000.50"), Ok(10_000.5));
        assert!(parse_shipment_value("abc").is_err());
        assert!(parse_shipment_value("-1").is_err());
        assert!(parse_shipment_value("inf").is_err());
        assert_eq!(parse_shipment_value("1e12"), Ok(MAX_SHIPMENT_VALUE));
        assert!(parse_shipment_value("1000000000000.01").is_err());
        assert!(parse_shipment_value("1e20").is_err());
    }

    #[test]
    fn breakdown_uses_the_authored_origin_record() {
        let mexico = find_origin("Mexico").unwrap();
        assert_eq!(
            mexico.breakdown(10_000.0),
            TariffBreakdown {
                base_tariff: 200.0,
                additional_fees: 150.0,
                total: 350.0,
            }
        );
        let china = find_origin("China").unwrap().breakdown(2_000.0);
        assert_eq!(china.total, china.base_tariff + china.additional_fees);
        assert!(find_origin("Atlantis").is_none());
        assert!(find_origin("mexico").is_none());
    }

    #[test]
    fn transport_codes_round_trip() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(TransportMode::from_code(""), None);
        assert_eq!(TransportMode::Air.label(), "Air Freight");
    }

    #[test]
    fn shipping_dates_reject_the_past() {
        let today = time::macros::date!(2026 - 10 - 16);
        assert_eq!(iso_date(today), "2026-10-16");
        assert_eq!(validate_shipping_date("", today), Ok(()));
        assert_eq!(validate_shipping_date("2026-10-16", today), Ok(()));
        assert_eq!(validate_shipping_date("2027-01-02", today), Ok(()));
        assert_eq!(
            validate_shipping_date("2026-10-15", today),
            Err("Please select a current or future date".to_string())
        );
        assert!(validate_shipping_date("16/10/2026", today).is_err());
    }
}
