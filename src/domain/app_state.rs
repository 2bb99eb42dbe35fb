use serde::{Deserialize, Serialize};

use time::Date;

use super::tariff::{
    find_origin, parse_shipment_value, validate_shipping_date, TariffQuote, TransportMode,
    DEFAULT_ARRIVAL_COUNTRY,
};

/// Colour scheme handed down to every widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    /// Raw HTS code as typed; opaque to the calculator.
    pub hts_code: String,
    /// Raw shipment value field, kept so the input survives invalid edits.
    pub shipment_input: String,
    /// Last value that parsed cleanly.
    pub shipment_value: f64,
    /// Country name from the tariff table; empty until chosen.
    pub origin_country: String,
    pub arrival_country: String,
    pub transport_mode: Option<TransportMode>,
    /// `YYYY-MM-DD` or empty.
    pub entry_date: String,
    /// `YYYY-MM-DD` or empty.
    pub loading_date: String,
    /// Result of the last successful calculation.
    pub quote: Option<TariffQuote>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            hts_code: String::new(),
            shipment_input: DEFAULT_SHIPMENT_INPUT.to_string(),
            shipment_value: DEFAULT_SHIPMENT_VALUE,
            origin_country: String::new(),
            arrival_country: DEFAULT_ARRIVAL_COUNTRY.to_string(),
            transport_mode: None,
            entry_date: String::new(),
            loading_date: String::new(),
            quote: None,
        }
    }
}

pub const DEFAULT_SHIPMENT_VALUE: f64 = 10_000.0;
const DEFAULT_SHIPMENT_INPUT: &str = "10000";

/// Which shipping date field is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShippingDate {
    Entry,
    Loading,
}

impl AppState {
    /// Stores the raw input and, if it parses, the new value.
    pub fn set_shipment_input(&mut self, raw: String) -> Result<f64, String> {
        let parsed = parse_shipment_value(&raw);
        self.shipment_input = raw;
        if let Ok(value) = parsed {
            self.shipment_value = value;
        }
        parsed
    }

    /// Stores a date unless it lies before `today`; a rejected date leaves the field unchanged.
    pub fn set_shipping_date(
        &mut self,
        field: ShippingDate,
        raw: String,
        today: Date,
    ) -> Result<(), String> {
        validate_shipping_date(&raw, today)?;
        let slot = match field {
            ShippingDate::Entry => &mut self.entry_date,
            ShippingDate::Loading => &mut self.loading_date,
        };
        *slot = raw.trim().to_string();
        Ok(())
    }

    /// First input still needed before a quote can be computed.
    pub fn missing_quote_input(&self) -> Option<&'static str> {
        if self.hts_code.trim().is_empty() {
            Some("Enter an HTS code")
        } else if self.shipment_input.trim().is_empty() {
            Some("Enter a shipment value")
        } else if self.origin_country.is_empty() {
            Some("Select a country of origin")
        } else {
            None
        }
    }

    /// Prices the current form against the origin's tariff record and keeps the result.
    pub fn calculate_quote(&mut self) -> Result<TariffQuote, String> {
        if let Some(missing) = self.missing_quote_input() {
            return Err(missing.to_string());
        }
        let shipment_value = parse_shipment_value(&self.shipment_input)?;
        let origin = find_origin(&self.origin_country)
            .ok_or_else(|| format!("No tariff data for {}", self.origin_country))?;

        let quote = TariffQuote {
            hts_code: self.hts_code.trim().to_string(),
            origin: origin.country_name,
            destination: self.arrival_country.clone(),
            shipment_value,
            tariff_rate: origin.tariff_rate,
            transport: self.transport_mode,
            breakdown: origin.breakdown(shipment_value),
        };
        self.quote = Some(quote.clone());
        Ok(quote)
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
        self.hts_code = persisted.hts_code;
        if let Ok(value) = parse_shipment_value(&persisted.shipment_value) {
            self.shipment_input = persisted.shipment_value;
            self.shipment_value = value;
        }
        if find_origin(&persisted.origin_country).is_some() {
            self.origin_country = persisted.origin_country;
        }
        self.transport_mode = persisted.transport_mode;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            theme: self.theme,
            hts_code: self.hts_code.clone(),
            shipment_value: self.shipment_input.clone(),
            origin_country: self.origin_country.clone(),
            transport_mode: self.transport_mode,
        }
    }
}

/// Subset of [`AppState`] written to the settings file. Dates and quotes are not kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub hts_code: String,
    #[serde(default = "default_shipment_input")]
    pub shipment_value: String,
    #[serde(default)]
    pub origin_country: String,
    #[serde(default)]
    pub transport_mode: Option<TransportMode>,
}

fn default_shipment_input() -> String {
    DEFAULT_SHIPMENT_INPUT.to_string()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn invalid_input_keeps_last_good_value() {
        let mut state = AppState::default();
        assert_eq!(state.set_shipment_input("2500".into()), Ok(2500.0));
        assert!(state.set_shipment_input("12a".into()).is_err());
        assert_eq!(state.shipment_input, "12a");
        assert_eq!(state.shipment_value, 2500.0);
    }

    #[test]
    fn persisted_round_trip() {
        let mut state = AppState::default();
        state.theme = Theme::Light;
        state.hts_code = "8471.30.01".into();
        state.origin_country = "Vietnam".into();
        state.transport_mode = Some(TransportMode::Air);
        let _ = state.set_shipment_input("750".into());

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored, state);
    }

    #[test]
    fn corrupt_persisted_value_falls_back_to_default() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            theme: Theme::Dark,
            hts_code: String::new(),
            shipment_value: "lots".into(),
            origin_country: "Atlantis".into(),
            transport_mode: None,
        });
        assert_eq!(state.shipment_value, DEFAULT_SHIPMENT_VALUE);
        assert!(state.origin_country.is_empty());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let persisted: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(persisted.theme, Theme::Dark);
        assert!(persisted.hts_code.is_empty());
        assert_eq!(persisted.transport_mode, None);

        let mut state = AppState::default();
        state.apply_persisted(persisted);
        assert_eq!(state.shipment_value, DEFAULT_SHIPMENT_VALUE);
        assert_eq!(state.arrival_country, "United States");
    }

    #[test]
    fn quote_needs_code_value_and_origin() {
        let mut state = AppState::default();
        assert_eq!(state.missing_quote_input(), Some("Enter an HTS code"));
        state.hts_code = "6109.10.00".into();
        assert_eq!(state.missing_quote_input(), Some("Select a country of origin"));
        let _ = state.set_shipment_input(" ".into());
        assert_eq!(state.missing_quote_input(), Some("Enter a shipment value"));
        assert!(state.calculate_quote().is_err());
        assert_eq!(state.quote, None);
    }

    #[test]
    fn quote_prices_the_chosen_origin() {
        let mut state = AppState::default();
        state.hts_code = " 6109.10.00 ".into();
        state.origin_country = "Mexico".into();
        state.transport_mode = Some(TransportMode::Sea);

        let quote = state.calculate_quote().unwrap();
        assert_eq!(quote.hts_code, "6109.10.00");
        assert_eq!(quote.destination, "United States");
        assert_eq!(quote.breakdown.base_tariff, 200.0);
        assert_eq!(quote.breakdown.additional_fees, 150.0);
        assert_eq!(quote.breakdown.total, 350.0);
        assert_eq!(state.quote, Some(quote));
    }

    #[test]
    fn invalid_shipment_value_blocks_the_quote() {
        let mut state = AppState::default();
        state.hts_code = "6109.10.00".into();
        state.origin_country = "Mexico".into();
        let _ = state.set_shipment_input("-5".into());
        assert_eq!(
            state.calculate_quote(),
            Err("Shipment value cannot be negative".to_string())
        );
    }

    #[test]
    fn past_dates_are_rejected_without_overwriting() {
        let today = date!(2026 - 10 - 16);
        let mut state = AppState::default();
        assert!(state
            .set_shipping_date(ShippingDate::Entry, "2026-11-01".into(), today)
            .is_ok());
        assert!(state
            .set_shipping_date(ShippingDate::Entry, "2026-10-01".into(), today)
            .is_err());
        assert_eq!(state.entry_date, "2026-11-01");

        assert!(state
            .set_shipping_date(ShippingDate::Loading, String::new(), today)
            .is_ok());
        assert!(state.loading_date.is_empty());
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
