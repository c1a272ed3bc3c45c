//! # Country Commands

use serde::Serialize;
use tracing::debug;

use crate::state::AppState;

/// One destination in the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub country: String,
    pub max_weight_grams: u32,
    pub max_weight_label: String,
}

/// All destinations, in dataset order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub countries: Vec<CountryEntry>,
}

impl CountriesResponse {
    /// Two columns: country and its maximum weight.
    pub fn to_text(&self) -> String {
        let width = self
            .countries
            .iter()
            .map(|c| c.country.chars().count())
            .max()
            .unwrap_or(0);

        self.countries
            .iter()
            .map(|c| format!("{:<width$}  max {}\n", c.country, c.max_weight_label))
            .collect()
    }
}

/// Lists every destination the rate table covers.
///
/// ## User Workflow
/// ```text
/// $ itps countries
/// Australia                 max 2 kg
/// France                    max 2 kg
/// Japan                     max 5 kg
/// ...
/// ```
pub fn list_countries(state: &AppState) -> CountriesResponse {
    debug!(count = state.rates.len(), "list_countries command");

    CountriesResponse {
        countries: state
            .rates
            .records()
            .iter()
            .map(|r| CountryEntry {
                country: r.country.clone(),
                max_weight_grams: r.max_weight_grams,
                max_weight_label: r.max_weight_label.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use itps_core::{Money, RateTable, TariffRecord};

    fn state() -> AppState {
        let rates = RateTable::from_records(vec![
            TariffRecord::new("France", 2000, Money::from_rupees(250), Money::from_rupees(50)),
            TariffRecord::new("Japan", 5000, Money::from_rupees(300), Money::from_rupees(60)),
        ])
        .unwrap();
        AppState::new(AppConfig::default(), rates)
    }

    #[test]
    fn test_list_countries_keeps_order() {
        let response = list_countries(&state());
        let names: Vec<_> = response.countries.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, ["France", "Japan"]);
        assert_eq!(response.countries[1].max_weight_grams, 5000);
        assert_eq!(response.countries[1].max_weight_label, "5 kg");
    }

    #[test]
    fn test_text_output() {
        let text = list_countries(&state()).to_text();
        assert_eq!(text, "France  max 2 kg\nJapan   max 5 kg\n");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(list_countries(&state())).unwrap();
        assert_eq!(json["countries"][0]["maxWeightLabel"], "2 kg");
    }
}
