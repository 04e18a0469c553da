use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fuel and emission prices for the period, plus how much of the installed wind
/// capacity is usable.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_euro_per_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_euro_per_mwh: f64,
    #[serde(rename = "co2(euro/ton)")]
    pub co2_euro_per_ton: f64,
    #[serde(rename = "wind(%)")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_percentage: f64,
}

impl Fuels {
    /// Usable share of wind capacity, in `0.0..=1.0`
    pub fn wind_fraction(&self) -> f64 {
        self.wind_percentage / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fuels_wire_format() {
        let fuels: Fuels = serde_json::from_value(json!({
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        }))
        .unwrap();

        assert_eq!(fuels.gas_euro_per_mwh, 13.4);
        assert_eq!(fuels.kerosine_euro_per_mwh, 50.8);
        assert_eq!(fuels.co2_euro_per_ton, 20.0);
        assert_eq!(fuels.wind_fraction(), 0.6);
    }

    #[test]
    fn test_wind_percentage_bounds() {
        let mut fuels = Fuels {
            gas_euro_per_mwh: 13.4,
            kerosine_euro_per_mwh: 50.8,
            co2_euro_per_ton: 20.0,
            wind_percentage: 100.0,
        };
        assert!(fuels.validate().is_ok());

        fuels.wind_percentage = 100.5;
        assert!(fuels.validate().is_err());

        fuels.wind_percentage = -1.0;
        assert!(fuels.validate().is_err());
    }
}
