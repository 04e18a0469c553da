use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of generation unit. Determines which fuel a plant burns and whether it
/// emits CO2.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantType {
    /// Gas-fired thermal plant, pays for CO2 emissions
    GasFired,
    /// Kerosine turbojet, no emission cost
    TurboJet,
    /// Wind farm, output bounded by the wind availability of the period
    WindTurbine,
}

impl PlantType {
    pub fn is_renewable(self) -> bool {
        matches!(self, PlantType::WindTurbine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub efficiency: f64,
    /// Minimum output in MWh once the plant is committed
    pub pmin: f64,
    /// Capacity ceiling in MWh
    pub pmax: f64,
}

impl PowerPlant {
    pub fn new(name: impl Into<String>, plant_type: PlantType, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self {
            name: name.into(),
            plant_type,
            efficiency,
            pmin,
            pmax,
        }
    }
}
