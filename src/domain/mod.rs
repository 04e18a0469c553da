pub mod fuels;
pub mod plant;

pub use fuels::*;
pub use plant::*;

use serde::{Deserialize, Serialize};

/// A single dispatch problem: the load to meet, the prices in effect and the
/// plants available to meet it, in the order the caller listed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    /// Requested load in MWh
    pub load: f64,
    pub fuels: Fuels,
    pub powerplants: Vec<PowerPlant>,
}

/// Assigned production for one plant, as reported back to the caller.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantProduction {
    pub name: String,
    /// Production in MWh, rounded to the nearest 0.1 MWh
    pub p: f64,
}
