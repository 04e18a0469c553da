use crate::domain::{Fuels, PlantType, PowerPlant};

/// Tons of CO2 emitted per MWh produced by a gas-fired plant.
pub const CO2_TONS_PER_MWH: f64 = 0.3;

/// Marginal cost in euro of producing one more MWh with `plant` at the given
/// prices. Only used to rank plants, never billed.
///
/// Efficiency must be strictly positive; the request validation guarantees it.
pub fn marginal_cost(plant: &PowerPlant, fuels: &Fuels) -> f64 {
    match plant.plant_type {
        PlantType::WindTurbine => 0.0,
        PlantType::GasFired => {
            let fuel_cost = fuels.gas_euro_per_mwh / plant.efficiency;
            let co2_cost = CO2_TONS_PER_MWH * fuels.co2_euro_per_ton;
            fuel_cost + co2_cost
        }
        PlantType::TurboJet => fuels.kerosine_euro_per_mwh / plant.efficiency,
    }
}
