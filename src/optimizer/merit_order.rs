use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::trace;

use super::{marginal_cost, Allocation, DispatchError, DispatchStrategy};
use crate::domain::{Fuels, PlantType, PowerPlant, ProductionRequest};

/// A plant paired with its marginal cost, alive only while ranking.
#[derive(Debug, Clone, Copy)]
pub struct CostedPlant<'a> {
    /// Position of the plant in the request
    pub index: usize,
    pub plant: &'a PowerPlant,
    pub cost: f64,
}

/// Rank plants by ascending marginal cost. The sort is stable: plants with equal
/// cost keep the order in which they were listed.
pub fn merit_order<'a>(fuels: &Fuels, plants: &'a [PowerPlant]) -> Vec<CostedPlant<'a>> {
    plants
        .iter()
        .enumerate()
        .map(|(index, plant)| CostedPlant {
            index,
            plant,
            cost: marginal_cost(plant, fuels),
        })
        .sorted_by_key(|costed| OrderedFloat(costed.cost))
        .collect()
}

/// Single-pass greedy dispatch along the merit order.
///
/// Every plant is loaded as far as its envelope allows before the next one is
/// considered. A thermal plant that gets committed always runs at least at its
/// `pmin`, even when that produces more than the remaining need; the overshoot
/// is accepted as is. Only an unmet remainder after the walk is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeritOrderDispatch;

impl DispatchStrategy for MeritOrderDispatch {
    fn name(&self) -> &'static str {
        "merit-order"
    }

    fn dispatch(&self, request: &ProductionRequest) -> Result<Allocation, DispatchError> {
        let mut allocation = Allocation::zeroed(request.powerplants.len());

        if request.load == 0.0 {
            return Ok(allocation);
        }

        let wind_fraction = request.fuels.wind_fraction();
        let mut remaining = request.load;

        for costed in merit_order(&request.fuels, &request.powerplants) {
            let plant = costed.plant;

            let taken = match plant.plant_type {
                PlantType::WindTurbine if wind_fraction == 0.0 => continue,
                PlantType::WindTurbine => (plant.pmax * wind_fraction).min(remaining),
                PlantType::GasFired | PlantType::TurboJet => plant.pmax.min(remaining).max(plant.pmin),
            };

            remaining -= taken;
            allocation.assign(costed.index, taken);

            trace!(
                plant = %plant.name,
                cost = costed.cost,
                taken,
                remaining,
                "Dispatched plant"
            );

            if remaining <= 0.0 {
                break;
            }
        }

        if remaining > 0.0 {
            return Err(DispatchError::LoadInfeasible {
                load: request.load,
                remaining,
            });
        }

        Ok(allocation)
    }
}
