use tracing::{debug, info};

use super::{DispatchError, MeritOrderDispatch};
use crate::domain::{PlantProduction, ProductionRequest};

/// Production assigned to each plant of a request, indexed by the plant's
/// position in `ProductionRequest::powerplants`. Plants the dispatch never
/// reached stay at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    production_mwh: Vec<f64>,
}

impl Allocation {
    pub fn zeroed(plants: usize) -> Self {
        Self {
            production_mwh: vec![0.0; plants],
        }
    }

    pub fn assign(&mut self, index: usize, mwh: f64) {
        self.production_mwh[index] = mwh;
    }

    pub fn get(&self, index: usize) -> f64 {
        self.production_mwh.get(index).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.production_mwh.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.production_mwh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.production_mwh.is_empty()
    }
}

pub trait DispatchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn dispatch(&self, request: &ProductionRequest) -> Result<Allocation, DispatchError>;
}

/// Runs a dispatch strategy and renders its allocation as the per-plant
/// production plan returned to callers.
pub struct ProductionPlanner {
    pub strategy: Box<dyn DispatchStrategy>,
}

impl Default for ProductionPlanner {
    fn default() -> Self {
        Self {
            strategy: Box::new(MeritOrderDispatch),
        }
    }
}

impl ProductionPlanner {
    pub fn new(strategy: Box<dyn DispatchStrategy>) -> Self {
        Self { strategy }
    }

    pub fn plan(&self, request: &ProductionRequest) -> Result<Vec<PlantProduction>, DispatchError> {
        debug!(
            strategy = self.strategy.name(),
            load = request.load,
            plants = request.powerplants.len(),
            "Computing production plan"
        );

        let allocation = self.strategy.dispatch(request)?;

        info!(
            load = request.load,
            produced = allocation.total(),
            "Production plan computed"
        );

        Ok(request
            .powerplants
            .iter()
            .enumerate()
            .map(|(index, plant)| PlantProduction {
                name: plant.name.clone(),
                p: round_to_tenth(allocation.get(index)),
            })
            .collect())
    }
}

/// Round the exact stored value to one decimal place, ties to the even digit.
///
/// Formatting works on the full binary expansion, so 0.35 (stored as
/// 0.34999...) stays at 0.3 instead of being pushed up by a multiply by ten.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
