use std::sync::Arc;

use crate::optimizer::ProductionPlanner;

/// Shared handler state. The planner is immutable, so requests never contend.
#[derive(Clone, Default)]
pub struct AppState {
    pub planner: Arc<ProductionPlanner>,
}

impl AppState {
    pub fn new(planner: ProductionPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
