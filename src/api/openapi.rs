use utoipa::OpenApi;

use crate::api::{
    error::ErrorResponse,
    production_plan::{PowerPlantPayload, ProductionPlanPayload},
};
use crate::domain::{Fuels, PlantProduction};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "powerplant-coding-challenge",
        description = "Calculates the power production plan for a given electrical load. \
            Takes into account the technical specifications of each power plant, \
            the cost of the fuels and the CO2 emission cost. The result specifies \
            how much power each plant should produce to meet the demand at the \
            lowest possible cost."
    ),
    paths(crate::api::production_plan::production_plan),
    components(
        schemas(ProductionPlanPayload, PowerPlantPayload, Fuels, PlantProduction, ErrorResponse)
    ),
    tags((name = "productionplan", description = "Merit-order production planning"))
)]
pub struct ApiDoc;
