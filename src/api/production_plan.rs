//! Production plan endpoint

use std::str::FromStr;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, extract::ValidatedJson},
    domain::{Fuels, PlantProduction, PlantType, PowerPlant, ProductionRequest},
    optimizer::DispatchError,
    state::AppState,
};

/// Body of `POST /productionplan`
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductionPlanPayload {
    /// Total load in MWh to be met by the plants
    #[validate(range(min = 0.0))]
    pub load: f64,
    #[validate(nested)]
    pub fuels: Fuels,
    #[validate(nested)]
    pub powerplants: Vec<PowerPlantPayload>,
}

/// Plant as sent by the caller. The type is kept as text here so an unknown
/// kind is reported as such instead of as a generic parse failure.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PowerPlantPayload {
    pub name: String,
    /// One of `gasfired`, `turbojet`, `windturbine`
    #[serde(rename = "type")]
    pub kind: String,
    #[validate(range(exclusive_min = 0.0))]
    pub efficiency: f64,
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub pmax: f64,
}

impl TryFrom<PowerPlantPayload> for PowerPlant {
    type Error = DispatchError;

    fn try_from(payload: PowerPlantPayload) -> Result<Self, Self::Error> {
        let Ok(plant_type) = PlantType::from_str(&payload.kind) else {
            return Err(DispatchError::UnknownPlantType {
                name: payload.name,
                kind: payload.kind,
            });
        };

        Ok(PowerPlant {
            name: payload.name,
            plant_type,
            efficiency: payload.efficiency,
            pmin: payload.pmin,
            pmax: payload.pmax,
        })
    }
}

impl TryFrom<ProductionPlanPayload> for ProductionRequest {
    type Error = DispatchError;

    fn try_from(payload: ProductionPlanPayload) -> Result<Self, Self::Error> {
        let powerplants = payload
            .powerplants
            .into_iter()
            .map(PowerPlant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductionRequest {
            load: payload.load,
            fuels: payload.fuels,
            powerplants,
        })
    }
}

/// POST /productionplan - Split the requested load across the plants at minimum cost
#[cfg_attr(
    feature = "swagger",
    utoipa::path(
        post,
        path = "/productionplan",
        request_body = ProductionPlanPayload,
        responses(
            (status = 200, description = "Production assigned to every plant, in request order", body = [PlantProduction]),
            (status = 400, description = "Invalid payload, unknown plant type or unreachable load", body = crate::api::error::ErrorResponse)
        ),
        tag = "productionplan"
    )
)]
pub async fn production_plan(
    State(st): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductionPlanPayload>,
) -> Result<Json<Vec<PlantProduction>>, ApiError> {
    let request = ProductionRequest::try_from(payload)?;

    let plan = st.planner.plan(&request).map_err(|e| {
        tracing::info!(error = %e, load = request.load, "Production plan rejected");
        e
    })?;

    Ok(Json(plan))
}
