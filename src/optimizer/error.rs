use thiserror::Error;

/// Reasons a production plan cannot be produced. Any of these aborts the whole
/// request; no partial plan is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Unknown power plant type '{kind}' for plant '{name}'")]
    UnknownPlantType { name: String, kind: String },

    #[error("Load could not be met with available plants ({remaining:.1} of {load:.1} MWh unmet)")]
    LoadInfeasible { load: f64, remaining: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DispatchError::LoadInfeasible {
            load: 999.0,
            remaining: 809.0,
        };
        assert_eq!(
            error.to_string(),
            "Load could not be met with available plants (809.0 of 999.0 MWh unmet)"
        );

        let error = DispatchError::UnknownPlantType {
            name: "reactor1".to_string(),
            kind: "nuclear".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown power plant type 'nuclear' for plant 'reactor1'");
    }
}
