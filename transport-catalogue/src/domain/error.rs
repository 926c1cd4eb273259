//! Catalogue error types.
//!
//! These errors represent misuse of the load pipeline. Missing stops and
//! buses during queries are not errors; lookups return `Option` instead.

/// Precondition violations while loading or freezing the catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop name was referenced before the stop was added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Two stops are adjacent on a route but no road distance links them
    #[error("no road distance recorded between {from} and {to}")]
    MissingDistance { from: String, to: String },

    /// A road distance was negative or not a number
    #[error("invalid road distance {meters} from {from} to {to}")]
    InvalidDistance { from: String, to: String, meters: f64 },

    /// Mutation attempted after `set_buses_info`
    #[error("catalogue is frozen: derived statistics already computed")]
    Frozen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::UnknownStop("Biryulyovo".into());
        assert_eq!(err.to_string(), "unknown stop: Biryulyovo");

        let err = CatalogueError::MissingDistance {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "no road distance recorded between A and B");

        let err = CatalogueError::InvalidDistance {
            from: "A".into(),
            to: "B".into(),
            meters: -1.0,
        };
        assert_eq!(err.to_string(), "invalid road distance -1 from A to B");

        let err = CatalogueError::Frozen;
        assert_eq!(
            err.to_string(),
            "catalogue is frozen: derived statistics already computed"
        );
    }
}
