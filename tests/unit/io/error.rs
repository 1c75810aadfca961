//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use wavetile::io::error::{invalid_configuration, invalid_parameter};
    use wavetile::spatial::Position;
    use wavetile::{ContradictionError, WfcError};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = WfcError::FileSystem {
            path: "/tmp/constraints.toml".into(),
            operation: "read constraints",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read constraints"));
        assert!(error.to_string().contains("/tmp/constraints.toml"));
    }

    // Tests contradictions keep their position and stay identifiable
    // Verified by mapping contradictions to InvalidParameter
    #[test]
    fn test_contradiction_error() {
        let contradiction = ContradictionError {
            position: Position::new(4, 2),
        };
        let error = WfcError::from(contradiction);

        assert!(error.is_contradiction());
        assert!(error.source().is_some());
        assert!(error.to_string().contains("(4, 2)"));
        assert!(contradiction.to_string().contains("contradiction"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
        assert!(!error.is_contradiction());
        assert!(error.source().is_none());
    }

    // Tests configuration errors carry their reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_configuration_error() {
        let error = invalid_configuration(&"rule table defines no tiles");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: rule table defines no tiles"
        );
    }

    // Tests incomplete grid message reports progress
    // Verified by swapping collapsed and total
    #[test]
    fn test_incomplete_grid_error() {
        let error = WfcError::IncompleteGrid {
            collapsed: 3,
            total: 9,
        };
        assert!(error.to_string().contains("3 of 9"));
    }
}
