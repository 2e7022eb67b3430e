use thiserror::Error;

/// An error raised while encoding an event payload for emission.
///
/// This error is recovered locally at the call site: the failure is
/// logged, the emission for that request is abandoned, and the HTTP
/// response is unaffected.
///
/// # Design
/// - Transport-agnostic (no HTTP or stream dependency)
/// - Wraps the underlying encoder error as its source
#[derive(Debug, Error)]
#[error("cannot encode event: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<i64>("not-a-number").expect_err("parse should fail")
    }

    #[test]
    fn display_format_is_correct() {
        let err = EncodeError::from(json_error());

        assert!(err.to_string().starts_with("cannot encode event: "));
    }

    #[test]
    fn source_is_the_underlying_encoder_error() {
        let err = EncodeError::from(json_error());

        assert!(err.source().is_some());
    }

    #[test]
    fn debug_output_contains_struct_name() {
        let err = EncodeError::from(json_error());
        let debug = format!("{:?}", err);

        assert!(debug.contains("EncodeError"));
    }
}
