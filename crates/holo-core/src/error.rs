use thiserror::Error;

/// Initialization failures. The page markup is expected to provide every
/// element below; their absence is a defect in the page, not a runtime state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HoloError {
    #[error("missing required element: {what}")]
    MissingElement { what: &'static str },

    #[error("document has no body")]
    MissingBody,
}

impl HoloError {
    pub fn missing(what: &'static str) -> Self {
        HoloError::MissingElement { what }
    }
}
