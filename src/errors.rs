use thiserror::Error;

/// Failure modes of the heating calculation. Validation errors carry enough
/// detail for a caller to highlight the offending field; none of them are
/// retryable as the calculation is deterministic.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Room dimension '{field}' must be greater than zero (was {value})")]
    InvalidDimension { field: DimensionField, value: f64 },
    #[error("Spot heating requires a spot percentage between 1 and 100 (was {})", display_option(.0))]
    InvalidSpotPercentage(Option<f64>),
    #[error("Window {index}: {problem}")]
    InvalidWindow {
        /// Position of the window in the room's window list.
        index: usize,
        problem: WindowProblem,
    },
    #[error("Occupancy field '{field}' is out of range (was {value})")]
    InvalidOccupancy { field: OccupancyField, value: f64 },
    /// An internal inconsistency that should not occur for a validated room,
    /// e.g. a non-finite intermediate value. Handled rather than silently
    /// defaulted.
    #[error("Error identified during heating calculation: {0}")]
    CalculationFailure(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DimensionField {
    Length,
    Width,
    Height,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum OccupancyField {
    NumberOfPeople,
    HoursPerDay,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum WindowProblem {
    #[error("width must be greater than zero (was {0})")]
    NonPositiveWidth(f64),
    #[error("height must be greater than zero (was {0})")]
    NonPositiveHeight(f64),
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

fn display_option(value: &Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "not provided".to_string(),
    }
}
