pub mod core;
pub mod errors;
pub mod input;
pub mod output;
pub mod price;
pub mod report;

pub use crate::core::estimator::{estimate, CalculationResult, EstimateParams};
pub use crate::errors::CalculationError;
pub use crate::input::{CalculationMode, Room, Window};
pub use crate::output::Output;

use crate::core::estimator::DEFAULT_DAILY_USAGE_HOURS;
use crate::input::room_from_json;
use crate::price::{CachedPriceSource, StaticPriceSource};
use std::io::Read;

/// Run a full calculation: read a JSON room description, estimate the
/// heating requirement, and write the text report to the given output.
///
/// Arguments:
/// * `input` - JSON room description
/// * `output` - where the text report goes (use a sink to skip it)
/// * `mode` - simple or advanced calculation
/// * `price_eur_per_kwh` - electricity price override; when absent the price
///   collaborator supplies one
pub fn run_calculation(
    input: impl Read,
    output: impl Output,
    mode: CalculationMode,
    price_eur_per_kwh: Option<f64>,
) -> Result<CalculationResult, anyhow::Error> {
    let room = room_from_json(input)?;

    let price_eur_per_kwh = price_eur_per_kwh.unwrap_or_else(|| {
        CachedPriceSource::new(StaticPriceSource::default())
            .current()
            .price_eur_per_kwh
    });
    let params = EstimateParams {
        price_eur_per_kwh,
        daily_usage_hours: DEFAULT_DAILY_USAGE_HOURS,
    };
    tracing::info!(
        volume = room.volume(),
        price_eur_per_kwh,
        %mode,
        "running heating calculation"
    );

    let result = estimate(&room, mode, &params)?;
    report::write_report(output, &room, &result)?;

    Ok(result)
}
