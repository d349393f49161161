pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_YEAR: u32 = 365;
// Flat 30-day month used for the cost projection.
pub const DAYS_PER_MONTH: u32 = 30;

/// Commercial panels come in steps of roughly 100 W, so required wattage is
/// reported as a multiple of this.
pub const PANEL_SIZING_STEP_WATTS: u32 = 100;

/// Round a wattage up to the next multiple of `step`. Always rounds towards
/// more capacity so a room is never under-provisioned by rounding.
pub(crate) fn round_up_to_step(wattage: f64, step: u32) -> u32 {
    (wattage / step as f64).ceil() as u32 * step
}

/// Round a monetary amount to two decimal places.
pub(crate) fn round_currency(amount: f64) -> f64 {
    (amount * 100.).round() / 100.
}
