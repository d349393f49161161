use crate::core::coefficients::{
    adjacency_factor, base_watts_per_cubic_metre, ceiling_factor, floor_factor, glass_factor,
    orientation_factor, ventilation_factor, wall_factor, BLINDS_FACTOR,
    OCCUPANCY_FACTOR_PER_PERSON,
};
use crate::core::cost::{environmental_impact, project_costs, CostEstimate, EnvironmentalImpact};
use crate::core::panels::suggest_panels;
use crate::core::recommendations::generate_recommendations;
use crate::core::units::{round_up_to_step, HOURS_PER_DAY, PANEL_SIZING_STEP_WATTS};
use crate::errors::CalculationError;
use crate::input::{CalculationMode, HeatingType, Occupancy, Room};
use crate::price::CURRENT_ELECTRICITY_PRICE_EUR_PER_KWH;
use serde::{Deserialize, Serialize};

/// This module implements the heating estimation pipeline: a pure,
/// deterministic mapping from a validated room description to a calculation
/// result. No I/O, no shared state; safe to invoke concurrently.

/// Assumed panel runtime per day when the caller does not say otherwise.
pub const DEFAULT_DAILY_USAGE_HOURS: f64 = 8.;

/// Caller-supplied context for the cost projection. The estimator has no
/// opinion on the freshness of the price; sourcing it is the caller's
/// concern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateParams {
    pub price_eur_per_kwh: f64,
    pub daily_usage_hours: f64,
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self {
            price_eur_per_kwh: CURRENT_ELECTRICITY_PRICE_EUR_PER_KWH,
            daily_usage_hours: DEFAULT_DAILY_USAGE_HOURS,
        }
    }
}

/// The estimator's output. Immutable once produced; rendered and optionally
/// exported, never persisted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Required panel capacity in watts, rounded up to a multiple of 100.
    pub required_wattage: u32,
    pub cost_estimate: CostEstimate,
    pub environmental_impact: EnvironmentalImpact,
    pub panel_suggestions: Vec<String>,
    /// Advisory strings in stable rule order. Presentation-facing only.
    pub recommendations: Vec<String>,
}

/// Estimate the heating requirement for a room.
///
/// Arguments:
/// * `room` - the estimation subject
/// * `mode` - whether to apply the advanced refinement factors
/// * `params` - electricity price and assumed daily usage
pub fn estimate(
    room: &Room,
    mode: CalculationMode,
    params: &EstimateParams,
) -> Result<CalculationResult, CalculationError> {
    room.validate_for(mode)?;

    let wattage = required_wattage_unrounded(room, mode)?;
    let required_wattage = round_up_to_step(wattage, PANEL_SIZING_STEP_WATTS);
    tracing::debug!(
        unrounded = wattage,
        required_wattage,
        %mode,
        "derived heating requirement"
    );

    Ok(CalculationResult {
        required_wattage,
        cost_estimate: project_costs(
            required_wattage,
            params.price_eur_per_kwh,
            params.daily_usage_hours,
        ),
        environmental_impact: environmental_impact(
            required_wattage,
            params.daily_usage_hours,
            room,
            mode,
        ),
        panel_suggestions: suggest_panels(required_wattage),
        recommendations: generate_recommendations(room, required_wattage),
    })
}

/// The wattage before rounding to panel sizes. Expects a validated room.
///
/// Refinement factors are applied in a fixed order for reproducibility:
/// window uplift, materials, ventilation, adjacent spaces, occupancy, then
/// the spot-heating scale-down.
pub(crate) fn required_wattage_unrounded(
    room: &Room,
    mode: CalculationMode,
) -> Result<f64, CalculationError> {
    let mut wattage =
        room.volume() * base_watts_per_cubic_metre(room.room_type, room.insulation);

    if mode == CalculationMode::Advanced {
        wattage *= 1. + window_loss_percentage(room) / 100.;
        wattage *= material_factor(room);
        wattage *= ventilation_factor(room.ventilation_type);
        wattage *= adjacency_factor_mean(room);
        wattage *= occupancy_factor(room.occupancy.as_ref());
    }

    // Spot heating targets a fraction of the room, not the whole volume.
    if room.heating_type == HeatingType::Spot {
        let percentage = room.spot_percentage.ok_or_else(|| {
            CalculationError::CalculationFailure(
                "spot percentage missing after validation".to_string(),
            )
        })?;
        wattage *= percentage / 100.;
    }

    // Largest value that still rounds up to a representable multiple of the
    // panel sizing step.
    const MAX_REPRESENTABLE_WATTAGE: f64 =
        (u32::MAX / PANEL_SIZING_STEP_WATTS * PANEL_SIZING_STEP_WATTS) as f64;
    if !wattage.is_finite() || wattage > MAX_REPRESENTABLE_WATTAGE {
        return Err(CalculationError::CalculationFailure(format!(
            "unrepresentable wattage {wattage} for room of volume {}",
            room.volume()
        )));
    }

    Ok(wattage)
}

/// Window heat loss as a percentage-of-floor-area uplift. Each window group
/// contributes `area × glass × orientation × blinds` independently; the sum
/// is taken relative to the floor area. (The additive-wattage treatment seen
/// elsewhere is not used here.)
fn window_loss_percentage(room: &Room) -> f64 {
    let loss: f64 = room
        .windows
        .iter()
        .map(|window| {
            window.area()
                * glass_factor(window.glass_type)
                * orientation_factor(window.orientation)
                * if window.has_blinds { BLINDS_FACTOR } else { 1.0 }
        })
        .sum();
    loss / room.floor_area() * 100.
}

/// Arithmetic mean of the wall, ceiling and floor coefficients. The mean is
/// used rather than the product to keep a single extreme surface from
/// dominating.
fn material_factor(room: &Room) -> f64 {
    (wall_factor(room.wall_type)
        + ceiling_factor(room.ceiling_type)
        + floor_factor(room.floor_type))
        / 3.
}

fn adjacency_factor_mean(room: &Room) -> f64 {
    let kinds = room.adjacent_spaces.kinds();
    kinds.iter().map(|kind| adjacency_factor(*kind)).sum::<f64>() / kinds.len() as f64
}

fn occupancy_factor(occupancy: Option<&Occupancy>) -> f64 {
    match occupancy {
        Some(occupancy) => {
            1. + occupancy.number_of_people
                * OCCUPANCY_FACTOR_PER_PERSON
                * (occupancy.hours_per_day / HOURS_PER_DAY as f64)
        }
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        AdjacencyKind, AdjacentSpaces, CeilingType, FloorType, GlassType, InsulationType, RoomType,
        VentilationType, WallType, Window, WindowOrientation,
    };
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn living_room() -> Room {
        Room {
            length: 6.,
            width: 4.,
            height: 2.6,
            room_type: RoomType::Living,
            insulation: InsulationType::Average,
            heating_type: HeatingType::Full,
            spot_percentage: None,
            windows: vec![],
            wall_type: WallType::Brick,
            ceiling_type: CeilingType::Concrete,
            floor_type: FloorType::Concrete,
            ventilation_type: VentilationType::Natural,
            adjacent_spaces: AdjacentSpaces::uniform(AdjacencyKind::Heated),
            occupancy: None,
        }
    }

    fn south_window(quantity: u32) -> Window {
        Window {
            width: 1.2,
            height: 1.4,
            quantity,
            glass_type: GlassType::HrPlusPlus,
            orientation: WindowOrientation::South,
            has_blinds: true,
        }
    }

    #[rstest]
    fn simple_scenario_matches_reference_figures(living_room: Room) {
        // 62.4 m³ at 35 W/m³ gives 2184 W before rounding.
        let unrounded =
            required_wattage_unrounded(&living_room, CalculationMode::Simple).unwrap();
        assert_relative_eq!(unrounded, 2184., max_relative = 1e-9);

        let result = estimate(
            &living_room,
            CalculationMode::Simple,
            &EstimateParams::default(),
        )
        .unwrap();
        assert_eq!(result.required_wattage, 2200);
    }

    #[rstest]
    fn worse_insulation_strictly_increases_wattage(living_room: Room) {
        let grades = [
            InsulationType::Excellent,
            InsulationType::Good,
            InsulationType::Average,
            InsulationType::Poor,
        ];
        for mode in [CalculationMode::Simple, CalculationMode::Advanced] {
            let wattages: Vec<f64> = grades
                .iter()
                .map(|grade| {
                    let mut room = living_room.clone();
                    room.insulation = *grade;
                    required_wattage_unrounded(&room, mode).unwrap()
                })
                .collect();
            for pair in wattages.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[rstest]
    fn larger_volume_strictly_increases_wattage(living_room: Room) {
        let smaller = required_wattage_unrounded(&living_room, CalculationMode::Advanced).unwrap();
        let mut bigger_room = living_room;
        bigger_room.height = 3.;
        let bigger = required_wattage_unrounded(&bigger_room, CalculationMode::Advanced).unwrap();
        assert!(smaller < bigger);
    }

    #[rstest]
    fn wattage_is_always_a_multiple_of_100(living_room: Room) {
        for (height, insulation, mode) in [
            (2.2, InsulationType::Poor, CalculationMode::Simple),
            (2.6, InsulationType::Average, CalculationMode::Advanced),
            (3.1, InsulationType::Excellent, CalculationMode::Advanced),
        ] {
            let mut room = living_room.clone();
            room.height = height;
            room.insulation = insulation;
            room.windows = vec![south_window(1)];
            let result = estimate(&room, mode, &EstimateParams::default()).unwrap();
            assert_eq!(result.required_wattage % 100, 0);
        }
    }

    #[rstest]
    fn spot_heating_scales_linearly(living_room: Room) {
        let mut room = living_room;
        room.heating_type = HeatingType::Spot;
        room.spot_percentage = Some(100.);
        let full = required_wattage_unrounded(&room, CalculationMode::Advanced).unwrap();
        room.spot_percentage = Some(50.);
        let half = required_wattage_unrounded(&room, CalculationMode::Advanced).unwrap();
        assert_relative_eq!(half, full / 2., max_relative = 1e-9);
    }

    #[rstest]
    fn quarter_spot_heating_of_a_2400_watt_room() {
        // 8 × 5 × 2 m at 30 W/m³ gives exactly 2400 W for full heating.
        let room = Room {
            length: 8.,
            width: 5.,
            height: 2.,
            insulation: InsulationType::Good,
            heating_type: HeatingType::Spot,
            spot_percentage: Some(25.),
            ..living_room()
        };
        let unrounded = required_wattage_unrounded(&room, CalculationMode::Simple).unwrap();
        assert_relative_eq!(unrounded, 600., max_relative = 1e-9);
        let result =
            estimate(&room, CalculationMode::Simple, &EstimateParams::default()).unwrap();
        assert_eq!(result.required_wattage, 600);
    }

    #[rstest]
    fn grouped_windows_equal_repeated_windows(living_room: Room) {
        let mut grouped = living_room.clone();
        grouped.windows = vec![south_window(2)];
        let mut repeated = living_room;
        repeated.windows = vec![south_window(1), south_window(1)];
        let params = EstimateParams::default();
        assert_eq!(
            estimate(&grouped, CalculationMode::Advanced, &params).unwrap(),
            estimate(&repeated, CalculationMode::Advanced, &params).unwrap(),
        );
    }

    #[rstest]
    fn advanced_factors_apply_in_documented_order(living_room: Room) {
        let mut room = living_room;
        room.windows = vec![south_window(2)];
        let window_uplift = 1. + (2. * 1.2 * 1.4 * 0.7 * 1.0 * 0.85) / 24.;
        let material_mean = (1.0 + 1.1 + 1.1) / 3.;
        let adjacency_mean = 0.85;
        let expected = 62.4 * 35. * window_uplift * material_mean * 1.0 * adjacency_mean;
        let unrounded = required_wattage_unrounded(&room, CalculationMode::Advanced).unwrap();
        assert_relative_eq!(unrounded, expected, max_relative = 1e-9);
    }

    #[rstest]
    fn occupancy_applies_a_small_uplift(living_room: Room) {
        let mut room = living_room;
        room.occupancy = Some(Occupancy {
            number_of_people: 2.,
            hours_per_day: 12.,
        });
        let without = 62.4 * 35. * ((1.0 + 1.1 + 1.1) / 3.) * 0.85;
        let unrounded = required_wattage_unrounded(&room, CalculationMode::Advanced).unwrap();
        assert_relative_eq!(unrounded, without * 1.1, max_relative = 1e-9);
    }

    #[rstest]
    fn estimation_is_idempotent(living_room: Room) {
        let mut room = living_room;
        room.windows = vec![south_window(1)];
        room.occupancy = Some(Occupancy {
            number_of_people: 2.2,
            hours_per_day: 14.,
        });
        let params = EstimateParams::default();
        let first = estimate(&room, CalculationMode::Advanced, &params).unwrap();
        let second = estimate(&room, CalculationMode::Advanced, &params).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    fn negative_occupancy_is_rejected_not_computed(living_room: Room) {
        let mut room = living_room;
        room.occupancy = Some(Occupancy {
            number_of_people: -100.,
            hours_per_day: 14.,
        });
        let error = estimate(&room, CalculationMode::Advanced, &EstimateParams::default())
            .unwrap_err();
        assert!(matches!(error, CalculationError::InvalidOccupancy { .. }));
    }

    #[rstest]
    fn absurdly_large_rooms_fail_cleanly_instead_of_overflowing(living_room: Room) {
        let mut room = living_room;
        room.length = 1e6;
        room.width = 1e6;
        room.height = 1e4;
        let error = estimate(&room, CalculationMode::Simple, &EstimateParams::default())
            .unwrap_err();
        assert!(matches!(error, CalculationError::CalculationFailure(_)));
    }

    #[rstest]
    fn validation_failure_produces_no_result(living_room: Room) {
        let mut room = living_room;
        room.width = -1.;
        assert!(estimate(
            &room,
            CalculationMode::Simple,
            &EstimateParams::default()
        )
        .is_err());
    }
}
