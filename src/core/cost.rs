use crate::core::coefficients::{ceiling_factor, floor_factor, wall_factor, GRID_CO2_KG_PER_KWH};
use crate::core::units::{round_currency, DAYS_PER_MONTH, DAYS_PER_YEAR, WATTS_PER_KILOWATT};
use crate::input::{CalculationMode, GlassType, InsulationType, Room, VentilationType};
use serde::{Deserialize, Serialize};

/// Projected electricity cost of running the panels, derived purely from the
/// required wattage, a price and an assumed daily usage duration. Amounts are
/// rounded to two decimal places, currency style.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CostEstimate {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Informational environmental figures; not a life-cycle assessment.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnvironmentalImpact {
    /// Yearly CO₂ attributable to the heating at grid carbon intensity, in kg.
    pub co2_savings_kg_per_year: f64,
    pub energy_efficiency: EfficiencyRating,
}

/// Ordinal efficiency grade, best first. Simple mode grades down to D only;
/// advanced mode uses the full scale.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize, strum::Display,
)]
pub enum EfficiencyRating {
    #[serde(rename = "A+++")]
    #[strum(serialize = "A+++")]
    APlusPlusPlus,
    #[serde(rename = "A++")]
    #[strum(serialize = "A++")]
    APlusPlus,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EfficiencyRating {
    const SCALE: [EfficiencyRating; 9] = [
        EfficiencyRating::APlusPlusPlus,
        EfficiencyRating::APlusPlus,
        EfficiencyRating::APlus,
        EfficiencyRating::A,
        EfficiencyRating::B,
        EfficiencyRating::C,
        EfficiencyRating::D,
        EfficiencyRating::E,
        EfficiencyRating::F,
    ];

    fn from_index(index: i32) -> Self {
        Self::SCALE[index.clamp(0, Self::SCALE.len() as i32 - 1) as usize]
    }

    fn index(self) -> i32 {
        Self::SCALE
            .iter()
            .position(|rating| *rating == self)
            .expect("rating is part of its own scale") as i32
    }
}

/// Daily electricity consumption at the assumed usage duration, in kWh.
pub fn daily_energy_kwh(required_wattage: u32, daily_usage_hours: f64) -> f64 {
    required_wattage as f64 / WATTS_PER_KILOWATT as f64 * daily_usage_hours
}

pub(crate) fn project_costs(
    required_wattage: u32,
    price_eur_per_kwh: f64,
    daily_usage_hours: f64,
) -> CostEstimate {
    let daily_kwh = daily_energy_kwh(required_wattage, daily_usage_hours);
    let daily = daily_kwh * price_eur_per_kwh;
    CostEstimate {
        daily: round_currency(daily),
        monthly: round_currency(daily * DAYS_PER_MONTH as f64),
        yearly: round_currency(daily * DAYS_PER_YEAR as f64),
    }
}

pub(crate) fn environmental_impact(
    required_wattage: u32,
    daily_usage_hours: f64,
    room: &Room,
    mode: CalculationMode,
) -> EnvironmentalImpact {
    let yearly_kwh = daily_energy_kwh(required_wattage, daily_usage_hours) * DAYS_PER_YEAR as f64;
    EnvironmentalImpact {
        co2_savings_kg_per_year: round_currency(yearly_kwh * GRID_CO2_KG_PER_KWH),
        energy_efficiency: efficiency_rating(required_wattage, room, mode),
    }
}

/// Grade the wattage density (W/m³) against fixed thresholds. In advanced
/// mode the density grade is refined by quality points accumulated over
/// insulation, ventilation, materials and glazing, over an extended scale.
/// Purely presentational; never fed back into the wattage calculation.
pub(crate) fn efficiency_rating(
    required_wattage: u32,
    room: &Room,
    mode: CalculationMode,
) -> EfficiencyRating {
    let density = required_wattage as f64 / room.volume();
    let density_grade = match density {
        density if density <= 25. => EfficiencyRating::APlusPlusPlus,
        density if density <= 30. => EfficiencyRating::APlusPlus,
        density if density <= 35. => EfficiencyRating::APlus,
        density if density <= 40. => EfficiencyRating::A,
        density if density <= 45. => EfficiencyRating::B,
        density if density <= 50. => EfficiencyRating::C,
        _ => EfficiencyRating::D,
    };

    match mode {
        CalculationMode::Simple => density_grade,
        CalculationMode::Advanced => {
            EfficiencyRating::from_index(density_grade.index() + quality_points(room))
        }
    }
}

/// Point shift over the rating scale: negative points improve the grade,
/// positive points worsen it.
fn quality_points(room: &Room) -> i32 {
    let mut points = 0;

    points += match room.insulation {
        InsulationType::Excellent => -1,
        InsulationType::Poor => 1,
        _ => 0,
    };

    points += match room.ventilation_type {
        VentilationType::Balanced => -1,
        VentilationType::None => 1,
        _ => 0,
    };

    let material_mean =
        (wall_factor(room.wall_type) + ceiling_factor(room.ceiling_type) + floor_factor(room.floor_type)) / 3.;
    if material_mean <= 0.95 {
        points -= 1;
    } else if material_mean >= 1.1 {
        points += 1;
    }

    if room
        .windows
        .iter()
        .any(|window| window.glass_type == GlassType::Single)
    {
        points += 1;
    } else if !room.windows.is_empty()
        && room.windows.iter().all(|window| {
            matches!(
                window.glass_type,
                GlassType::HrPlusPlus | GlassType::Triple
            )
        })
    {
        points -= 1;
    }

    points
}
