use crate::input::{GlassType, HeatingType, InsulationType, Room, VentilationType};

/// Required wattage above which a single full-room system is worth zoning.
const ZONING_THRESHOLD_WATTS: u32 = 3000;

/// Evaluate the advisory rule list. Rules are independent (not mutually
/// exclusive), each appends at most one string, and insertion order is stable
/// across calls with identical input.
pub fn generate_recommendations(room: &Room, required_wattage: u32) -> Vec<String> {
    let mut recommendations = vec![];

    if room.heating_type == HeatingType::Spot {
        recommendations.push(
            "Spot heating works best within 1.5 m of the panel; aim the panel directly at the area to be heated."
                .to_string(),
        );
    }

    if room.insulation == InsulationType::Poor {
        recommendations
            .push("Consider improving insulation to reduce heating requirements.".to_string());
    }

    if room
        .windows
        .iter()
        .any(|window| window.glass_type == GlassType::Single)
    {
        recommendations.push(
            "Upgrade single-pane windows to double or triple glazing for better efficiency."
                .to_string(),
        );
    }

    if room.heating_type == HeatingType::Full && required_wattage > ZONING_THRESHOLD_WATTS {
        recommendations
            .push("Consider zoning the heating system for more efficient operation.".to_string());
    }

    if room.ventilation_type == VentilationType::None {
        recommendations.push(
            "A room without ventilation risks moisture build-up and condensation; provide at least trickle ventilation."
                .to_string(),
        );
    }

    if room.ventilation_type == VentilationType::None
        && room.insulation == InsulationType::Excellent
    {
        recommendations.push(
            "Install mechanical ventilation with heat recovery for optimal efficiency."
                .to_string(),
        );
    }

    recommendations
}
