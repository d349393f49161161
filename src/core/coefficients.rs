use crate::input::{
    AdjacencyKind, CeilingType, FloorType, GlassType, InsulationType, RoomType, VentilationType,
    WallType, WindowOrientation,
};

/// This module holds the coefficient tables of the estimation model. All
/// lookups are exhaustive matches over closed enums, so an unrecognised value
/// is a compile-time error rather than a runtime miss. Values are
/// representative midpoints for Dutch residential construction and are not a
/// substitute for a full thermal simulation.

/// Base heating density in W/m³, keyed by room type and insulation grade.
/// Loss grows as insulation worsens; bathrooms run hotter than bedrooms.
pub(crate) fn base_watts_per_cubic_metre(
    room_type: RoomType,
    insulation: InsulationType,
) -> f64 {
    let insulation_base = match insulation {
        InsulationType::Poor => 45.,
        InsulationType::Average => 35.,
        InsulationType::Good => 30.,
        InsulationType::Excellent => 25.,
    };
    let room_type_factor = match room_type {
        RoomType::Living => 1.0,
        RoomType::Bedroom => 0.95,
        RoomType::Bathroom => 1.15,
        RoomType::Kitchen => 0.95,
        RoomType::Office => 1.0,
        RoomType::Other => 1.0,
    };
    insulation_base * room_type_factor
}

/// Relative heat loss of a glazing grade against double glass as the
/// reference. Monotonically decreasing with glazing quality.
pub(crate) fn glass_factor(glass_type: GlassType) -> f64 {
    match glass_type {
        GlassType::Single => 1.2,
        GlassType::Double => 1.0,
        GlassType::Hr => 0.9,
        GlassType::HrPlus => 0.8,
        GlassType::HrPlusPlus => 0.7,
        GlassType::Triple => 0.6,
    }
}

/// Solar-gain based orientation correction: north-facing windows gain no sun
/// and lose most, south-facing gain most.
pub(crate) fn orientation_factor(orientation: WindowOrientation) -> f64 {
    match orientation {
        WindowOrientation::North => 1.1,
        WindowOrientation::East => 1.05,
        WindowOrientation::South => 1.0,
        WindowOrientation::West => 1.05,
    }
}

/// Fractional loss reduction for windows with blinds or other screening.
pub(crate) const BLINDS_FACTOR: f64 = 0.85;

pub(crate) fn wall_factor(wall_type: WallType) -> f64 {
    match wall_type {
        WallType::Brick => 1.0,
        WallType::Concrete => 1.1,
        WallType::Wood => 0.9,
        WallType::Steel => 1.2,
    }
}

pub(crate) fn ceiling_factor(ceiling_type: CeilingType) -> f64 {
    match ceiling_type {
        CeilingType::Concrete => 1.1,
        CeilingType::Wood => 0.9,
        CeilingType::Insulated => 0.85,
        CeilingType::Uninsulated => 1.2,
    }
}

pub(crate) fn floor_factor(floor_type: FloorType) -> f64 {
    match floor_type {
        FloorType::Concrete => 1.1,
        FloorType::Wood => 0.9,
        FloorType::Tile => 1.05,
        FloorType::Carpet => 0.95,
    }
}

/// Ventilation loss multiplier. "None" is the worst case - stagnant rooms
/// need flagging as a moisture risk in the recommendations, not treating as
/// efficient.
pub(crate) fn ventilation_factor(ventilation_type: VentilationType) -> f64 {
    match ventilation_type {
        VentilationType::Natural => 1.0,
        VentilationType::Mechanical => 0.95,
        VentilationType::Balanced => 0.9,
        VentilationType::None => 1.1,
    }
}

/// Loss multiplier for one boundary direction: a heated neighbour reduces
/// loss through that surface, the outdoors increases it.
pub(crate) fn adjacency_factor(kind: AdjacencyKind) -> f64 {
    match kind {
        AdjacencyKind::Heated => 0.85,
        AdjacencyKind::Unheated => 1.0,
        AdjacencyKind::Outside => 1.2,
    }
}

/// Demand uplift per occupant at full-day presence.
pub(crate) const OCCUPANCY_FACTOR_PER_PERSON: f64 = 0.1;

/// Grid carbon intensity, in kg CO₂ per kWh.
pub(crate) const GRID_CO2_KG_PER_KWH: f64 = 0.4;
