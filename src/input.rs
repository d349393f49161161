use crate::errors::{CalculationError, DimensionField, OccupancyField, WindowProblem};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::io::{BufReader, Read};

/// Read a room description from a JSON document, enforcing the declared
/// field bounds.
pub fn room_from_json(json: impl Read) -> Result<Room, anyhow::Error> {
    let room: Room = serde_json::from_reader(BufReader::new(json))?;
    room.validate()
        .map_err(|error| anyhow::anyhow!("{error}"))
        .context("invalid room description")?;
    Ok(room)
}

/// The estimation subject: one room, described by its geometry, construction
/// and usage. Constructed transiently from user input, validated, passed once
/// to the estimator and discarded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Room {
    /// Length in metres.
    pub length: f64,
    /// Width in metres.
    pub width: f64,
    /// Ceiling height in metres.
    pub height: f64,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub insulation: InsulationType,
    pub heating_type: HeatingType,
    /// Fraction of the room targeted by spot heating, in percent. Required
    /// and meaningful only when `heating_type` is `Spot`.
    #[serde(default)]
    #[validate(minimum = 1.)]
    #[validate(maximum = 100.)]
    pub spot_percentage: Option<f64>,
    #[serde(default)]
    pub windows: Vec<Window>,
    pub wall_type: WallType,
    pub ceiling_type: CeilingType,
    pub floor_type: FloorType,
    pub ventilation_type: VentilationType,
    pub adjacent_spaces: AdjacentSpaces,
    #[serde(default)]
    #[validate]
    pub occupancy: Option<Occupancy>,
}

impl Room {
    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn volume(&self) -> f64 {
        self.floor_area() * self.height
    }

    /// Check the room is a valid calculation subject for the given mode.
    /// The first failure wins; no partial results are produced.
    pub fn validate_for(&self, mode: CalculationMode) -> Result<(), CalculationError> {
        for (field, value) in [
            (DimensionField::Length, self.length),
            (DimensionField::Width, self.width),
            (DimensionField::Height, self.height),
        ] {
            // Written so NaN is rejected too.
            if !(value > 0.) {
                return Err(CalculationError::InvalidDimension { field, value });
            }
        }

        if let Some(occupancy) = &self.occupancy {
            if !(occupancy.number_of_people >= 0. && occupancy.number_of_people.is_finite()) {
                return Err(CalculationError::InvalidOccupancy {
                    field: OccupancyField::NumberOfPeople,
                    value: occupancy.number_of_people,
                });
            }
            if !(occupancy.hours_per_day >= 0. && occupancy.hours_per_day <= 24.) {
                return Err(CalculationError::InvalidOccupancy {
                    field: OccupancyField::HoursPerDay,
                    value: occupancy.hours_per_day,
                });
            }
        }

        if self.heating_type == HeatingType::Spot {
            match self.spot_percentage {
                Some(percentage) if (1. ..=100.).contains(&percentage) => {}
                other => return Err(CalculationError::InvalidSpotPercentage(other)),
            }
        }

        // Windows only contribute in advanced mode, so simple mode does not
        // reject on them.
        if mode == CalculationMode::Advanced {
            for (index, window) in self.windows.iter().enumerate() {
                window
                    .validate()
                    .map_err(|problem| CalculationError::InvalidWindow { index, problem })?;
            }
        }

        Ok(())
    }
}

/// A group of identical windows in the room. Each group contributes a heat
/// loss term independently of the others; list order is irrelevant to the
/// result.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Window {
    /// Width in metres of a single window.
    pub width: f64,
    /// Height in metres of a single window.
    pub height: f64,
    /// Number of identical windows in this group.
    #[serde(default = "default_window_quantity")]
    pub quantity: u32,
    pub glass_type: GlassType,
    pub orientation: WindowOrientation,
    #[serde(default)]
    pub has_blinds: bool,
}

fn default_window_quantity() -> u32 {
    1
}

impl Window {
    /// Glazed area of the whole group, in m².
    pub fn area(&self) -> f64 {
        self.width * self.height * self.quantity as f64
    }

    fn validate(&self) -> Result<(), WindowProblem> {
        if self.width <= 0. {
            return Err(WindowProblem::NonPositiveWidth(self.width));
        }
        if self.height <= 0. {
            return Err(WindowProblem::NonPositiveHeight(self.height));
        }
        if self.quantity < 1 {
            return Err(WindowProblem::ZeroQuantity);
        }
        Ok(())
    }
}

/// What lies on the other side of each of the room's six boundary surfaces.
/// All six directions are mandatory - a missing direction is a data-entry
/// error, not "no adjacent space".
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct AdjacentSpaces {
    pub north: AdjacencyKind,
    pub east: AdjacencyKind,
    pub south: AdjacencyKind,
    pub west: AdjacencyKind,
    pub above: AdjacencyKind,
    pub below: AdjacencyKind,
}

impl AdjacentSpaces {
    /// All six directional values, in a fixed order. Directions are
    /// independent and unordered as far as the model is concerned.
    pub fn kinds(&self) -> [AdjacencyKind; 6] {
        [
            self.north, self.east, self.south, self.west, self.above, self.below,
        ]
    }

    pub fn uniform(kind: AdjacencyKind) -> Self {
        Self {
            north: kind,
            east: kind,
            south: kind,
            west: kind,
            above: kind,
            below: kind,
        }
    }
}

/// Room usage, applied as a minor demand correction only.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Occupancy {
    #[validate(minimum = 0.)]
    pub number_of_people: f64,
    #[validate(minimum = 0.)]
    #[validate(maximum = 24.)]
    pub hours_per_day: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoomType {
    Living,
    Bedroom,
    Bathroom,
    Kitchen,
    Office,
    Other,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InsulationType {
    Poor,
    // some input sources say "medium" for the same grade
    #[serde(alias = "medium")]
    Average,
    Good,
    Excellent,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeatingType {
    /// Heat the whole enclosed space.
    Full,
    /// Heat a fraction of the room's footprint, e.g. a desk or seating area.
    Spot,
}

/// Glazing grades from single glass up to triple glazing, in ascending order
/// of quality.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    #[strum(serialize = "single")]
    Single,
    #[strum(serialize = "double")]
    Double,
    #[strum(serialize = "hr")]
    Hr,
    #[serde(rename = "hr+")]
    #[strum(serialize = "hr+")]
    HrPlus,
    #[serde(rename = "hr++")]
    #[strum(serialize = "hr++")]
    HrPlusPlus,
    #[strum(serialize = "triple")]
    Triple,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WindowOrientation {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WallType {
    Brick,
    Concrete,
    Wood,
    Steel,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CeilingType {
    Concrete,
    Wood,
    Insulated,
    Uninsulated,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FloorType {
    Concrete,
    Wood,
    Tile,
    Carpet,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VentilationType {
    Natural,
    Mechanical,
    Balanced,
    None,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AdjacencyKind {
    Heated,
    Unheated,
    Outside,
}

/// Which refinement steps the estimator applies on top of the base wattage.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CalculationMode {
    Simple,
    #[default]
    Advanced,
}
