use crate::core::estimator::CalculationResult;
use crate::input::{
    AdjacencyKind, CeilingType, FloorType, GlassType, HeatingType, InsulationType, Room, RoomType,
    VentilationType, WallType, WindowOrientation,
};
use crate::output::Output;
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::io::Write as _;

/// Plain-text report exporter. Serializes a room and its calculation result
/// into a downloadable report with Dutch field labels, written through an
/// [`Output`].

pub fn write_report(
    output: impl Output,
    room: &Room,
    result: &CalculationResult,
) -> anyhow::Result<()> {
    if output.is_noop() {
        return Ok(());
    }
    let generated_at = Utc::now();
    let location_key = generated_at.format("%Y-%m-%d").to_string();
    let mut writer = output.writer_for_location_key(&location_key)?;
    writer.write_all(render_report(room, result, generated_at).as_bytes())?;
    Ok(())
}

pub fn render_report(room: &Room, result: &CalculationResult, generated_at: DateTime<Utc>) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "Infrarood Verwarmings Berekening Rapport");
    let _ = writeln!(report, "=======================================");
    let _ = writeln!(
        report,
        "Gegenereerd op: {}",
        generated_at.format("%d-%m-%Y %H:%M")
    );
    let _ = writeln!(report);

    let mut room_section = IndexMap::new();
    room_section.insert("Type Ruimte", room_type_label(room.room_type).to_string());
    room_section.insert(
        "Afmetingen",
        format!("{}m x {}m x {}m", room.length, room.width, room.height),
    );
    room_section.insert("Vloeroppervlak", format!("{:.1}m²", room.floor_area()));
    room_section.insert("Inhoud", format!("{:.1}m³", room.volume()));
    room_section.insert(
        "Isolatie Kwaliteit",
        insulation_label(room.insulation).to_string(),
    );
    room_section.insert("Wandtype", wall_label(room.wall_type).to_string());
    room_section.insert("Plafondtype", ceiling_label(room.ceiling_type).to_string());
    room_section.insert("Vloertype", floor_label(room.floor_type).to_string());
    room_section.insert(
        "Ventilatie",
        ventilation_label(room.ventilation_type).to_string(),
    );
    room_section.insert(
        "Aangrenzend (N/O/Z/W/boven/onder)",
        room.adjacent_spaces
            .kinds()
            .map(adjacency_label)
            .join(", "),
    );
    write_section(&mut report, "Ruimte Informatie", &room_section);

    if !room.windows.is_empty() {
        let _ = writeln!(report, "Ramen Informatie");
        let _ = writeln!(report, "---------------");
        for (index, window) in room.windows.iter().enumerate() {
            let _ = writeln!(report, "Raam {}:", index + 1);
            let _ = writeln!(report, "- Afmetingen: {}m x {}m", window.width, window.height);
            let _ = writeln!(report, "- Aantal: {}", window.quantity);
            let _ = writeln!(report, "- Glas Type: {}", glass_label(window.glass_type));
            let _ = writeln!(
                report,
                "- Oriëntatie: {}",
                orientation_label(window.orientation)
            );
            let _ = writeln!(
                report,
                "- Zonwering: {}",
                if window.has_blinds { "Ja" } else { "Nee" }
            );
        }
        let _ = writeln!(report);
    }

    if room.heating_type == HeatingType::Spot {
        let mut spot_section = IndexMap::new();
        if let Some(percentage) = room.spot_percentage {
            spot_section.insert("Percentage van ruimte", format!("{percentage}%"));
        }
        write_section(&mut report, "Spot Verwarming", &spot_section);
    }

    let mut result_section = IndexMap::new();
    result_section.insert(
        "Benodigd Vermogen",
        format!("{} Watt", result.required_wattage),
    );
    result_section.insert(
        "Kosten per dag",
        format!("€ {:.2}", result.cost_estimate.daily),
    );
    result_section.insert(
        "Kosten per maand",
        format!("€ {:.2}", result.cost_estimate.monthly),
    );
    result_section.insert(
        "Kosten per jaar",
        format!("€ {:.2}", result.cost_estimate.yearly),
    );
    result_section.insert(
        "Energielabel",
        result.environmental_impact.energy_efficiency.to_string(),
    );
    result_section.insert(
        "CO₂ per jaar",
        format!(
            "{:.2} kg",
            result.environmental_impact.co2_savings_kg_per_year
        ),
    );
    write_section(&mut report, "Berekeningsresultaat", &result_section);

    let _ = writeln!(report, "Aanbevolen Panelen:");
    for suggestion in &result.panel_suggestions {
        let _ = writeln!(report, "- {suggestion}");
    }
    let _ = writeln!(report);

    if !result.recommendations.is_empty() {
        let _ = writeln!(report, "Aanbevelingen:");
        for recommendation in &result.recommendations {
            let _ = writeln!(report, "- {recommendation}");
        }
        let _ = writeln!(report);
    }

    let _ = writeln!(report, "Aanvullende Informatie");
    let _ = writeln!(report, "---------------------");
    let _ = writeln!(
        report,
        "- Deze berekening is een indicatie gebaseerd op de ingevoerde gegevens"
    );
    let _ = writeln!(
        report,
        "- Werkelijk verbruik kan variëren afhankelijk van specifieke omstandigheden"
    );
    let _ = writeln!(
        report,
        "- Raadpleeg een professional voor definitieve installatie"
    );
    let _ = writeln!(
        report,
        "- Houd rekening met lokale bouwvoorschriften en regelgeving"
    );
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "© {} Infrarood Verwarmings Calculator",
        generated_at.year()
    );

    report
}

fn write_section(report: &mut String, title: &str, entries: &IndexMap<&str, String>) {
    let _ = writeln!(report, "{title}");
    let _ = writeln!(report, "{}", "-".repeat(title.chars().count()));
    for (label, value) in entries {
        let _ = writeln!(report, "{label}: {value}");
    }
    let _ = writeln!(report);
}

fn room_type_label(room_type: RoomType) -> &'static str {
    match room_type {
        RoomType::Living => "Woonkamer",
        RoomType::Bedroom => "Slaapkamer",
        RoomType::Bathroom => "Badkamer",
        RoomType::Kitchen => "Keuken",
        RoomType::Office => "Kantoor",
        RoomType::Other => "Anders",
    }
}

fn insulation_label(insulation: InsulationType) -> &'static str {
    match insulation {
        InsulationType::Poor => "Slecht",
        InsulationType::Average => "Gemiddeld",
        InsulationType::Good => "Goed",
        InsulationType::Excellent => "Uitstekend",
    }
}

fn glass_label(glass_type: GlassType) -> &'static str {
    match glass_type {
        GlassType::Single => "Enkel glas",
        GlassType::Double => "Dubbel glas",
        GlassType::Hr => "HR",
        GlassType::HrPlus => "HR+",
        GlassType::HrPlusPlus => "HR++",
        GlassType::Triple => "Driedubbel glas",
    }
}

fn orientation_label(orientation: WindowOrientation) -> &'static str {
    match orientation {
        WindowOrientation::North => "Noord",
        WindowOrientation::East => "Oost",
        WindowOrientation::South => "Zuid",
        WindowOrientation::West => "West",
    }
}

fn wall_label(wall_type: WallType) -> &'static str {
    match wall_type {
        WallType::Brick => "Baksteen",
        WallType::Concrete => "Beton",
        WallType::Wood => "Hout",
        WallType::Steel => "Staal",
    }
}

fn ceiling_label(ceiling_type: CeilingType) -> &'static str {
    match ceiling_type {
        CeilingType::Concrete => "Beton",
        CeilingType::Wood => "Hout",
        CeilingType::Insulated => "Geïsoleerd",
        CeilingType::Uninsulated => "Ongeïsoleerd",
    }
}

fn floor_label(floor_type: FloorType) -> &'static str {
    match floor_type {
        FloorType::Concrete => "Beton",
        FloorType::Wood => "Hout",
        FloorType::Tile => "Tegels",
        FloorType::Carpet => "Tapijt",
    }
}

fn ventilation_label(ventilation_type: VentilationType) -> &'static str {
    match ventilation_type {
        VentilationType::Natural => "Natuurlijk",
        VentilationType::Mechanical => "Mechanisch",
        VentilationType::Balanced => "Gebalanceerd",
        VentilationType::None => "Geen",
    }
}

fn adjacency_label(kind: AdjacencyKind) -> &'static str {
    match kind {
        AdjacencyKind::Heated => "Verwarmd",
        AdjacencyKind::Unheated => "Onverwarmd",
        AdjacencyKind::Outside => "Buiten",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::{estimate, EstimateParams};
    use crate::input::{AdjacentSpaces, CalculationMode, Window};
    use crate::output::FileOutput;
    use chrono::TimeZone;
    use rstest::*;

    #[fixture]
    fn room() -> Room {
        Room {
            length: 6.,
            width: 4.,
            height: 2.6,
            room_type: RoomType::Living,
            insulation: InsulationType::Average,
            heating_type: HeatingType::Spot,
            spot_percentage: Some(60.),
            windows: vec![Window {
                width: 1.2,
                height: 1.4,
                quantity: 2,
                glass_type: GlassType::HrPlusPlus,
                orientation: WindowOrientation::South,
                has_blinds: true,
            }],
            wall_type: WallType::Brick,
            ceiling_type: CeilingType::Concrete,
            floor_type: FloorType::Concrete,
            ventilation_type: VentilationType::Natural,
            adjacent_spaces: AdjacentSpaces::uniform(AdjacencyKind::Heated),
            occupancy: None,
        }
    }

    #[rstest]
    fn report_contains_localised_room_details(room: Room) {
        let result = estimate(&room, CalculationMode::Advanced, &EstimateParams::default()).unwrap();
        let generated_at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let report = render_report(&room, &result, generated_at);

        assert!(report.contains("Gegenereerd op: 15-01-2026 09:30"));
        assert!(report.contains("Type Ruimte: Woonkamer"));
        assert!(report.contains("Afmetingen: 6m x 4m x 2.6m"));
        assert!(report.contains("Isolatie Kwaliteit: Gemiddeld"));
        assert!(report.contains(
            "Aangrenzend (N/O/Z/W/boven/onder): Verwarmd, Verwarmd, Verwarmd, Verwarmd, Verwarmd, Verwarmd"
        ));
        assert!(report.contains("Glas Type: HR++"));
        assert!(report.contains("Oriëntatie: Zuid"));
        assert!(report.contains("Zonwering: Ja"));
        assert!(report.contains("Percentage van ruimte: 60%"));
        assert!(report.contains(&format!(
            "Benodigd Vermogen: {} Watt",
            result.required_wattage
        )));
        assert!(report.contains("© 2026 Infrarood Verwarmings Calculator"));
    }

    #[rstest]
    fn writes_report_through_a_file_output(room: Room) {
        let result = estimate(&room, CalculationMode::Advanced, &EstimateParams::default()).unwrap();
        let directory = std::env::temp_dir().join(format!(
            "infraheat-report-test-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&directory).unwrap();
        let output = FileOutput::new(
            directory.clone(),
            "infrarood-berekening-{}.txt".to_string(),
        );

        write_report(&output, &room, &result).unwrap();

        let report_path = directory.join(format!(
            "infrarood-berekening-{}.txt",
            Utc::now().format("%Y-%m-%d")
        ));
        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("Benodigd Vermogen"));
        std::fs::remove_dir_all(&directory).unwrap();
    }

    #[rstest]
    fn report_omits_window_section_when_there_are_none(mut room: Room) {
        room.windows.clear();
        room.heating_type = HeatingType::Full;
        room.spot_percentage = None;
        let result = estimate(&room, CalculationMode::Simple, &EstimateParams::default()).unwrap();
        let report = render_report(&room, &result, Utc::now());
        assert!(!report.contains("Ramen Informatie"));
        assert!(!report.contains("Spot Verwarming"));
    }
}
