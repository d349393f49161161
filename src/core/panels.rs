use itertools::iproduct;

/// Catalogue of standard commercial panel wattages.
pub const STANDARD_PANEL_WATTAGES: [u32; 6] = [350, 500, 580, 700, 750, 1000];

const MAX_PANELS_PER_GROUPING: u32 = 3;
const MAX_SUGGESTIONS: usize = 3;

/// Suggest groupings of identical catalogue panels that cover the required
/// wattage. Groupings are ranked by least excess capacity, tie-broken towards
/// fewer, larger panels. Advisory text generation, not safety-critical
/// sizing.
pub fn suggest_panels(required_wattage: u32) -> Vec<String> {
    let mut candidates: Vec<(u32, u32, u32)> =
        iproduct!(1..=MAX_PANELS_PER_GROUPING, STANDARD_PANEL_WATTAGES)
            .filter_map(|(count, panel_wattage)| {
                let total = count * panel_wattage;
                (total >= required_wattage).then(|| (total - required_wattage, count, panel_wattage))
            })
            .collect();

    if candidates.is_empty() {
        // Room too large for three catalogue panels; fall back to however
        // many of the largest panel it takes.
        let largest = *STANDARD_PANEL_WATTAGES
            .iter()
            .max()
            .expect("catalogue is non-empty");
        let count = required_wattage.div_ceil(largest);
        return vec![format_grouping(count, largest)];
    }

    candidates.sort_by_key(|(excess, count, _)| (*excess, *count));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, count, panel_wattage)| format_grouping(count, panel_wattage))
        .collect()
}

fn format_grouping(count: u32, panel_wattage: u32) -> String {
    let noun = if count == 1 { "panel" } else { "panels" };
    format!(
        "{count}× {panel_wattage} W {noun} (total {} W)",
        count * panel_wattage
    )
}
