use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    estimator::{Segment, Totals},
    pricing::{CostEstimate, PROVIDER_PRICES},
    quantity::energy::KilowattHours,
};

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_segments_table(segments: &[Segment], totals: &Totals) -> Table {
    let mut table = base_table();
    table.set_header(vec!["SOC slice", "Energy", "Power", "Factor", "Time"]);
    for segment in segments {
        table.add_row(vec![
            Cell::new(format!("{:.0}-{:.0}%", segment.band_start, segment.band_end)),
            Cell::new(segment.energy).set_alignment(CellAlignment::Right),
            Cell::new(segment.effective_power).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", segment.applied_factor))
                .set_alignment(CellAlignment::Right)
                .fg(factor_color(segment.applied_factor)),
            Cell::new(format!("{:.1} min", segment.adjusted_hours.total_minutes()))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(totals.energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.1} min ({})", totals.hours.total_minutes(), totals.hours))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

const fn factor_color(factor: f64) -> Color {
    if factor >= 2.0 {
        Color::Red
    } else if factor > 1.25 {
        Color::DarkYellow
    } else {
        Color::Green
    }
}

#[must_use]
pub fn build_cost_table(cost: &CostEstimate, energy: KilowattHours) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Provider", "Price", "Energy", "Total cost"]);
    table.add_row(vec![
        Cell::new(cost.provider.as_deref().unwrap_or("Custom / Other")),
        Cell::new(cost.price).set_alignment(CellAlignment::Right),
        Cell::new(energy).set_alignment(CellAlignment::Right),
        Cell::new(cost.total)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_providers_table() -> Table {
    let mut table = base_table();
    table.set_header(vec!["Provider", "Suggested price"]);
    for (name, price) in PROVIDER_PRICES {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
