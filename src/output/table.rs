use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};

use crate::gap::{GapRecord, StatusCategory, SummaryReport};

pub fn render_gaps_table(records: &[GapRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Item",
        "Forecast (kg)",
        "Actual (kg)",
        "Gap (kg)",
        "Gap (%)",
        "Status",
    ]);

    for r in records {
        table.add_row(Row::from(vec![
            Cell::new(&r.label),
            number_cell(format!("{:.2}", r.forecast)),
            number_cell(format!("{:.2}", r.actual)),
            number_cell(format!("{:+.2}", r.gap)),
            number_cell(format!("{:+.2}", r.gap_percent)),
            Cell::new(r.status.label()).fg(status_color(r.status)),
        ]));
    }
    table.to_string()
}

pub fn render_summary_table(summary: &SummaryReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Summary", "Value"]);
    table.add_row(vec![
        Cell::new("Total Forecasted (kg)"),
        number_cell(format!("{:.2}", summary.total_forecast)),
    ]);
    table.add_row(vec![
        Cell::new("Total Actual (kg)"),
        number_cell(format!("{:.2}", summary.total_actual)),
    ]);
    table.add_row(vec![
        Cell::new("Net Supply Gap (kg)"),
        number_cell(format!("{:+.2}", summary.net_gap)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Average Gap (%) [{}]", summary.average_policy)),
        number_cell(format!("{:+.2}", summary.average_gap_percent)),
    ]);
    table.to_string()
}

fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn status_color(status: StatusCategory) -> Color {
    match status {
        StatusCategory::SevereShortfall | StatusCategory::Undersupply => Color::Red,
        StatusCategory::ModerateShortfall => Color::Yellow,
        StatusCategory::Stable | StatusCategory::Matched => Color::Green,
        StatusCategory::ModerateSurplus => Color::Cyan,
        StatusCategory::SevereSurplus | StatusCategory::Oversupply => Color::Blue,
    }
}
