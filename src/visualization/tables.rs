use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::simulation::{TrajectoryPoint, TrajectorySummary};

/// Format a trajectory table as a string.
///
/// The growth column shows the year-over-year change in the recorded
/// series; the first row has none.
pub fn format_trajectory_table(points: &[TrajectoryPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Trajectory".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if points.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Year", "Population", "Growth"]);

    let mut previous: Option<f64> = None;
    for point in points {
        let growth = match previous {
            Some(p) => format!("{:+.1}", point.population - p),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(format!("{}", point.year)),
            Cell::new(format!("{:.1}", point.population)),
            Cell::new(growth),
        ]);
        previous = Some(point.population);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print a trajectory table.
pub fn print_trajectory_table(points: &[TrajectoryPoint]) {
    print!("{}", format_trajectory_table(points));
}

/// Format a trajectory summary table as a string.
pub fn format_summary_table(summary: &TrajectorySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Trajectory Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Years Simulated"),
        Cell::new(format!("{}", summary.years)),
    ]);
    table.add_row(vec![
        Cell::new("Initial Population"),
        Cell::new(format!("{:.1}", summary.initial_population)),
    ]);
    table.add_row(vec![
        Cell::new("Final Population"),
        Cell::new(format!("{:.1}", summary.final_population)),
    ]);
    table.add_row(vec![
        Cell::new("Peak Population"),
        Cell::new(format!("{:.1} (year {})", summary.peak_population, summary.peak_year)),
    ]);
    table.add_row(vec![
        Cell::new("Total Growth"),
        Cell::new(format!("{:+.1}", summary.total_growth)),
    ]);
    table.add_row(vec![
        Cell::new("Mean Annual Growth"),
        Cell::new(format!("{:+.1}", summary.mean_annual_growth)),
    ]);
    table.add_row(vec![
        Cell::new("First Plateau Year"),
        Cell::new(match summary.first_plateau_year {
            Some(year) => format!("{year}"),
            None => "none".to_string(),
        }),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print a trajectory summary table.
pub fn print_summary_table(summary: &TrajectorySummary) {
    print!("{}", format_summary_table(summary));
}
