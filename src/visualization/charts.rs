use colored::Colorize;

use crate::simulation::TrajectoryPoint;

/// Format a text-based bar chart of the trajectory as a string.
///
/// Long trajectories are sampled down to at most `max_rows` evenly spaced
/// years so the chart stays readable; the final year is always included.
pub fn format_population_chart(points: &[TrajectoryPoint], max_rows: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Chart".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if points.is_empty() || max_rows == 0 {
        output.push_str("  No data available.\n");
        return output;
    }

    let stride = points.len().div_ceil(max_rows).max(1);
    let mut sampled: Vec<&TrajectoryPoint> = points.iter().step_by(stride).collect();
    if let Some(last) = points.last() {
        if sampled.last().map(|p| p.year) != Some(last.year) {
            sampled.push(last);
        }
    }

    let max_population = sampled
        .iter()
        .map(|p| p.population)
        .fold(0.0f64, f64::max);

    let bar_width = 40;

    output.push_str(&format!("  {:>6}  {:>14}  Population\n", "Year", "Value"));
    output.push_str(&format!("  {}\n", "-".repeat(70)));

    for point in &sampled {
        let bar_len = if max_population > 0.0 {
            ((point.population / max_population) * bar_width as f64).round() as usize
        } else {
            0
        };

        let bar = "\u{2588}".repeat(bar_len);

        output.push_str(&format!(
            "  {:>6}  {:>14.1}  {}\n",
            point.year,
            point.population,
            bar.green()
        ));
    }

    output.push('\n');
    output
}

/// Print a text-based bar chart of the trajectory.
pub fn print_population_chart(points: &[TrajectoryPoint], max_rows: usize) {
    print!("{}", format_population_chart(points, max_rows));
}
