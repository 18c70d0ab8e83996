//! Trajectory report example: simulate a short scenario and render the
//! table, chart, and summary.
//!
//! Run from the project root:
//!   cargo run --example trajectory_report

use population_dynamics::models::Scenario;
use population_dynamics::simulation::Simulator;
use population_dynamics::visualization::{
    print_population_chart, print_summary_table, print_trajectory_table,
};

fn main() {
    let scenario = Scenario::new("Report Demo").with_years(40);
    let simulator = Simulator::new(&scenario);

    let points = simulator.trajectory();
    print_trajectory_table(&points);
    print_population_chart(&points, 20);

    match simulator.summary() {
        Ok(summary) => print_summary_table(&summary),
        Err(e) => eprintln!("Summary failed: {e}"),
    }
}
