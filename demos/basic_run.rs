//! Basic run example: print the canonical trajectory.
//!
//! Run from the project root:
//!   cargo run --example basic_run

use population_dynamics::models::Scenario;
use population_dynamics::simulation::simulate;

fn main() {
    let scenario = Scenario::new("Canonical");

    for point in simulate(&scenario) {
        println!("{} {}", point.year, point.population);
    }
}
