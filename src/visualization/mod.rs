mod charts;
mod tables;

pub use charts::{format_population_chart, print_population_chart};
pub use tables::{
    format_summary_table, format_trajectory_table, print_summary_table, print_trajectory_table,
};
