use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use population_dynamics::{
    io,
    models::Scenario,
    simulation::{simulate, summarize},
    visualization::{print_population_chart, print_summary_table, print_trajectory_table},
};

#[derive(Parser)]
#[command(
    name = "population-sim",
    about = "Population Dynamics Simulator - deterministic growth trajectories",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw trajectory, one "year population" line per year
    Run {
        /// Number of years to simulate
        #[arg(short, long, default_value = "1000")]
        years: u32,

        /// Population at year 0
        #[arg(short, long, default_value = "100.0")]
        initial: f64,
    },

    /// Display the trajectory as a table, chart, and summary
    Report {
        /// Number of years to simulate
        #[arg(short, long, default_value = "50")]
        years: u32,

        /// Population at year 0
        #[arg(short, long, default_value = "100.0")]
        initial: f64,

        /// Skip the text bar chart
        #[arg(long)]
        no_chart: bool,

        /// Skip the summary table
        #[arg(long)]
        no_summary: bool,
    },

    /// Display a quick summary of the trajectory
    Summary {
        /// Number of years to simulate
        #[arg(short, long, default_value = "1000")]
        years: u32,

        /// Population at year 0
        #[arg(short, long, default_value = "100.0")]
        initial: f64,
    },

    /// Export the trajectory to CSV or JSON
    Export {
        /// Output file path (.csv or .json)
        #[arg(short, long)]
        output: PathBuf,

        /// Number of years to simulate
        #[arg(short, long, default_value = "1000")]
        years: u32,

        /// Population at year 0
        #[arg(short, long, default_value = "100.0")]
        initial: f64,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn build_scenario(years: u32, initial: f64) -> Scenario {
    Scenario::default()
        .with_initial_population(initial)
        .with_years(years)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("population_dynamics=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The bare binary runs the canonical trace
    let command = cli.command.unwrap_or(Commands::Run {
        years: Scenario::default().years,
        initial: Scenario::default().initial_population,
    });

    match command {
        Commands::Run { years, initial } => {
            let scenario = build_scenario(years, initial);
            for point in simulate(&scenario) {
                println!("{} {}", point.year, point.population);
            }
        }

        Commands::Report {
            years,
            initial,
            no_chart,
            no_summary,
        } => {
            println!(
                "\n{}",
                format!("Population Report: {years} years").bold().cyan()
            );

            let scenario = build_scenario(years, initial);
            let points = simulate(&scenario);
            print_trajectory_table(&points);

            if !no_chart {
                print_population_chart(&points, 20);
            }

            if !no_summary {
                match summarize(&points) {
                    Ok(summary) => print_summary_table(&summary),
                    Err(e) => {
                        eprintln!("{}: {e}", "Warning".yellow());
                    }
                }
            }
        }

        Commands::Summary { years, initial } => {
            let scenario = build_scenario(years, initial);
            let summary = summarize(&simulate(&scenario))?;

            println!("\n{}", "Quick Summary".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  Years:              {}", summary.years);
            println!("  Initial Population: {:.1}", summary.initial_population);
            println!("  Final Population:   {:.1}", summary.final_population);
            println!(
                "  Peak Population:    {:.1} (year {})",
                summary.peak_population, summary.peak_year
            );
            println!("  Total Growth:       {:+.1}", summary.total_growth);
            println!("  Mean Annual Growth: {:+.1}", summary.mean_annual_growth);
            match summary.first_plateau_year {
                Some(year) => println!("  First Plateau:      year {year}"),
                None => println!("  First Plateau:      none"),
            }
        }

        Commands::Export {
            output,
            years,
            initial,
            pretty,
        } => {
            let scenario = build_scenario(years, initial);
            let points = simulate(&scenario);

            let out_ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match out_ext.as_str() {
                "csv" => io::write_csv(&points, &output)?,
                "json" => io::write_json(&points, &output, pretty)?,
                _ => anyhow::bail!("Unsupported output format: .{out_ext}. Use .csv or .json"),
            }

            println!(
                "{} Exported {} years -> {}",
                "Success:".green().bold(),
                points.len(),
                output.display()
            );
        }
    }

    Ok(())
}
