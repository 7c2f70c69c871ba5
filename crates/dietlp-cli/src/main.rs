mod problem_file;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use dietlp_optimizer::{DietOptimizer, MacroTargets, OptimizationResult, Outcome, SolveOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::problem_file::{ProblemFile, load_config};

#[derive(Parser)]
#[command(name = "dietlp")]
#[command(about = "Least-cost diet optimization over nutrient targets", long_about = None)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// JSON file with optimizer settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve against the targets listed in the problem file
    Solve {
        /// The problem file (foods, prices, targets)
        file: PathBuf,
        /// Maximum grams of any single food
        #[arg(long, default_value_t = 1000.0)]
        max_quantity: f64,
        /// Solver time limit in seconds
        #[arg(long, default_value_t = 60)]
        time_limit: u64,
        /// Show binding constraints and shadow prices
        #[arg(short, long)]
        analysis: bool,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Solve for calorie and macro targets with a symmetric tolerance
    Macros {
        /// The problem file (targets in it are ignored)
        file: PathBuf,
        #[arg(long, default_value_t = 2000.0)]
        calories: f64,
        #[arg(long, default_value_t = 150.0)]
        protein: f64,
        #[arg(long, default_value_t = 200.0)]
        carbs: f64,
        #[arg(long, default_value_t = 65.0)]
        fat: f64,
        /// Fractional tolerance (0.1 = ±10%)
        #[arg(long, default_value_t = 0.1)]
        tolerance: f64,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Check a problem file for errors
    Check {
        /// The file to check
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| fail(&e));
    let optimizer = DietOptimizer::new(config);

    match cli.command {
        Commands::Solve {
            file,
            max_quantity,
            time_limit,
            analysis,
            format,
        } => {
            let problem = read_problem(&file);
            let options = SolveOptions::default()
                .with_max_quantity_per_food(max_quantity)
                .with_time_limit(Duration::from_secs(time_limit));

            let outcome = optimizer
                .solve(&problem.foods, &problem.prices, &problem.targets, options)
                .unwrap_or_else(|e| fail(&e.to_string()));
            print_outcome(outcome, &format, analysis);
        }
        Commands::Macros {
            file,
            calories,
            protein,
            carbs,
            fat,
            tolerance,
            format,
        } => {
            let problem = read_problem(&file);
            let macros = MacroTargets {
                calories,
                protein_g: protein,
                carbs_g: carbs,
                fat_g: fat,
            };
            info!(?macros, tolerance, "optimizing for macros");

            let result = optimizer
                .optimize_for_macros(&problem.foods, &problem.prices, &macros, tolerance)
                .unwrap_or_else(|e| fail(&e.to_string()));
            match result {
                Some(result) => print_result(&result, &format, false),
                None => {
                    println!("Status: NO SOLUTION");
                    println!("Widen the tolerance or add foods to the catalog.");
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { file } => {
            let problem = read_problem(&file);

            if let Err(e) = optimizer.validate(
                &problem.foods,
                &problem.prices,
                &problem.targets,
                SolveOptions::default(),
            ) {
                eprintln!("✗ {} has errors:", file.display());
                eprintln!("  {}", e);
                std::process::exit(1);
            }

            println!("✓ {} is valid", file.display());
            println!("  {} foods", problem.foods.len());
            println!("  {} prices", problem.prices.len());
            println!("  {} targets", problem.targets.len());
            print_target_coverage(&problem);

            let unpriced = problem.unpriced_foods();
            if !unpriced.is_empty() {
                println!();
                println!("Foods without a price (selectable at zero cost):");
                for key in unpriced {
                    println!("  - {}", key);
                }
            }
            let orphans = problem.orphan_prices();
            if !orphans.is_empty() {
                println!();
                println!("Prices with no matching food:");
                for key in orphans {
                    println!("  - {}", key);
                }
            }
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_problem(path: &Path) -> ProblemFile {
    ProblemFile::load(path).unwrap_or_else(|e| fail(&e))
}

/// Number of foods that list each targeted nutrient
fn print_target_coverage(problem: &ProblemFile) {
    if problem.targets.is_empty() {
        return;
    }
    println!();
    println!("Target coverage:");
    for nutrient in problem.targets.keys() {
        let count = problem
            .foods
            .values()
            .filter(|food| food.nutrient(nutrient).is_some())
            .count();
        println!("  {:30} listed by {} of {} foods", nutrient, count, problem.foods.len());
    }
}

fn print_outcome(outcome: Outcome, format: &str, analysis: bool) {
    match outcome {
        Outcome::Optimal(result) => print_result(&result, format, analysis),
        Outcome::NoSolution { status, violations } => {
            println!("Status: {}", status.as_str().to_uppercase());
            println!("No selection satisfies all targets.");
            if !violations.is_empty() {
                println!();
                println!("Constraints a relaxed selection misses:");
                for v in &violations {
                    println!("  - {}", v.description);
                }
            }
            std::process::exit(1);
        }
    }
}

fn print_result(result: &OptimizationResult, format: &str, analysis: bool) {
    if format == "json" {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    print!("{}", result);

    if analysis {
        println!();
        println!("Analysis:");
        println!();

        if !result.binding_constraints.is_empty() {
            println!("Binding constraints (pinch points):");
            for name in &result.binding_constraints {
                println!("  - {}", name);
            }
            println!();
        }

        println!("Shadow prices (cost change per unit of bound):");
        for sp in &result.shadow_prices {
            if sp.value.abs() > 0.0001 {
                println!("  {:30} {:10.4}", sp.constraint, sp.value);
                println!("    {}", sp.interpretation);
            }
        }
        println!();

        println!("Reduced costs (foods not in the diet):");
        for (food, gap) in &result.reduced_costs {
            if *gap > 0.001 {
                println!("  {:30} price must drop by ${:.2} to enter", food, gap);
            }
        }
    }
}
