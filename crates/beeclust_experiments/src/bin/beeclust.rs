use std::path::PathBuf;

use beeclust_core::config::BeeClustConfig;
use beeclust_core::random::seeded;
use beeclust_core::simulation::Simulation;
use beeclust_experiments::metrics::extract_metrics;
use beeclust_experiments::runner::drive_simulation;
use beeclust_experiments::{
    export_tick_records_csv, export_to_csv, find_best_parameters, find_best_result_index,
    load_config, load_grid, parameter_spaces, run_parallel_experiments, ParameterSpace,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "beeclust",
    about = "BeeClust swarm simulation",
    long_about = "Run a single BeeClust simulation on a grid file, or sweep the\n\
                  model parameters over many seeded runs in parallel."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print a summary
    Run {
        /// Grid file (whitespace matrix, or JSON with a .json extension)
        #[arg(long)]
        grid: PathBuf,
        /// JSON model configuration; missing fields use the defaults
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 1_000)]
        ticks: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Reset every bee to a fresh random heading after every K ticks
        #[arg(long, value_name = "K")]
        forget_every: Option<usize>,
        /// Write the final state as JSON
        #[arg(long, value_name = "OUT.json")]
        snapshot: Option<PathBuf>,
        /// Write per-tick telemetry as CSV
        #[arg(long, value_name = "OUT.csv")]
        telemetry: Option<PathBuf>,
    },
    /// Run a parameter sweep in parallel and export the results
    Sweep {
        #[arg(long)]
        grid: PathBuf,
        /// Pre-defined parameter space
        #[arg(value_enum, long, default_value_t = Space::Minimal)]
        space: Space,
        #[arg(long, default_value_t = 1_000)]
        ticks: usize,
        /// Seeded runs per parameter combination
        #[arg(long, default_value_t = 1)]
        runs: usize,
        /// Worker threads (defaults to all cores)
        #[arg(long)]
        threads: Option<usize>,
        #[arg(long, default_value = "sweep_results.csv")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Space {
    Minimal,
    Collision,
    Temperature,
    Comprehensive,
}

impl Space {
    fn build(self) -> ParameterSpace {
        match self {
            Self::Minimal => parameter_spaces::minimal_space(),
            Self::Collision => parameter_spaces::collision_focused_space(),
            Self::Temperature => parameter_spaces::temperature_focused_space(),
            Self::Comprehensive => parameter_spaces::comprehensive_space(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            grid,
            config,
            ticks,
            seed,
            forget_every,
            snapshot,
            telemetry,
        } => run(RunArgs {
            grid,
            config,
            ticks,
            seed,
            forget_every,
            snapshot,
            telemetry,
        }),
        Commands::Sweep {
            grid,
            space,
            ticks,
            runs,
            threads,
            output,
        } => sweep(grid, space, ticks, runs, threads, output),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

struct RunArgs {
    grid: PathBuf,
    config: Option<PathBuf>,
    ticks: usize,
    seed: u64,
    forget_every: Option<usize>,
    snapshot: Option<PathBuf>,
    telemetry: Option<PathBuf>,
}

fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_grid(&args.grid)?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BeeClustConfig::default(),
    };
    info!(grid = %args.grid.display(), ticks = args.ticks, seed = args.seed, "starting run");

    let mut sim = Simulation::new(grid, config, seeded(args.seed))?;
    let initial_score = sim.score();
    let telemetry = drive_simulation(&mut sim, args.ticks, args.forget_every);
    let result = extract_metrics(&sim, &telemetry);

    println!(
        "--- BeeClust run ({}x{} grid, {} bees, {} ticks, seed {}) ---",
        sim.grid().rows(),
        sim.grid().columns(),
        result.bee_count,
        args.ticks,
        args.seed
    );
    println!("Initial score: {:.2}", initial_score);
    println!("Final score: {:.2} (ideal {:.1})", result.final_score, config.t_ideal);
    println!("Mean score: {:.2}", result.mean_score);
    println!("Total moves: {}", result.total_moves);
    println!(
        "Swarms: {} (largest {}, {:.0}% of bees)",
        result.swarm_count,
        result.largest_swarm,
        result.clustering_ratio() * 100.0
    );

    if let Some(path) = &args.snapshot {
        std::fs::write(path, sim.snapshot().to_json()?)?;
        println!("Snapshot written to {}", path.display());
    }
    if let Some(path) = &args.telemetry {
        export_tick_records_csv(&telemetry.records, path)?;
        println!("Telemetry written to {}", path.display());
    }
    Ok(())
}

fn sweep(
    grid_path: PathBuf,
    space: Space,
    ticks: usize,
    runs: usize,
    threads: Option<usize>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_grid(&grid_path)?;
    let parameter_sets = space
        .build()
        .with_ticks(ticks)
        .with_runs_per_point(runs)
        .generate();
    println!(
        "Generated {} parameter sets (invalid combinations filtered out)",
        parameter_sets.len()
    );

    let results = run_parallel_experiments(&grid, &parameter_sets, threads)?;
    println!("Completed {} simulations", results.len());

    if let Some(best_idx) = find_best_result_index(&results) {
        let best = &results[best_idx];
        println!("\n=== Best Run ===");
        println!("Final score: {:.2}", best.final_score);
        println!("Mean score: {:.2}", best.mean_score);
        println!("Swarms: {} (largest {})", best.swarm_count, best.largest_swarm);
    }
    if let Some(best_params) = find_best_parameters(&results, &parameter_sets) {
        let config = &best_params.config;
        println!("\n=== Best Parameters ({}) ===", best_params.experiment_id);
        println!("p_changedir: {:.2}", config.p_changedir);
        println!("p_wall: {:.2}", config.p_wall);
        println!("p_meet: {:.2}", config.p_meet);
        println!("k_temp: {:.2}", config.k_temp);
        println!("k_stay: {:.1}", config.k_stay);
        println!("t_ideal: {:.1}", config.t_ideal);
        println!("min_wait: {}", config.min_wait);
    }

    export_to_csv(&results, &parameter_sets, &output)?;
    println!("\nExported to {}", output.display());
    Ok(())
}
