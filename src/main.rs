//! Command line front end for the bounded Game of Life

use anyhow::{Context, Result};
use bounded_life::{
    build_simulation,
    config::{CliOverrides, DisplayStyle, OutputFormat, Settings},
    game_of_life::{create_example_patterns, save_grid_to_file, GridSnapshot, Preset},
    host::{Host, LineInput},
    render::TerminalRenderer,
    utils::{ColorOutput, ConsoleLogger, GridFormatter},
};
use clap::{Args, Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bounded_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a grid
#[derive(Args, Debug)]
struct GridArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Side length of the square grid
    #[arg(long)]
    mat: Option<usize>,

    /// Probability that a cell starts alive
    #[arg(long)]
    prob: Option<f64>,

    /// Fixed RNG seed for a reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// Pattern file to seed from ('0'/'1' rows)
    #[arg(long, conflicts_with = "preset")]
    pattern: Option<PathBuf>,

    /// Built-in pattern to seed from
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Grid rendering style
    #[arg(long, value_enum)]
    style: Option<DisplayStyle>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl GridArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            side_length: self.mat,
            seed_probability: self.prob,
            rng_seed: self.seed,
            pattern_file: self.pattern.clone(),
            preset: self.preset,
            style: self.style,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in the terminal
    Run {
        #[command(flatten)]
        grid: GridArgs,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,

        /// Start paused
        #[arg(long)]
        paused: bool,
    },

    /// Advance a number of generations without drawing each frame
    Simulate {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the final grid to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Commands::Run { grid, .. } | Commands::Simulate { grid, .. } => grid.verbose,
        Commands::Setup { .. } => false,
    };
    ConsoleLogger::init(ConsoleLogger::level_for(verbose))
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Run {
            grid,
            fps,
            generations,
            paused,
        } => {
            let mut overrides = grid.overrides();
            overrides.fps = fps;
            overrides.max_generations = generations;
            overrides.start_paused = paused;
            run_command(&grid.config, &overrides)
        }
        Commands::Simulate {
            grid,
            generations,
            format,
            output,
        } => {
            let mut overrides = grid.overrides();
            overrides.format = format;
            simulate_command(&grid.config, &overrides, generations, output)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    Ok(settings)
}

fn run_command(config_path: &PathBuf, overrides: &CliOverrides) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let mut simulation = build_simulation(&settings)?;

    let renderer = TerminalRenderer::stdout(settings.output.style);
    let mut host = Host::new(renderer, LineInput::stdin(), settings.frame_interval())
        .with_max_generations(settings.playback.max_generations);

    let summary = host.run(&mut simulation)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Stopped after {} generation(s), {} frame(s), {} living cell(s)",
            summary.generation, summary.frames, summary.living_cells
        ))
    );

    Ok(())
}

fn simulate_command(
    config_path: &PathBuf,
    overrides: &CliOverrides,
    generations: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let mut simulation = build_simulation(&settings)?;

    let start_time = Instant::now();
    for _ in 0..generations {
        simulation.step();
    }
    let elapsed = start_time.elapsed();

    let grid = simulation.grid();
    let snapshot = GridSnapshot::capture(grid, simulation.generation());

    match settings.output.format {
        OutputFormat::Text => {
            print!("{}", GridFormatter::format(grid, settings.output.style));
            println!(
                "{}",
                GridFormatter::format_summary(grid, simulation.generation())
            );
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "Advanced {} generation(s) in {:.3}s",
                    generations,
                    elapsed.as_secs_f64()
                ))
            );
        }
        OutputFormat::Json => println!("{}", snapshot.to_json()?),
    }

    if let Some(path) = output {
        match settings.output.format {
            OutputFormat::Text => save_grid_to_file(grid, &path)?,
            OutputFormat::Json => snapshot.save_to_file(&path)?,
        }
        eprintln!(
            "{}",
            ColorOutput::success(&format!("Saved final grid to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    // Deterministic demo: blinker on a small grid, starting paused
    let mut demo = Settings::default();
    demo.grid.side_length = 10;
    demo.grid.preset = Some(Preset::Blinker);
    demo.playback.fps = 2;
    demo.playback.start_paused = true;
    demo.output.style = DisplayStyle::Coords;
    demo.to_file(&config_dir.join("blinker_demo.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
