// main.rs - Cellular automata host: egui window or headless tokio runner

use std::time::Duration;

use anyhow::{Result, anyhow};
use automata::config::DEFAULT_INTERVAL_MS;
use automata::grid::DEFAULT_SIDE;
use automata::{ModelKind, Settings};
use clap::{Parser, Subcommand, ValueEnum};
use eframe::egui;
use tracing::info;

mod app;
mod canvas;
mod headless;
mod scheduler;
mod ui;

use app::AutomataApp;
use headless::HeadlessOptions;

#[derive(Parser, Debug)]
#[command(
    name = "automata",
    version,
    about = "Game of Life, forest-fire spread and SIR epidemic cellular automata"
)]
struct Cli {
    /// Grid rows, clamped to 10..=200.
    #[arg(long, global = true, env = "AUTOMATA_ROWS", default_value_t = DEFAULT_SIDE)]
    rows: usize,

    /// Grid columns, clamped to 10..=200.
    #[arg(long, global = true, env = "AUTOMATA_COLS", default_value_t = DEFAULT_SIDE)]
    cols: usize,

    /// Milliseconds between generations, clamped to 10..=1000.
    #[arg(long, global = true, env = "AUTOMATA_INTERVAL_MS", default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Fixed RNG seed for reproducible runs.
    #[arg(long, global = true, env = "AUTOMATA_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the desktop window (the default).
    Gui,
    /// Run one model without a window and log each generation.
    Headless {
        #[arg(long, value_enum, default_value_t = Model::Fire)]
        model: Model,
        /// Frames to deliver before exiting.
        #[arg(long, default_value_t = 600)]
        frames: u64,
        /// Milliseconds between frames, i.e. the simulated display refresh.
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Model {
    Life,
    Fire,
    Sir,
}

impl From<Model> for ModelKind {
    fn from(model: Model) -> Self {
        match model {
            Model::Life => ModelKind::Life,
            Model::Fire => ModelKind::Fire,
            Model::Sir  => ModelKind::Sir,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::new(cli.rows, cli.cols, cli.interval_ms);

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_window(settings, cli.seed),
        Command::Headless { model, frames, frame_ms } => {
            let summary = headless::run(HeadlessOptions {
                model: model.into(),
                settings,
                seed: cli.seed,
                frames,
                frame_period: Duration::from_millis(frame_ms.max(1)),
            })?;
            info!(?summary, "done");
            Ok(())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run_window(settings: Settings, seed: Option<u64>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    info!(dims = %settings.dims, interval_ms = settings.interval_ms(), "opening window");
    eframe::run_native(
        "Cellular Automata",
        options,
        Box::new(move |_cc| Box::new(AutomataApp::new(settings, seed))),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn headless_flags_parse() {
        let cli = Cli::parse_from([
            "automata", "--rows", "5", "--seed", "9", "headless", "--model", "sir", "--frames", "10",
        ]);
        assert_eq!(cli.rows, 5);
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Some(Command::Headless { model, frames, frame_ms }) => {
                assert!(matches!(model, Model::Sir));
                assert_eq!(frames, 10);
                assert_eq!(frame_ms, 16);
            }
            other => panic!("unexpected command {other:?}"),
        }
        // Clamping happens when settings are built
        assert_eq!(Settings::new(cli.rows, cli.cols, cli.interval_ms).dims.rows, 10);
    }
}
