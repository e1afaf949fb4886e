//! Flappy Core headless entry point
//!
//! Plays autopilot sessions on a manual clock and logs the results. Useful
//! for checking a config's feel without a renderer.

use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use flappy_core::GameConfig;
use flappy_core::platform::{LogObserver, ManualClock, NullScene};
use flappy_core::sim::{GamePhase, InputEvent, autopilot};
use flappy_core::Driver;

/// Headless Flappy Bird simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for pipe placement (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of sessions to play
    #[arg(long, default_value_t = 3)]
    sessions: u32,

    /// Tick limit per session
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Flappy Core (headless) starting...");
    let mut driver = Driver::new(config, seed, NullScene::default(), ManualClock::new(), LogObserver)?;

    for session in 1..=args.sessions {
        let input = if session == 1 {
            InputEvent::Start
        } else {
            InputEvent::Restart
        };
        driver.handle_input(input);

        let mut ticks = 0;
        while ticks < args.max_ticks {
            if autopilot::wants_jump(driver.state()) {
                driver.handle_input(InputEvent::Jump);
            }
            if driver.clock_mut().take_pending().is_none() {
                break;
            }
            driver.on_tick();
            ticks += 1;
        }

        if driver.phase() == GamePhase::Playing {
            log::info!("Session {} hit the tick limit ({} ticks)", session, ticks);
            break;
        }
        if driver.phase() == GamePhase::Menu {
            log::warn!("Session {} aborted", session);
            break;
        }
    }

    let score = driver.state().score;
    println!("Best score: {}", score.best);
    Ok(())
}
