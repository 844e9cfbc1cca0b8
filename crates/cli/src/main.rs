mod host;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use welcome_core::script;
use welcome_core::typewriter::Timing;

#[derive(Parser, Debug)]
#[command(author, version, about = "T1 Welcome demo, host edition", long_about = None)]
struct Args {
    /// Path to a demo profile (YAML) overriding the built-in timing
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Run with zero delays
    #[arg(long)]
    instant: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries nothing but the demo stream.
    let level = if args.trace {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut timing = match &args.profile {
        Some(path) => {
            info!("Loading demo profile: {:?}", path);
            let profile = welcome_config::DemoProfile::from_file(path)?;
            Timing {
                typer_speed_ms: profile.timing.typer_speed_ms,
                cursor_delay_ms: profile.timing.cursor_delay_ms,
            }
        }
        None => Timing::default(),
    };

    if args.instant {
        timing = Timing::instant();
    }

    info!(
        "Running welcome script (typer {} ms, cursor {} ms)",
        timing.typer_speed_ms, timing.cursor_delay_ms
    );

    let mut console = host::StdoutConsole::new();
    let mut clock = host::SleepClock::new();
    script::run(&mut console, &mut clock, timing);

    info!("Demo finished");

    Ok(())
}
