#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, CpuPlayer, Game, TerminalInput, TerminalRenderer};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Sink the CPU's fleet before it sinks yours.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = 400,
        help = "Pause before each CPU move in milliseconds (0 disables)"
    )]
    think_ms: u64,
    #[arg(long, help = "Disable colors and screen clearing")]
    no_color: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(CpuPlayer::new(), rng);
    let mut renderer = TerminalRenderer::new(std::io::stdout())
        .with_think_delay(Duration::from_millis(cli.think_ms));
    if cli.no_color {
        renderer = renderer.plain();
    }

    // Raw mode lasts as long as `input`; it is restored before the summary.
    let result = {
        let mut input = TerminalInput::new()
            .map_err(|e| anyhow::anyhow!("could not use terminal: {}", e))?;
        game.run(&mut input, &mut renderer)?
    };

    if result.is_none() {
        println!("Game abandoned.");
    }
    Ok(())
}
