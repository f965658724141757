use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use torus_snake::config::{
    theme_by_name, GridSize, BASE_SPEED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_SPEED,
};
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::terminal::{install_panic_hook, TerminalSession};

/// Smallest playable grid edge; below this the board fills immediately.
const MIN_GRID_EDGE: u16 = 8;

/// Input poll timeout, short enough to keep the highest tick rate honest.
const POLL_TIMEOUT: Duration = Duration::from_millis(5);

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Starting tick rate in ticks per second.
    #[arg(long = "speed", default_value_t = BASE_SPEED)]
    base_speed: u16,

    /// Color theme name (classic, ocean).
    #[arg(long, default_value = "classic")]
    theme: String,

    /// RNG seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    install_panic_hook();

    let bounds = GridSize {
        width: cli.width.max(MIN_GRID_EDGE),
        height: cli.height.max(MIN_GRID_EDGE),
    };
    let base_speed = cli.base_speed.clamp(1, MAX_SPEED);

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, base_speed, seed),
        None => GameState::new(bounds, base_speed),
    };

    let mut session = TerminalSession::enter()?;
    run(&mut session, state, &cli.theme)
}

fn run(session: &mut TerminalSession, mut state: GameState, theme_name: &str) -> io::Result<()> {
    let theme = theme_by_name(theme_name);
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(game_input) = input.poll_input(POLL_TIMEOUT)? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval(state.snake.speed()) {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// The speed value is a tick frequency, so the wait between ticks is
/// its reciprocal.
fn tick_interval(speed: u16) -> Duration {
    Duration::from_millis(1000 / u64::from(speed.max(1)))
}
