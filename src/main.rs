use std::io::{stdout, BufWriter};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use hk97::display::TerminalCanvas;
use hk97::game_loop;
use hk97::input::TerminalInput;
use hk97::{logging, GameConfig, GameError};

const TITLE: &str = "Hong Kong 97 fan game";

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    if let Some(path) = logging::init()? {
        log::info!("logging to {}", path.display());
    }

    let cfg = GameConfig::default();
    cfg.validate()?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(TITLE))?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    log::debug!("keyboard enhancement: {}", keyboard_enhanced);

    let result = play(&mut out, &cfg);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("{}", err);
    }
    result
}

fn play<W: std::io::Write>(out: &mut W, cfg: &GameConfig) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(out, cfg, cols, rows);
    let mut input = TerminalInput::new();
    let mut rng = thread_rng();

    game_loop::run(&mut canvas, &mut input, cfg, &mut rng)?;
    Ok(())
}
