//! Terminal falling-blocks runner (default binary).
//!
//! Keys map 1:1 to engine commands (no key repeat handling). Gravity runs on
//! its own timer whose interval follows the current level.
//! Rendering goes through the framebuffer-based renderer in `term`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use falling_blocks::core::{Engine, GameSnapshot, HighScoreStore, MemoryStore, UniformSource};
use falling_blocks::input::{handle_app_key, handle_key_event, AppCommand};
use falling_blocks::store::JsonFileStore;
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::TICK_MS;
use falling_blocks::{AppConfig, MessageLog};

type Game = Engine<Box<dyn HighScoreStore>, UniformSource>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut log = MessageLog::new();

    let mut game = build_game(&config, &mut log)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game, &mut log));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log.push("Term", format_args!("failed to restore terminal: {}", e));
    }
    log.flush_to_stderr();
    result
}

fn build_game(config: &AppConfig, log: &mut MessageLog) -> Result<Game> {
    let store: Box<dyn HighScoreStore> = if config.stats_disabled {
        log.push("Store", "persistence disabled; high scores kept in memory");
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new(&config.stats_path))
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut game = Engine::new(config.board, store, UniformSource::new(seed))
        .context("invalid board configuration")?;
    drain_store_error(&mut game, log);
    Ok(game)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn drain_store_error(game: &mut Game, log: &mut MessageLog) {
    if let Some(e) = game.take_store_error() {
        log.push("Store", e);
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game, log: &mut MessageLog) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut level = game.level();
    let mut fall_interval = Duration::from_millis(game.fall_interval_ms() as u64);
    let mut last_fall = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into_with_message(&snap, log.last(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the end of this frame.
        let timeout = frame.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_app_key(key) {
                        Some(AppCommand::Quit) => break,
                        Some(AppCommand::DumpBoard) => {
                            log.push_lines("Board", &game.board().dump());
                        }
                        Some(AppCommand::SaveStats) => match game.flush_high_scores() {
                            Ok(()) => log.push("Store", "high scores saved"),
                            Err(e) => log.push("Store", e),
                        },
                        None => {
                            if let Some(action) = handle_key_event(key) {
                                game.apply_action(action);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_fall.elapsed() >= fall_interval {
            last_fall = Instant::now();
            game.gravity_tick();
        }

        if let Some(event) = game.take_last_event() {
            if event.new_high {
                let high = game.high_scores();
                log.push(
                    "Engine",
                    format_args!(
                        "new high: level {}, lines {}",
                        high.high_level, high.high_lines
                    ),
                );
            }
        }
        drain_store_error(game, log);

        // Level changes (including reset back to 1) retune the gravity timer.
        if game.level() != level {
            level = game.level();
            fall_interval = Duration::from_millis(game.fall_interval_ms() as u64);
        }
    }

    if let Err(e) = game.flush_high_scores() {
        log.push("Store", e);
    }
    Ok(())
}
