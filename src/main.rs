//! Terminal Snake runner (default binary).
//!
//! crossterm supplies input (keys and mouse drags) and the framebuffer
//! renderer draws each frame; the session's tick timer decides how long the
//! loop may block waiting for input.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::audio::TerminalBell;
use tui_snake::config::{self, Command, Config, USAGE};
use tui_snake::core::GameState;
use tui_snake::engine::{GameSession, MemoryStore, ScoreStore};
use tui_snake::input::{handle_key_event, should_quit, swipe_actions, SwipeTracker};
use tui_snake::logging;
use tui_snake::store::JsonFileStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Input poll timeout while no tick is scheduled (not started, paused, over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = match config::load() {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("tui-snake: {:#}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    logging::init(config.log_path.as_deref())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        difficulty = config.difficulty.as_str(),
        save = config.save,
        "starting"
    );
    let state = GameState::new(seed).with_difficulty(config.difficulty);

    if config.save {
        let store = JsonFileStore::in_dir(&config.scores_dir);
        tracing::info!(path = %store.path().display(), "high score file");
        play(GameSession::new(state, store), &config)
    } else {
        play(GameSession::new(state, MemoryStore::new()), &config)
    }
}

fn play<S: ScoreStore>(mut session: GameSession<S>, config: &Config) -> Result<()> {
    if !config.mute {
        session.subscribe(Box::new(TerminalBell::stdout()));
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    session.shutdown();
    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("game loop failed: {:#}", e);
    }
    result
}

fn run<S: ScoreStore>(term: &mut TerminalRenderer, session: &mut GameSession<S>) -> Result<()> {
    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut swipe = SwipeTracker::new();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = session
            .time_until_next_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action, Instant::now());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(direction) = swipe.handle_mouse(mouse) {
                        for action in swipe_actions(direction) {
                            dirty |= session.apply_action(action, Instant::now());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if session.poll(Instant::now()).is_some() {
            dirty = true;
        }
    }
}
