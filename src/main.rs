//! Terminal binary clock (default binary).
//!
//! Shows the time as nibble tiles using crossterm for input and a
//! framebuffer-based renderer. The loop sleeps in `event::poll` until either
//! a key arrives or the clock value is due to change.

mod cli;

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use bin_clock::app::ClockApp;
use bin_clock::core::{SystemTimeSource, TimeSource};
use bin_clock::input::{handle_key_event, should_quit};
use bin_clock::settings::SettingsStore;
use bin_clock::term::{ClockView, FrameBuffer, FrameGate, TerminalRenderer, Viewport};

use cli::Cli;

/// Redraw at least this often even when nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args)?;

    let mut store = SettingsStore::load(&args.settings)?;
    if let Some(id) = args.profile {
        store.set_active_profile(id);
    }
    let view = ClockView::new(args.px_per_col, args.px_per_row);
    let mut app = ClockApp::new(store, args.mode, view);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::error!("failed to restore terminal: {:#}", e);
    }
    result
}

fn init_logging(args: &Cli) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut ClockApp) -> Result<()> {
    let source = SystemTimeSource;
    let mut gate = FrameGate::new(REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let value = app.value(&source);
        let now_ms = started.elapsed().as_millis() as u64;

        if gate.should_render(now_ms, app.fingerprint(value, viewport)) {
            log::trace!("tick: value {:#x}", value);
            app.draw(value, source.utc_offset_secs(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the value changes.
        if !event::poll(app.next_delay(&source))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if app.apply(action) {
                        gate.force();
                    }
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                gate.force();
            }
            _ => {}
        }
    }
}
