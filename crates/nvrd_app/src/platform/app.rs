use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use nvrd_core::{update, Msg, ReaderConfig, ReaderState};
use nvrd_engine::{ensure_dir, FetchSettings};
use nvrd_logging::{initialize_file_logger, nvrd_info, nvrd_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::{DefaultTerminal, Terminal, TerminalOptions, Viewport};

use super::effects::EffectRunner;
use super::keymap::msg_for_key;
use super::paths::AppPaths;
use super::persistence::HistoryStore;
use super::ui;
use crate::cli::Cli;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let paths = AppPaths::resolve();
    match ensure_dir(paths.data_dir()) {
        Ok(()) => initialize_file_logger(&paths.log_file(), cli.verbose),
        Err(err) => eprintln!(
            "Warning: data directory {:?} is unavailable: {}",
            paths.data_dir(),
            err
        ),
    }

    let history = HistoryStore::new(paths.data_dir().clone());
    let start = match history.load() {
        Some(record) if ask_resume().context("read resume answer")? => {
            nvrd_info!("Resuming {} at line {}", record.last_url, record.cursor);
            Msg::Resume(record)
        }
        _ => {
            nvrd_info!("Opening {}", cli.read);
            Msg::Open {
                url: cli.read.clone(),
                cursor: 0,
            }
        }
    };

    let config = ReaderConfig {
        width: cli.width,
        height: cli.lines.max(1),
    };
    let runner = EffectRunner::new(FetchSettings::default(), history);

    enable_raw_mode().context("enable raw mode")?;
    let rows = inline_rows(config.height);
    let result = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions {
            viewport: Viewport::Inline(rows),
        },
    )
    .context("create terminal")
    .and_then(|mut terminal| event_loop(&mut terminal, &runner, config, start));
    disable_raw_mode().context("disable raw mode")?;
    println!();

    if let Err(err) = &result {
        nvrd_warn!("Reader stopped: {:#}", err);
    }
    result
}

fn ask_resume() -> io::Result<bool> {
    print!("resume previous session? Y/n ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(accepts_resume(&answer))
}

fn accepts_resume(answer: &str) -> bool {
    matches!(answer.trim(), "" | "y" | "Y")
}

/// Terminal rows for `height` text lines plus the status line.
fn inline_rows(height: usize) -> u16 {
    u16::try_from(height.saturating_add(1)).unwrap_or(u16::MAX)
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runner: &EffectRunner,
    config: ReaderConfig,
    start: Msg,
) -> anyhow::Result<()> {
    let mut state = ReaderState::new(config);
    if dispatch(&mut state, runner, start) {
        return Ok(());
    }

    let mut redraw = true;
    loop {
        for msg in runner.pending_messages() {
            if dispatch(&mut state, runner, msg) {
                return Ok(());
            }
        }

        if state.consume_dirty() || redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render(frame, &view))?;
            redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(msg) = msg_for_key(key) {
                    if dispatch(&mut state, runner, msg) {
                        return Ok(());
                    }
                }
            }
            Event::Resize(_, _) => {
                terminal.autoresize()?;
                redraw = true;
            }
            _ => {}
        }
    }
}

/// Apply `msg` and run its effects. Returns `true` when the reader should exit.
fn dispatch(state: &mut ReaderState, runner: &EffectRunner, msg: Msg) -> bool {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects)
}
