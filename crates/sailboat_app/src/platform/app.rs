use std::collections::VecDeque;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use sailboat_core::{update, AppState, Command, Effect, Mode, Msg};
use sailboat_engine::PageLoader;
use sailboat_logging::{sail_debug, sail_info, sail_warn};

use super::config::{config_path, load_config, AppConfig};
use super::effects::EffectRunner;
use super::input::{InputOutcome, SearchInput};
use super::logging;
use super::terminal::TerminalSession;
use super::ui;

/// Runs the browser until the user quits. `initial_query` is submitted as if
/// typed into the search bar.
pub fn run_app(initial_query: Option<String>) -> anyhow::Result<()> {
    let path = config_path();
    let (config, config_error) = match load_config(&path) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(&config.log_file, config.log_level());
    if let Some(err) = config_error {
        sail_warn!("ignoring config {}: {}", path.display(), err);
    }

    let loader = PageLoader::new(config.fetch_settings()).context("starting the fetch runtime")?;
    let runner = EffectRunner::new(loader);
    let mut session = TerminalSession::start()?;
    sail_info!("session started");

    let size = session.size()?;
    let mut inbox = VecDeque::from([ui::layout::viewport_msg(Rect::new(
        0,
        0,
        size.width,
        size.height,
    ))]);
    let mut input = SearchInput::default();
    if let Some(query) = initial_query {
        input.set_value(&query);
        inbox.push_back(Msg::InputChanged(input.value().to_string()));
        inbox.push_back(Msg::QuerySubmitted);
    }

    let mut state = AppState::new();
    let mut needs_draw = true;
    loop {
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            if effects.is_empty() {
                continue;
            }
            if effects.iter().any(|effect| matches!(effect, Effect::Load { .. })) {
                // Show the submitted query while the page loads.
                state.consume_dirty();
                session.draw(|frame| ui::render::render(frame, &state.view(), input.cursor()))?;
            }
            inbox.extend(runner.run(effects, &mut input));
        }

        if state.is_terminated() {
            break;
        }
        if state.consume_dirty() || needs_draw {
            session.draw(|frame| ui::render::render(frame, &state.view(), input.cursor()))?;
            needs_draw = false;
        }

        let event = event::read().context("reading terminal input")?;
        match translate_event(event, state.mode(), &mut input) {
            Some(msg) => {
                sail_debug!("event -> {:?}", msg);
                inbox.push_back(msg);
            }
            // Cursor moves live outside the core state.
            None => needs_draw = true,
        }
    }

    sail_info!("session finished");
    Ok(())
}

/// Turns a terminal event into the message it means in `mode`.
///
/// Keys typed while awaiting a query edit `input` first.
fn translate_event(event: Event, mode: Mode, input: &mut SearchInput) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, mode, input),
        Event::Resize(width, height) => {
            Some(ui::layout::viewport_msg(Rect::new(0, 0, width, height)))
        }
        _ => None,
    }
}

fn translate_key(key: KeyEvent, mode: Mode, input: &mut SearchInput) -> Option<Msg> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Interrupted);
    }
    match mode {
        Mode::AwaitingQuery => match input.handle_key(key) {
            InputOutcome::Unchanged => None,
            InputOutcome::Edited => Some(Msg::InputChanged(input.value().to_string())),
            InputOutcome::Submitted => Some(Msg::QuerySubmitted),
        },
        Mode::Loaded => match key.code {
            KeyCode::Char(ch) if is_plain(key.modifiers) => Command::from_char(ch).map(Msg::Command),
            KeyCode::Down => Some(Msg::Command(Command::ScrollDown)),
            KeyCode::Up => Some(Msg::Command(Command::ScrollUp)),
            _ => None,
        },
        Mode::Terminated => None,
    }
}

/// No modifier other than Shift is held.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}
