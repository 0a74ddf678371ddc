use crate::{AppState, Command, Effect, Mode, Msg, ScrollDirection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewportResized { width, height } => {
            state.resize_viewport(width, height);
            state.mark_dirty();
            Vec::new()
        }
        Msg::InputChanged(text) => {
            if state.mode() != Mode::AwaitingQuery {
                return (state, Vec::new());
            }
            state.set_query(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::QuerySubmitted => {
            if state.mode() != Mode::AwaitingQuery {
                return (state, Vec::new());
            }
            let query = state.query().trim().to_string();
            if query.is_empty() {
                return (state, Vec::new());
            }
            state.set_query(query.clone());
            state.mark_dirty();
            vec![Effect::Load { query }]
        }
        Msg::PageLoaded(page) => {
            if state.is_terminated() {
                return (state, Vec::new());
            }
            state.load_page(page);
            state.set_mode(Mode::Loaded);
            state.mark_dirty();
            Vec::new()
        }
        Msg::Command(command) => {
            if state.mode() != Mode::Loaded {
                return (state, Vec::new());
            }
            apply_command(&mut state, command)
        }
        Msg::Interrupted => {
            state.set_mode(Mode::Terminated);
            vec![Effect::Shutdown]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_command(state: &mut AppState, command: Command) -> Vec<Effect> {
    match command {
        Command::Quit => {
            state.set_mode(Mode::Terminated);
            vec![Effect::Shutdown]
        }
        Command::Search => {
            state.discard_page();
            state.set_query(String::new());
            state.set_mode(Mode::AwaitingQuery);
            state.mark_dirty();
            vec![Effect::FocusSearch]
        }
        Command::ScrollDown | Command::ScrollUp => {
            let direction = if command == Command::ScrollDown {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            // The held sequence is redrawn even when already at a boundary.
            state.scroll(direction);
            state.mark_dirty();
            Vec::new()
        }
    }
}
