//! storefront-tui - terminal landing page
//!
//! Renders the storefront landing page with a working newsletter signup
//! form. Logs go to a file in the data directory, never to the screen.

use libstorefront::config::resolve_data_path;
use libstorefront::logging::LoggingConfig;
use storefront_tui::{
    app::{
        event::EventHandler, event::TuiEvent, is_app_key, reduce, Action, AppState, Focus,
        UiConfig,
    },
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, widgets},
};

fn main() {
    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    init_logging();

    // Config problems are reported before the screen is taken over
    let services = ServiceHandle::new()?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, services);

    restore_terminal(terminal)?;

    result
}

/// Log to `<data_dir>/storefront/storefront-tui.log`, or not at all
fn init_logging() {
    let Ok(dir) = resolve_data_path() else {
        return;
    };
    let path = dir.join("storefront-tui.log");
    if let Err(e) = LoggingConfig::default().init_file(&path) {
        eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
    }
}

fn run_app(terminal: &mut Tui, mut services: ServiceHandle) -> Result<()> {
    let mut state = AppState::with_config(UiConfig::from_section(&services.config().ui));
    let mut textarea = widgets::email_textarea();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    tracing::info!(form_id = %services.form().id(), "Landing page started");

    loop {
        // Completions that came due since the last pass
        for event in services.poll() {
            state = reduce(state, Action::Form(event));
        }

        // A successful submission clears the draft; the field follows
        if services.form().state().draft.is_empty() && !textarea.is_empty() {
            textarea = widgets::email_textarea();
        }

        let view = services.form().input_view();
        widgets::style_text_input(
            &mut textarea,
            &view,
            state.focus == Focus::Email,
            state.config.colors_enabled,
        );

        let mut scroll_max = state.scroll_max;
        terminal.draw(|frame| {
            scroll_max = ui::render(frame, &state, &textarea, services.form().state());
        })?;
        if scroll_max != state.scroll_max {
            state = reduce(state, Action::ScrollBounds(scroll_max));
        }

        let action = match event_handler.next()? {
            // Typing goes to the field; shell bindings still reach the reducer
            TuiEvent::Key(key) if state.editing_email() && !is_app_key(&key) => {
                if textarea.input(key) {
                    Action::EmailChanged(textarea.lines().concat())
                } else {
                    Action::Tick
                }
            }
            TuiEvent::Paste(text) if state.editing_email() => {
                textarea.insert_str(text.lines().collect::<String>());
                Action::EmailChanged(textarea.lines().concat())
            }
            other => other.into(),
        };

        state = reduce(state, action);

        if let Some(intent) = state.take_intent() {
            services.apply(intent);
        }

        if state.should_quit {
            break;
        }
    }

    services.shutdown();
    tracing::info!("Landing page closed");

    Ok(())
}
