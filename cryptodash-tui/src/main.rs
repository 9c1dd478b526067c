//! CRYPTODASH TUI entry point.

use cryptodash_core::default_menu;
use cryptodash_tui::config::TuiConfig;
use cryptodash_tui::error::TuiError;
use cryptodash_tui::events::TuiEvent;
use cryptodash_tui::keys::map_key;
use cryptodash_tui::logging::init_logging;
use cryptodash_tui::state::App;
use cryptodash_tui::subscription::EventSubscription;
use cryptodash_tui::views::render_view;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let menu = default_menu();
    config.validate_against_menu(&menu)?;
    init_logging(&config)?;
    install_panic_hook()?;
    tracing::info!(
        default_location = %config.default_location,
        cell_width = config.cell_width,
        "starting dashboard"
    );

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let screen = crossterm::terminal::size().ok();
    let mut app = App::with_menu(config, menu, screen);

    let (event_tx, event_rx) = mpsc::channel::<TuiEvent>(256);
    let mut subscription = EventSubscription::spawn(event_tx);

    // `run` owns the receiver, so the channel is closed on every exit path
    // before the reader is joined; a reader parked in blocking_send is freed.
    let result = run(&mut terminal, &mut app, event_rx).await;
    app.shutdown();
    subscription.cancel();
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut event_rx: mpsc::Receiver<TuiEvent>,
) -> Result<(), TuiError> {
    while !app.should_quit {
        terminal.draw(|f| render_view(f, app))?;

        let Some(event) = event_rx.recv().await else {
            break;
        };
        handle_event(app, event);
    }
    Ok(())
}

fn handle_event(app: &mut App, event: TuiEvent) {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                app.handle_action(action);
            }
        }
        TuiEvent::Mouse(mouse) => app.handle_mouse(mouse),
        TuiEvent::Resize { width, height } => app.handle_resize(width, height),
    }
}

fn install_panic_hook() -> Result<(), TuiError> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook
        .install()
        .map_err(|err| TuiError::PanicHook(err.to_string()))?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        tracing::error!(panic = %info, "dashboard panicked");
        panic_hook(info);
    }));
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}
