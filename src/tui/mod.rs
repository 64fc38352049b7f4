pub mod app;
pub mod event;
pub mod layout;
pub mod preview;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::controller::ScreenController;

use self::app::TuiApp;
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: &AppContext) -> Result<()> {
    let controller = ScreenController::new(ctx.cats.clone(), ctx.dogs.clone());
    let mut tui_app = TuiApp::new(controller);
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let config = &ctx.config;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors, &config.keybindings))?;

        // Blocking poll; yield afterwards so fetch tasks get to run on
        // single-threaded runtimes too.
        let event = event_handler.next()?;
        tokio::task::yield_now().await;

        if let AppEvent::Key(key) = event {
            let action = config.keybindings.get_action(&key);
            tui_app.handle_action(action);
        }

        if tui_app.controller.poll_events() > 0 {
            tui_app.set_status(format!(
                "Updated at {}",
                chrono::Local::now().format("%H:%M:%S")
            ));
        }
        tui_app.reap_finished();

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
