//! Terminal rendering and event loop for dirnav.
//!
//! Handles setup/teardown of raw mode, alternate screen and mouse capture, and feeds
//! events (keypress, mouse click, resize) to the app logic.

use crate::app::{AppState, KeypressResult};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::time::Instant;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal(app: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )?;
    result
}

/// Restores the terminal without a handle to it, used by the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
}

/// Draws, then blocks for the next event and dispatches it. Returns on quit.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    let clock = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_keypress(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let target = app.metrics().hit_test(mouse.column, mouse.row);
                let at_ms = clock.elapsed().as_millis() as u64;
                app.handle_click(target, at_ms)
            }
            // resize and everything else only needs the redraw at the top of the loop
            _ => KeypressResult::Continue,
        };

        match result {
            KeypressResult::Quit => break,
            KeypressResult::Recovered => {
                // the viewer covered part of the list
                terminal.clear()?;
            }
            KeypressResult::Continue | KeypressResult::Consumed => {}
        }
    }
    tracing::debug!("event loop finished");
    Ok(())
}
