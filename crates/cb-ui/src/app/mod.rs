//! Board application

mod render;
mod state;
mod view;

pub use state::{AppMode, AppState};
pub use view::BoardView;

use anyhow::Result;
use cb_core::board::BoardController;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::theme::Theme;

/// Terminal application around a [`BoardView`]
pub struct App {
    /// Board state and key handling
    pub view: BoardView,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl App {
    /// Take over the terminal. `runtime` drives the controller's async calls
    /// and must not be the runtime of the calling thread.
    pub fn new(board: BoardController, runtime: Handle) -> Result<Self> {
        // Restore the terminal if anything panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            view: BoardView::new(board, runtime),
            terminal,
            theme: Theme::default(),
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        self.view.state.set_message("Loading...");
        self.draw()?;
        self.view.load();
        self.view.state.clear_message();

        loop {
            self.draw()?;

            if event::poll(Duration::from_millis(100))? {
                if let event::Event::Key(key) = event::read()? {
                    if self.view.blocks_on(&key) {
                        self.view.state.set_message("Working...");
                        self.draw()?;
                        self.view.state.clear_message();
                    }
                    self.view.handle_key(key);
                }
            }

            if self.view.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let view = &self.view;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| render::render(frame, view, theme))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}
