//! Full-screen terminal viewer for the analysis figures.

use std::io;

use crossterm::event::{self, Event};

use self::screen::FigureScreen;
use crate::figure::Figure;

mod screen;
mod widgets;

/// Events driving the viewer.
#[derive(Debug, Clone, derive_more::From)]
enum ViewerEvent {
    /// The screen needs to be redrawn.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(Event),
}

/// Redraws only after the state may have changed.
#[derive(Debug)]
struct EventLoop {
    dirty: bool,
}

impl EventLoop {
    fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    /// Returns the next event, blocking on terminal input when nothing needs
    /// to be drawn.
    fn next(&mut self) -> io::Result<ViewerEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(ViewerEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

/// Shows `figures` one at a time until the user quits.
pub fn run(figures: Vec<Figure>) -> io::Result<()> {
    if figures.is_empty() {
        return Ok(());
    }
    let mut screen = FigureScreen::new(figures);
    let mut events = EventLoop::new();

    ratatui::run(|terminal| {
        while !screen.should_exit() {
            match events.next()? {
                ViewerEvent::Render => {
                    terminal.draw(|f| screen.draw(f))?;
                }
                ViewerEvent::Crossterm(event) => screen.handle_event(&event),
            }
        }
        Ok(())
    })
}
