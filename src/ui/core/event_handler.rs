use crossterm::event::{poll, Event, KeyEvent};
use std::time::Duration;

/// Blocking event source for the synchronous UI loop.
///
/// Every public store operation runs to completion between two calls to
/// [`EventHandler::next_event`], which is all the single-threaded model
/// needs: nothing else runs concurrently.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
        }
    }

    pub fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Wait up to the poll timeout for a terminal event, otherwise tick
        if poll(self.poll_timeout)? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
