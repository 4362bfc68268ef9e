use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for frame-paced TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`. Use this to configure the frame rate.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances the application by one frame. Called right before `draw`.
    fn update(&mut self, runtime: &mut Runtime);

    /// Draws the current state.
    fn draw(&self, frame: &mut Frame);
}
