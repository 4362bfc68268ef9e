use crossterm::event::{Event, KeyCode, KeyModifiers};
use pong_training::SimulationHost;
use rand_pcg::Pcg64Mcg;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Text},
    widgets::Block,
};
use ratatui_runtime::{App, Runtime};

use crate::{
    config::TrainConfig,
    ui::widgets::{ArenaDisplay, StatusDisplay, style},
};

const STATUS_WIDTH: u16 = 34;

#[derive(Debug)]
pub struct ArenaApp {
    host: SimulationHost<Pcg64Mcg>,
    frame_rate: f64,
    time_step: f64,
    generations: usize,
    frames: u64,
    is_exiting: bool,
}

impl ArenaApp {
    pub fn new(host: SimulationHost<Pcg64Mcg>, config: &TrainConfig) -> Self {
        Self {
            host,
            frame_rate: config.frame_rate,
            time_step: config.time_step,
            generations: config.schedule.generations,
            frames: 0,
            is_exiting: false,
        }
    }

    /// Whether the driver finished its work and closed the UI.
    pub fn run_complete(&self) -> bool {
        self.host.exit_requested()
    }
}

impl App for ArenaApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_frame_rate(self.frame_rate);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting || self.host.exit_requested()
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.is_exiting = true;
                }
                _ => {}
            }
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.host.frame(self.time_step);
        self.frames = runtime.frame_count();
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [arena_area, status_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(STATUS_WIDTH)])
                .areas(main_area);

        let arena = ArenaDisplay::new(self.host.session().arena())
            .block(Block::bordered().title(Line::from("ARENA").centered()));
        let status = StatusDisplay::new(&self.host, self.generations)
            .block(Block::bordered().title(Line::from("TRAINING").centered()));
        let help = Text::from(format!("Frame {} | Controls: q (Quit)", self.frames))
            .style(style::DIM)
            .centered();

        frame.render_widget(&arena, arena_area);
        frame.render_widget(&status, status_area);
        frame.render_widget(help, help_area);
    }
}
