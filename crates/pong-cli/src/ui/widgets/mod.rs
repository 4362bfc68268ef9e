pub use self::{arena_display::*, status_display::*};

mod arena_display;
mod status_display;

mod color {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_only(color: Color) -> Style {
        Style::new().fg(color)
    }

    pub const DEFAULT: Style = fg_only(color::WHITE);
    pub const DIM: Style = fg_only(color::GRAY);
    pub const ACTIVE: Style = fg_only(color::WHITE);
    pub const IDLE: Style = fg_only(color::GRAY);
    pub const GAIN: Style = fg_only(color::GREEN);
    pub const LOSS: Style = fg_only(color::RED);
    pub const HIGHLIGHT: Style = fg_only(color::YELLOW);
}
