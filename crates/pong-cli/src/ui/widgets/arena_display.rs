use pong_engine::{Arena, Bounds};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Context, Rectangle},
    },
};

use crate::ui::widgets::color;

/// Draws the arena walls, the ball and the paddle.
#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    arena: &'a Arena,
    block: Option<Block<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(arena: &'a Arena) -> Self {
        Self { arena, block: None }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bounds = self.arena.bounds();
        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([bounds.min.x, bounds.max.x])
            .y_bounds([bounds.min.y, bounds.max.y])
            .paint(|ctx| {
                draw_box(ctx, bounds, color::GRAY);
                draw_box(ctx, &self.arena.paddle().hit_box(), color::CYAN);
                draw_box(ctx, &self.arena.ball().hit_box(), color::YELLOW);
            });
        if let Some(block) = &self.block {
            canvas = canvas.block(block.clone());
        }
        canvas.render(area, buf);
    }
}

fn draw_box(ctx: &mut Context<'_>, bounds: &Bounds, color: Color) {
    ctx.draw(&Rectangle {
        x: bounds.min.x,
        y: bounds.min.y,
        width: bounds.width(),
        height: bounds.height(),
        color,
    });
}
