use pong_training::SimulationHost;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Training progress: the running turn, recent scores and the last
/// generation's statistics.
#[derive(Debug)]
pub struct StatusDisplay<'a, R> {
    host: &'a SimulationHost<R>,
    generations: usize,
    block: Option<Block<'a>>,
}

impl<'a, R> StatusDisplay<'a, R>
where
    R: Rng,
{
    pub fn new(host: &'a SimulationHost<R>, generations: usize) -> Self {
        Self {
            host,
            generations,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let session = self.host.session();
        let mut lines = vec![];

        match session.active_turn() {
            Some(turn) => {
                lines.push(label_value(
                    "GENERATION",
                    format!("{} / {}", turn.generation + 1, self.generations),
                    style::ACTIVE,
                ));
                lines.push(label_value(
                    "AGENT",
                    format!("#{}", turn.agent + 1),
                    style::ACTIVE,
                ));
                lines.push(label_value(
                    "TURN",
                    format!("{:.1} sec", turn.duration.as_secs_f64()),
                    style::ACTIVE,
                ));
                lines.push(label_value(
                    "SCORE",
                    session.score().to_string(),
                    score_style(session.score()),
                ));
            }
            None if self.host.is_driver_connected() => {
                lines.push(Line::styled("waiting for next agent", style::IDLE));
            }
            None => {
                lines.push(Line::styled("training finished", style::HIGHLIGHT));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled("RECENT TURNS", style::DIM));
        let mut recent: Vec<_> = self.host.recent_results().collect();
        recent.reverse();
        for result in recent {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "  gen {:>3} agent {:>3} ",
                        result.generation + 1,
                        result.agent + 1
                    ),
                    style::DEFAULT,
                ),
                Span::styled(format!("{:>6}", result.score), score_style(result.score)),
            ]));
        }

        if let Some(summary) = self.host.summaries().last() {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("GENERATION #{}", summary.generation + 1),
                style::DIM,
            ));
            lines.push(label_value("BEST", summary.best.to_string(), style::GAIN));
            lines.push(label_value(
                "MEDIAN",
                summary.median.to_string(),
                style::DEFAULT,
            ));
            lines.push(label_value(
                "MEAN",
                format!("{:.2}", summary.mean),
                style::DEFAULT,
            ));
            lines.push(label_value("WORST", summary.worst.to_string(), style::LOSS));
        }

        lines
    }
}

impl<R> Widget for StatusDisplay<'_, R>
where
    R: Rng,
{
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl<R> Widget for &StatusDisplay<'_, R>
where
    R: Rng,
{
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut paragraph = Paragraph::new(self.lines()).style(style::DEFAULT);
        if let Some(block) = &self.block {
            paragraph = paragraph.block(block.clone());
        }
        paragraph.render(area, buf);
    }
}

fn label_value(label: &'static str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<11}"), style::DIM),
        Span::styled(value, value_style),
    ])
}

fn score_style(score: i32) -> Style {
    if score < 0 { style::LOSS } else { style::GAIN }
}
