use rand::Rng;

use crate::{evolution::Evolution, session::SimulationSession, summary::GenerationSummary};

/// Number of simulation frames in a turn of `duration` at `frame_rate` Hz.
#[must_use]
pub fn frames_per_turn(duration: std::time::Duration, frame_rate: f64) -> u64 {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (duration.as_secs_f64() * frame_rate).round() as u64;
    frames
}

/// Runs the whole evolution on the calling thread with a simulated clock.
///
/// Every turn gets exactly the number of frames it would get at `frame_rate`
/// on screen, but frames are computed back to back. Returns the summary of each
/// evaluated generation.
pub fn run_headless<R1, R2>(
    evolution: &mut Evolution<R1>,
    session: &mut SimulationSession<R2>,
    frame_rate: f64,
    dt: f64,
) -> Vec<GenerationSummary>
where
    R1: Rng,
    R2: Rng,
{
    let mut summaries = vec![];
    while let Some(turn) = evolution.next_turn() {
        let frames = frames_per_turn(turn.duration, frame_rate);
        session.bind(turn);
        for _ in 0..frames {
            session.tick(dt);
        }
        let score = session.score_and_reset();
        if let Some(summary) = evolution.finish_turn(score) {
            summaries.push(summary);
        }
    }
    summaries
}
