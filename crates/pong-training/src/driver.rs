use std::{thread, time::Duration};

use rand::Rng;

use crate::{
    evolution::Evolution,
    generation::Generation,
    host::{DriverError, SessionHandle},
};

/// Waits out an agent's turn.
pub trait TurnTimer {
    /// Blocks for `duration`. Never returns early.
    fn wait(&mut self, duration: Duration);
}

/// Sleeps the calling thread for the full turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClockTimer;

impl TurnTimer for WallClockTimer {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Runs an [`Evolution`] against a session owned by another thread.
///
/// For every turn the driver binds the agent, waits for the turn timer, then
/// blocks until the host has captured the score and reset the session. It does
/// nothing else while a turn is running.
#[derive(Debug)]
pub struct EvolutionDriver<R, T> {
    evolution: Evolution<R>,
    handle: SessionHandle,
    timer: T,
}

impl<R, T> EvolutionDriver<R, T>
where
    R: Rng,
    T: TurnTimer,
{
    #[must_use]
    pub fn new(evolution: Evolution<R>, handle: SessionHandle, timer: T) -> Self {
        Self {
            evolution,
            handle,
            timer,
        }
    }

    /// Plays every scheduled generation and returns the generation bred from
    /// the last one.
    ///
    /// Fails with [`DriverError::SessionClosed`] if the host goes away
    /// mid-run.
    pub fn run(mut self) -> Result<Generation, DriverError> {
        while let Some(turn) = self.evolution.next_turn() {
            let duration = turn.duration;
            self.handle.bind_agent(turn)?;
            self.timer.wait(duration);
            let score = self.handle.request_score_and_reset()?;
            if let Some(summary) = self.evolution.finish_turn(score) {
                self.handle.report(summary)?;
            }
        }
        Ok(self.evolution.into_generation())
    }
}

#[cfg(test)]
mod tests {
    use pong_engine::{Bounds, DEFAULT_TIME_STEP};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        evolution::EvolutionSchedule,
        host::{self, SimulationHost},
        session::SimulationSession,
    };

    /// Sleeps a fixed short time regardless of the requested duration.
    struct ShortTimer;

    impl TurnTimer for ShortTimer {
        fn wait(&mut self, _duration: Duration) {
            thread::sleep(Duration::from_millis(2));
        }
    }

    fn setup(generations: usize, size: usize) -> (SimulationHost<Pcg64Mcg>, SessionHandle, Evolution<Pcg64Mcg>) {
        let mut rng = Pcg64Mcg::seed_from_u64(51);
        let generation = Generation::random(size, &mut rng).unwrap();
        let schedule = EvolutionSchedule {
            generations,
            ..EvolutionSchedule::default()
        };
        let evolution = Evolution::new(schedule, generation, rng);
        let session =
            SimulationSession::new(Bounds::from_size(1024.0, 1024.0), Pcg64Mcg::seed_from_u64(52));
        let (host, handle) = host::session_channel(session);
        (host, handle, evolution)
    }

    #[test]
    fn test_driver_plays_every_turn_through_the_host() {
        let (mut host, handle, evolution) = setup(3, 4);
        let driver = thread::spawn(move || EvolutionDriver::new(evolution, handle, ShortTimer).run());

        while host.is_driver_connected() {
            host.frame(DEFAULT_TIME_STEP);
            thread::yield_now();
        }

        let generation = driver.join().unwrap().unwrap();
        assert_eq!(generation.len(), 4);
        assert!(generation.agents().iter().all(|a| !a.is_scored()));

        let results: Vec<_> = host.recent_results().map(|r| (r.generation, r.agent)).collect();
        assert_eq!(results.len(), 12);
        assert_eq!(results[0], (0, 0));
        assert_eq!(results[11], (2, 3));
        assert_eq!(host.summaries().len(), 3);
        assert!(host.session().active_turn().is_none());
    }

    #[test]
    fn test_driver_stops_when_host_is_gone() {
        let (host, handle, evolution) = setup(1, 2);
        drop(host);
        let result = EvolutionDriver::new(evolution, handle, ShortTimer).run();
        assert!(matches!(result, Err(DriverError::SessionClosed)));
    }
}
