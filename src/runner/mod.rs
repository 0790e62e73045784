//! The control loop that drives a [`Heroine`].
//!
//! Each step ticks the heroine, flushes the output, then blocks the
//! calling thread for the configured period. [`Runner::run`] repeats
//! this until its [`Shutdown`] handle is triggered; nothing in the
//! binary triggers it, so the process runs until it is killed.

mod config;
mod error;
mod shutdown;

pub use config::{RunnerConfig, DEFAULT_TICK_PERIOD};
pub use error::RunError;
pub use shutdown::Shutdown;

use crate::clock::Clock;
use crate::heroine::Heroine;
use std::io::Write;
use std::thread;
use tracing::info;

/// Owns a heroine, her clock, and the stream her states write to.
///
/// # Example
///
/// ```rust
/// use heroine::clock::FixedClock;
/// use heroine::runner::{Runner, RunnerConfig};
/// use std::time::Duration;
///
/// let config = RunnerConfig {
///     tick_period: Duration::ZERO,
///     ..RunnerConfig::default()
/// };
/// let mut runner = Runner::new(FixedClock::from_epoch_secs(10), Vec::new(), config);
///
/// runner.run_for(2).unwrap();
///
/// assert_eq!(runner.output(), b"walking\nwalking\n");
/// ```
#[derive(Debug)]
pub struct Runner<C, W> {
    heroine: Heroine,
    clock: C,
    out: W,
    config: RunnerConfig,
    shutdown: Shutdown,
}

impl<C: Clock, W: Write> Runner<C, W> {
    /// Create a runner around a fresh, walking heroine.
    pub fn new(clock: C, out: W, config: RunnerConfig) -> Self {
        let heroine = Heroine::with_history_limit(config.history_limit);
        Self::with_heroine(heroine, clock, out, config)
    }

    /// Create a runner around an existing heroine.
    pub fn with_heroine(heroine: Heroine, clock: C, out: W, config: RunnerConfig) -> Self {
        Self {
            heroine,
            clock,
            out,
            config,
            shutdown: Shutdown::new(),
        }
    }

    pub fn heroine(&self) -> &Heroine {
        &self.heroine
    }

    /// The output stream the heroine's states write to.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mutable access to the clock, for driving it from tests.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// A handle that stops [`run`](Runner::run) after the current step.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Replace the runner's stop flag with one created elsewhere.
    ///
    /// Lets a handle exist before the runner does, for example one held
    /// by the output stream.
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Tick once, flush, then sleep for the tick period.
    pub fn step(&mut self) -> Result<(), RunError> {
        self.heroine
            .tick(&self.clock, &mut self.out)
            .map_err(|source| RunError::Tick {
                tick: self.heroine.ticks() + 1,
                source,
            })?;
        self.out.flush().map_err(RunError::Flush)?;

        if !self.config.tick_period.is_zero() {
            thread::sleep(self.config.tick_period);
        }
        Ok(())
    }

    /// Step until shutdown is requested.
    pub fn run(&mut self) -> Result<(), RunError> {
        info!(
            tick_period = ?self.config.tick_period,
            state = ?self.heroine.state(),
            "runner started"
        );
        while !self.shutdown.is_requested() {
            self.step()?;
        }
        let history = self.heroine.history();
        info!(
            ticks = self.heroine.ticks(),
            transitions = history.len() as u64 + history.evicted(),
            span = ?history.duration(),
            "runner stopped"
        );
        Ok(())
    }

    /// Step at most `ticks` times, stopping early on shutdown.
    ///
    /// Returns the number of steps performed.
    pub fn run_for(&mut self, ticks: u64) -> Result<u64, RunError> {
        let mut done = 0;
        while done < ticks && !self.shutdown.is_requested() {
            self.step()?;
            done += 1;
        }
        Ok(done)
    }

    /// Consume the runner, returning the heroine and the output stream.
    pub fn into_parts(self) -> (Heroine, W) {
        (self.heroine, self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::heroine::{HeroineState, TickError};
    use std::io;
    use std::time::{Duration, Instant};

    fn quick() -> RunnerConfig {
        RunnerConfig {
            tick_period: Duration::ZERO,
            ..RunnerConfig::default()
        }
    }

    struct UnflushableSink;

    impl Write for UnflushableSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_for_writes_one_line_per_tick() {
        let mut runner = Runner::new(FixedClock::from_epoch_secs(10), Vec::new(), quick());

        assert_eq!(runner.run_for(3).unwrap(), 3);

        assert_eq!(runner.output(), b"walking\nwalking\nwalking\n");
        assert_eq!(runner.heroine().ticks(), 3);
    }

    #[test]
    fn clock_can_be_advanced_between_steps() {
        let mut runner = Runner::new(FixedClock::from_epoch_secs(9), Vec::new(), quick());

        runner.step().unwrap();
        runner.clock_mut().set_epoch_secs(14);
        runner.step().unwrap();

        let (heroine, out) = runner.into_parts();
        assert_eq!(out, b"walking\nJumping\n");
        assert_eq!(heroine.state(), HeroineState::Walking);
    }

    #[test]
    fn shutdown_before_run_performs_no_ticks() {
        let mut runner = Runner::new(FixedClock::from_epoch_secs(1), Vec::new(), quick());
        runner.shutdown_handle().request();

        runner.run().unwrap();
        assert_eq!(runner.run_for(5).unwrap(), 0);

        assert!(runner.output().is_empty());
    }

    #[test]
    fn installed_shutdown_is_the_one_run_checks() {
        let shutdown = Shutdown::new();
        let mut runner = Runner::new(FixedClock::from_epoch_secs(1), Vec::new(), quick())
            .with_shutdown(shutdown.clone());

        assert!(!runner.shutdown_handle().is_requested());
        shutdown.request();
        assert!(runner.shutdown_handle().is_requested());

        runner.run().unwrap();
        assert_eq!(runner.heroine().ticks(), 0);
    }

    #[test]
    fn history_limit_comes_from_config() {
        let config = RunnerConfig {
            history_limit: 4,
            ..quick()
        };
        let runner = Runner::new(FixedClock::from_epoch_secs(1), Vec::new(), config);

        assert_eq!(runner.heroine().history().limit(), 4);
    }

    #[test]
    fn step_sleeps_for_tick_period() {
        let config = RunnerConfig {
            tick_period: Duration::from_millis(20),
            ..RunnerConfig::default()
        };
        let mut runner = Runner::new(FixedClock::from_epoch_secs(1), io::sink(), config);

        let start = Instant::now();
        runner.step().unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn write_failure_names_the_tick() {
        let mut runner = Runner::new(FixedClock::from_epoch_secs(1), ClosedSink, quick());

        let err = runner.run_for(1).unwrap_err();

        match err {
            RunError::Tick { tick, source } => {
                assert_eq!(tick, 1);
                assert!(matches!(source, TickError::Output(_)));
            }
            other => panic!("expected tick error, got {other:?}"),
        }
    }

    #[test]
    fn flush_failure_stops_the_loop() {
        let mut runner = Runner::new(FixedClock::from_epoch_secs(1), UnflushableSink, quick());

        let err = runner.run().unwrap_err();

        assert!(matches!(err, RunError::Flush(_)));
        assert_eq!(runner.heroine().ticks(), 1);
    }
}
