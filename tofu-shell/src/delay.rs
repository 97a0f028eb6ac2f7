//! Delay between shell iterations
//!
//! The original pacing is a busy-wait that blocks the single execution
//! context for its whole duration. [`SpinDelay`] reproduces that;
//! [`NoDelay`] elapses instantly so tests carry no real-time dependence.

/// One pacing pause per shell iteration
pub trait Delay {
    fn wait(&mut self);
}

/// Busy-waits for a fixed number of spin iterations
///
/// Blocks everything while it runs; it never yields or sleeps.
#[derive(Debug, Clone, Copy)]
pub struct SpinDelay {
    spins: u64,
}

impl SpinDelay {
    /// Spin count used by the demo runner between commands
    pub const DEMO_SPINS: u64 = 20_000_000;

    pub const fn new(spins: u64) -> Self {
        SpinDelay { spins }
    }

    pub const fn demo() -> Self {
        Self::new(Self::DEMO_SPINS)
    }
}

impl Delay for SpinDelay {
    fn wait(&mut self) {
        for _ in 0..self.spins {
            std::hint::spin_loop();
        }
    }
}

/// Elapses instantly
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&mut self) {}
}
