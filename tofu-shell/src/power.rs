//! Power control hooks
//!
//! `reboot` and `shutdown` end in a one-way hardware action: a reset pulse
//! through the keyboard controller or a halt instruction. The shell only
//! raises the signal through this trait; what happens next belongs to the
//! platform.

use crate::command::HaltSignal;

/// Receives the terminal reboot/shutdown signals
pub trait PowerControl {
    fn reboot(&mut self);
    fn shutdown(&mut self);
}

/// Logs the signal and returns; the hosted stand-in for real hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPower;

impl PowerControl for LoggingPower {
    fn reboot(&mut self) {
        log::info!("reboot signal raised");
    }

    fn shutdown(&mut self) {
        log::info!("shutdown signal raised");
    }
}

/// Records every signal received, for tests
#[derive(Debug, Clone, Default)]
pub struct RecordingPower {
    pub signals: Vec<HaltSignal>,
}

impl PowerControl for RecordingPower {
    fn reboot(&mut self) {
        self.signals.push(HaltSignal::Reboot);
    }

    fn shutdown(&mut self) {
        self.signals.push(HaltSignal::Shutdown);
    }
}
