//! Tofu Shell
//!
//! The command interpreter for the tofu console:
//! - Fixed exact-match command registry and dispatcher
//! - Screen banners (help, system info, memory report, logo, welcome)
//! - Injectable command source, delay, and power-control seams
//! - The prompt/read/dispatch shell state machine
//!
//! Everything here is deterministic: with a scripted source and a no-op
//! delay the full shell run is reproducible cell for cell.

pub mod banner;
pub mod command;
pub mod delay;
pub mod power;
pub mod shell;
pub mod source;

pub use command::{Command, DispatchOutcome, HaltSignal, Interpreter};
pub use delay::{Delay, NoDelay, SpinDelay};
pub use power::{LoggingPower, PowerControl, RecordingPower};
pub use shell::{Shell, ShellState};
pub use source::{CommandSource, ScriptedSource, DEMO_SCRIPT};
