//! Command registry and dispatcher
//!
//! The registry is a fixed set of exact-match keywords. Matching is
//! case-sensitive and whole-token: `"Clear"` and `"clear "` are both
//! unknown. Dispatch is a pure lookup followed by a side-effecting action
//! against the console and the heap; no state is held between calls.

use tofu_alloc::BumpAllocator;
use tofu_console::{Attribute, Console, FrameBuffer, VgaColor};

use crate::banner;

/// The fixed command set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    Help,
    Info,
    Memory,
    Logo,
    Reboot,
    Shutdown,
    Colors,
}

impl Command {
    /// Every command, in help-listing order
    pub const ALL: [Command; 8] = [
        Command::Clear,
        Command::Help,
        Command::Info,
        Command::Memory,
        Command::Logo,
        Command::Reboot,
        Command::Shutdown,
        Command::Colors,
    ];

    /// Exact-match lookup of a command token
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "clear" => Some(Command::Clear),
            "help" => Some(Command::Help),
            "info" => Some(Command::Info),
            "memory" => Some(Command::Memory),
            "logo" => Some(Command::Logo),
            "reboot" => Some(Command::Reboot),
            "shutdown" => Some(Command::Shutdown),
            "colors" => Some(Command::Colors),
            _ => None,
        }
    }

    /// The keyword this command is registered under
    pub fn name(self) -> &'static str {
        match self {
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Info => "info",
            Command::Memory => "memory",
            Command::Logo => "logo",
            Command::Reboot => "reboot",
            Command::Shutdown => "shutdown",
            Command::Colors => "colors",
        }
    }

    /// One-line description for the help listing
    pub fn summary(self) -> &'static str {
        match self {
            Command::Clear => "Clear the screen",
            Command::Help => "Show this help message",
            Command::Info => "Display system information",
            Command::Memory => "Show memory information",
            Command::Logo => "Display the boot logo",
            Command::Reboot => "Restart the system",
            Command::Shutdown => "Shut down the system",
            Command::Colors => "Display a color test",
        }
    }
}

/// Hardware action requested by a terminal command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltSignal {
    Reboot,
    Shutdown,
}

/// What a dispatch call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A known command ran to completion
    Handled,
    /// Empty token, swallowed silently
    Ignored,
    /// Unknown token, error reported on the console
    Unknown,
    /// A terminal command ran; the caller must raise the signal and stop
    Halt(HaltSignal),
}

/// Executes commands against the console and the heap
#[derive(Debug)]
pub struct Interpreter<B: FrameBuffer> {
    console: Console<B>,
    heap: BumpAllocator,
}

impl<B: FrameBuffer> Interpreter<B> {
    pub fn new(console: Console<B>, heap: BumpAllocator) -> Self {
        Interpreter { console, heap }
    }

    pub fn console(&self) -> &Console<B> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console<B> {
        &mut self.console
    }

    pub fn heap(&self) -> &BumpAllocator {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut BumpAllocator {
        &mut self.heap
    }

    /// Look up a token and run its action
    pub fn dispatch(&mut self, token: &str) -> DispatchOutcome {
        if token.is_empty() {
            return DispatchOutcome::Ignored;
        }
        match Command::parse(token) {
            Some(command) => {
                log::debug!("dispatching {:?}", command);
                self.run(command)
            }
            None => {
                log::debug!("unknown command {:?}", token);
                self.report_unknown(token);
                DispatchOutcome::Unknown
            }
        }
    }

    fn run(&mut self, command: Command) -> DispatchOutcome {
        match command {
            Command::Clear => {
                self.console.clear();
                DispatchOutcome::Handled
            }
            Command::Help => {
                banner::help(&mut self.console);
                DispatchOutcome::Handled
            }
            Command::Info => {
                banner::info(&mut self.console, &self.heap);
                DispatchOutcome::Handled
            }
            Command::Memory => {
                banner::memory(&mut self.console, &self.heap);
                DispatchOutcome::Handled
            }
            Command::Logo => {
                banner::logo(&mut self.console);
                DispatchOutcome::Handled
            }
            Command::Colors => {
                banner::color_sweep(&mut self.console);
                DispatchOutcome::Handled
            }
            Command::Reboot => {
                self.console.write_colored(
                    "Rebooting...\n",
                    Attribute::new(VgaColor::Black, VgaColor::Yellow),
                );
                DispatchOutcome::Halt(HaltSignal::Reboot)
            }
            Command::Shutdown => {
                self.console.write_colored(
                    "Shutting down...\n",
                    Attribute::new(VgaColor::Black, VgaColor::Yellow),
                );
                self.console
                    .write_str("It is now safe to turn off your computer.\n");
                DispatchOutcome::Halt(HaltSignal::Shutdown)
            }
        }
    }

    fn report_unknown(&mut self, token: &str) {
        self.console.write_colored(
            "Command not found: ",
            Attribute::new(VgaColor::Black, VgaColor::Red),
        );
        self.console.write_str(token);
        self.console
            .write_str("\nType 'help' for available commands.\n");
    }
}
