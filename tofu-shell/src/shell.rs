//! Shell state machine
//!
//! The loop is `ShowPrompt -> ReadCommand -> Dispatch -> ShowPrompt`, with
//! a terminal `Halted` state. A halt is reached two ways: a dispatched
//! `reboot`/`shutdown` (the signal goes to the [`PowerControl`] hook), or
//! exhaustion of the command source, which prints the completion banner.
//! Once halted, the machine never shows a prompt or dispatches again.

use tofu_console::{Attribute, FrameBuffer, VgaColor};

use crate::banner;
use crate::command::{DispatchOutcome, HaltSignal, Interpreter};
use crate::delay::Delay;
use crate::power::PowerControl;
use crate::source::CommandSource;

const PROMPT: &str = "tofu@system:~$ ";
const PROMPT_ATTR: Attribute = Attribute::new(VgaColor::Black, VgaColor::LightBlue);
const ANNOUNCE_ATTR: Attribute = Attribute::new(VgaColor::Black, VgaColor::Yellow);

/// Where the shell loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    ShowPrompt,
    ReadCommand,
    Dispatch,
    Halted,
}

/// The prompt/read/dispatch loop
#[derive(Debug)]
pub struct Shell<B, S, D, P>
where
    B: FrameBuffer,
    S: CommandSource,
    D: Delay,
    P: PowerControl,
{
    interpreter: Interpreter<B>,
    source: S,
    delay: D,
    power: P,
    state: ShellState,
    pending: Option<String>,
}

impl<B, S, D, P> Shell<B, S, D, P>
where
    B: FrameBuffer,
    S: CommandSource,
    D: Delay,
    P: PowerControl,
{
    pub fn new(interpreter: Interpreter<B>, source: S, delay: D, power: P) -> Self {
        Shell {
            interpreter,
            source,
            delay,
            power,
            state: ShellState::ShowPrompt,
            pending: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ShellState::Halted
    }

    pub fn interpreter(&self) -> &Interpreter<B> {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter<B> {
        &mut self.interpreter
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Advance the machine by one state transition
    ///
    /// A no-op once halted.
    pub fn step(&mut self) {
        match self.state {
            ShellState::ShowPrompt => {
                self.interpreter
                    .console_mut()
                    .write_colored(PROMPT, PROMPT_ATTR);
                self.state = ShellState::ReadCommand;
            }
            ShellState::ReadCommand => match self.source.next_command() {
                Some(token) => {
                    let console = self.interpreter.console_mut();
                    console.write_colored("Auto-running: ", ANNOUNCE_ATTR);
                    console.write_str(&token);
                    console.put_char('\n');
                    self.pending = Some(token);
                    self.state = ShellState::Dispatch;
                }
                None => {
                    log::info!("command source exhausted, halting shell");
                    banner::demo_complete(self.interpreter.console_mut());
                    self.state = ShellState::Halted;
                }
            },
            ShellState::Dispatch => {
                let token = self.pending.take().unwrap_or_default();
                match self.interpreter.dispatch(&token) {
                    DispatchOutcome::Halt(HaltSignal::Reboot) => {
                        self.power.reboot();
                        self.state = ShellState::Halted;
                    }
                    DispatchOutcome::Halt(HaltSignal::Shutdown) => {
                        self.power.shutdown();
                        self.state = ShellState::Halted;
                    }
                    _ => {
                        self.delay.wait();
                        self.state = ShellState::ShowPrompt;
                    }
                }
            }
            ShellState::Halted => {}
        }
    }

    /// Run until the machine halts
    pub fn run(&mut self) {
        while !self.is_halted() {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tofu_alloc::BumpAllocator;
    use tofu_console::{Console, MemoryBuffer};

    use crate::delay::NoDelay;
    use crate::power::RecordingPower;
    use crate::source::ScriptedSource;

    struct CountingDelay {
        ticks: usize,
    }

    impl Delay for CountingDelay {
        fn wait(&mut self) {
            self.ticks += 1;
        }
    }

    fn shell(
        script: &[&str],
    ) -> Shell<MemoryBuffer, ScriptedSource, NoDelay, RecordingPower> {
        let interpreter = Interpreter::new(
            Console::new(MemoryBuffer::vga()),
            BumpAllocator::demo(),
        );
        Shell::new(
            interpreter,
            ScriptedSource::new(script.iter().copied()),
            NoDelay,
            RecordingPower::default(),
        )
    }

    #[test]
    fn test_empty_script_halts_with_banner() {
        let mut shell = shell(&[]);
        shell.run();
        assert!(shell.is_halted());
        let text = shell.interpreter().console().snapshot().text();
        assert!(text.contains("tofu@system:~$"));
        assert!(text.contains("=== Demo Complete ==="));
        assert!(shell.power().signals.is_empty());
    }

    #[test]
    fn test_step_after_halt_is_noop() {
        let mut shell = shell(&[]);
        shell.run();
        let before = shell.interpreter().console().snapshot();
        shell.step();
        shell.step();
        assert_eq!(shell.state(), ShellState::Halted);
        assert_eq!(shell.interpreter().console().snapshot(), before);
    }

    #[test]
    fn test_delay_ticks_once_per_dispatched_command() {
        let interpreter = Interpreter::new(
            Console::new(MemoryBuffer::vga()),
            BumpAllocator::demo(),
        );
        let mut shell = Shell::new(
            interpreter,
            ScriptedSource::new(["help", "memory", "bogus"]),
            CountingDelay { ticks: 0 },
            RecordingPower::default(),
        );
        shell.run();
        assert_eq!(shell.delay.ticks, 3);
    }

    #[test]
    fn test_reboot_halts_without_reading_further() {
        let mut shell = shell(&["reboot", "help"]);
        shell.run();
        assert!(shell.is_halted());
        assert_eq!(shell.power().signals, vec![HaltSignal::Reboot]);
        // the token after reboot is never consumed
        assert_eq!(shell.source().remaining(), 1);
        let text = shell.interpreter().console().snapshot().text();
        assert!(!text.contains("Command Help"));
        assert!(!text.contains("Demo Complete"));
    }

    #[test]
    fn test_shutdown_signals_power_hook() {
        let mut shell = shell(&["shutdown"]);
        shell.run();
        assert_eq!(shell.power().signals, vec![HaltSignal::Shutdown]);
    }

    #[test]
    fn test_unknown_command_keeps_loop_running() {
        let mut shell = shell(&["bogus", "help"]);
        shell.run();
        let text = shell.interpreter().console().snapshot().text();
        assert!(text.contains("Command not found: bogus"));
        assert!(text.contains("Command Help"));
        assert!(text.contains("Demo Complete"));
    }
}
