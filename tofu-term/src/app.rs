//! Wires the console, heap, and shell together and runs the demo.

use tofu_alloc::BumpAllocator;
use tofu_console::{Console, MemoryBuffer, Snapshot};
use tofu_shell::{banner, Delay, Interpreter, LoggingPower, ScriptedSource, Shell, SpinDelay};

use crate::config::{Config, OutputFormat};

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Run the scripted demo to completion and print the final frame
    pub fn run(&self) {
        let snapshot = self.run_to_snapshot();
        match self.config.output {
            OutputFormat::Text => println!("{}", snapshot.text()),
            OutputFormat::Json => println!("{}", snapshot.to_json()),
        }
    }

    /// Run the scripted demo and capture the final console state
    pub fn run_to_snapshot(&self) -> Snapshot {
        let (cols, rows) = self.config.dimensions;
        let mut console = Console::new(MemoryBuffer::new(cols as usize, rows as usize));
        let mut delay = SpinDelay::new(self.config.delay_spins);

        if self.config.welcome {
            banner::welcome(&mut console);
            // linger on the welcome screen, as the boot sequence does
            delay.wait();
        }

        let interpreter = Interpreter::new(console, BumpAllocator::demo());
        let mut shell = Shell::new(
            interpreter,
            ScriptedSource::new(self.config.script.iter().cloned()),
            delay,
            LoggingPower,
        );

        log::debug!("running {} scripted commands", self.config.script.len());
        shell.run();

        shell.interpreter().console().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> Config {
        let mut config = Config::default();
        config.delay_spins = 0;
        config
    }

    #[test]
    fn test_demo_run_ends_with_completion_banner() {
        let app = App::new(instant_config());
        let snapshot = app.run_to_snapshot();
        assert!(snapshot.text().contains("=== Demo Complete ==="));
    }

    #[test]
    fn test_custom_script_runs_instead_of_demo() {
        let mut config = instant_config();
        config.script = vec!["help".to_string()];
        config.welcome = false;
        let app = App::new(config);
        let snapshot = app.run_to_snapshot();
        assert!(snapshot.text().contains("=== Command Help ==="));
    }

    #[test]
    fn test_terminal_script_skips_completion_banner() {
        let mut config = instant_config();
        config.script = vec!["shutdown".to_string()];
        let app = App::new(config);
        let snapshot = app.run_to_snapshot();
        assert!(snapshot.text().contains("safe to turn off"));
        assert!(!snapshot.text().contains("=== Demo Complete ==="));
    }
}
