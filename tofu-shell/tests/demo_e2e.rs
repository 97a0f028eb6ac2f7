//! End-to-end run of the scripted demo against an in-memory frame buffer.

use tofu_alloc::BumpAllocator;
use tofu_console::{Console, MemoryBuffer};
use tofu_shell::{
    Interpreter, NoDelay, RecordingPower, ScriptedSource, Shell, ShellState, DEMO_SCRIPT,
};

fn demo_shell() -> Shell<MemoryBuffer, ScriptedSource, NoDelay, RecordingPower> {
    let interpreter = Interpreter::new(Console::new(MemoryBuffer::vga()), BumpAllocator::demo());
    Shell::new(
        interpreter,
        ScriptedSource::demo(),
        NoDelay,
        RecordingPower::default(),
    )
}

#[test]
fn demo_announces_every_command_in_script_order() {
    let mut shell = demo_shell();
    let mut announced = Vec::new();

    while !shell.is_halted() {
        shell.step();
        // right after a read, the announcement is on screen and the command
        // has not yet run (several commands clear the screen when they do)
        if shell.state() == ShellState::Dispatch {
            let text = shell.interpreter().console().snapshot().text();
            let token = DEMO_SCRIPT[announced.len()];
            let line = format!("Auto-running: {}", token);
            assert!(text.contains(&line), "expected {:?} on screen", line);
            announced.push(token);
        }
    }

    assert_eq!(announced, DEMO_SCRIPT);
}

#[test]
fn demo_halts_with_completion_banner_and_never_dispatches_again() {
    let mut shell = demo_shell();
    shell.run();

    assert!(shell.is_halted());
    assert!(shell.power().signals.is_empty());
    assert_eq!(shell.source().remaining(), 0);

    // the final command is `clear`, so the screen holds only the last
    // prompt and the completion banner
    let snapshot = shell.interpreter().console().snapshot();
    assert_eq!(snapshot.row_text(0), "tofu@system:~$");
    assert_eq!(snapshot.row_text(1), "=== Demo Complete ===");
    assert!(snapshot.text().contains("command source is exhausted"));

    // stepping a halted shell changes nothing
    let before = shell.interpreter().console().snapshot();
    for _ in 0..4 {
        shell.step();
    }
    assert_eq!(shell.state(), ShellState::Halted);
    assert_eq!(shell.interpreter().console().snapshot(), before);
}

#[test]
fn demo_heap_is_untouched_by_the_script() {
    let mut shell = demo_shell();
    shell.run();
    let heap = shell.interpreter().heap();
    assert_eq!(heap.used(), 0);
    assert_eq!(heap.current(), heap.base());
}
