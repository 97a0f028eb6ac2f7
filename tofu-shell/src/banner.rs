//! Screen banners: help, system info, memory report, logo, welcome screen
//!
//! Content drawing only; every function takes the console by `&mut` and
//! leaves the current attribute the way it found it.

use tofu_alloc::BumpAllocator;
use tofu_console::{Attribute, Console, FrameBuffer, VgaColor};

use crate::command::Command;

const HEADING: Attribute = Attribute::new(VgaColor::Black, VgaColor::LightCyan);
const LABEL: Attribute = Attribute::new(VgaColor::Black, VgaColor::Yellow);
const ENTRY: Attribute = Attribute::new(VgaColor::Black, VgaColor::LightGreen);
const OK: Attribute = Attribute::new(VgaColor::Black, VgaColor::LightGreen);
const BORDER: Attribute = Attribute::new(VgaColor::Blue, VgaColor::Yellow);
const FAREWELL: Attribute = Attribute::new(VgaColor::Black, VgaColor::Pink);

const LOGO_LINES: [&str; 5] = [
    " _____ ___  ____  _   _ ",
    "|_   _/ _ \\|  ___| | | |",
    "  | || | | | |_  | | | |",
    "  | || |_| |  _| | |_| |",
    "  |_| \\___/|_|    \\___/ ",
];

/// Column the logo is drawn at, centered for the 80-column grid
const LOGO_COL: usize = 28;
/// Row the logo starts at
const LOGO_ROW: usize = 3;

/// Command table, one colored entry per registered command
pub fn help<B: FrameBuffer>(console: &mut Console<B>) {
    console.write_colored("=== Command Help ===\n", HEADING);
    for command in Command::ALL {
        console.write_colored(&format!("{:<9}", command.name()), ENTRY);
        console.write_str(&format!("- {}\n", command.summary()));
    }
    console.put_char('\n');
}

/// Full-screen system information banner
pub fn info<B: FrameBuffer>(console: &mut Console<B>, heap: &BumpAllocator) {
    console.clear();
    console.write_colored("=== tofu System Information ===\n\n", HEADING);

    let display = format!("VGA text mode {}x{}\n", console.width(), console.height());
    console.write_colored("Display: ", LABEL);
    console.write_str(&display);

    console.write_colored("Memory:  ", LABEL);
    console.write_str(&format!(
        "{} KiB bump region at {:#x}\n",
        heap.size() / 1024,
        heap.base()
    ));

    console.write_colored("Shell:   ", LABEL);
    console.write_str("tofu command shell\n");

    console.write_colored("Input:   ", LABEL);
    console.write_str("scripted command source\n\n");

    console.write_colored("Status:  ", OK);
    console.write_str("All systems operational!\n\n");
}

/// Allocator state report
pub fn memory<B: FrameBuffer>(console: &mut Console<B>, heap: &BumpAllocator) {
    console.write_colored("=== Memory Information ===\n", HEADING);

    console.write_colored("Region Base: ", LABEL);
    console.write_str(&format!("{:#x}\n", heap.base()));

    console.write_colored("Region Size: ", LABEL);
    console.write_str(&format!("{} KiB\n", heap.size() / 1024));

    console.write_colored("Next Free:   ", LABEL);
    console.write_str(&format!("{:#x}\n", heap.current()));

    console.write_colored("Bytes Used:  ", LABEL);
    console.write_str(&format!("{}\n\n", heap.used()));
}

/// Clear the screen and redraw the boot logo
pub fn logo<B: FrameBuffer>(console: &mut Console<B>) {
    console.clear();
    draw_logo(console);
    console.write_str("\n\n");
}

/// The ASCII-art logo at its fixed position
pub fn draw_logo<B: FrameBuffer>(console: &mut Console<B>) {
    for (i, line) in LOGO_LINES.iter().enumerate() {
        console.set_cursor(LOGO_COL, LOGO_ROW + i);
        console.write_colored(line, HEADING);
    }
}

/// Sixteen `COLOR TEST ` segments, one per foreground index
pub fn color_sweep<B: FrameBuffer>(console: &mut Console<B>) {
    for fg in VgaColor::ALL {
        console.write_colored("COLOR TEST ", Attribute::new(VgaColor::Black, fg));
    }
    console.put_char('\n');
}

/// The boot welcome screen: border, logo, and greeting lines
pub fn welcome<B: FrameBuffer>(console: &mut Console<B>) {
    console.clear();
    draw_border(console);
    draw_logo(console);

    console.set_cursor(20, 10);
    console.write_colored(
        "*** Welcome to tofu - the tiny text console ***",
        Attribute::new(VgaColor::Black, VgaColor::White),
    );

    console.set_cursor(26, 12);
    console.write_colored(
        "A scripted VGA console demo",
        Attribute::new(VgaColor::Black, VgaColor::LightGreen),
    );

    console.set_cursor(22, 14);
    console.write_colored("Featuring: an 80x25 character grid,", LABEL);
    console.set_cursor(25, 15);
    console.write_colored("colored output, and a command shell", LABEL);

    console.set_cursor(24, 20);
    console.write_str("Entering the command shell...");
    console.set_cursor(0, 22);
}

/// Printed once when the scripted source runs dry
pub fn demo_complete<B: FrameBuffer>(console: &mut Console<B>) {
    console.write_colored("\n=== Demo Complete ===\n", FAREWELL);
    console.write_str("The scripted command source is exhausted.\n");
    console.write_str("Attach an input device driver to keep the shell interactive.\n");
}

fn draw_border<B: FrameBuffer>(console: &mut Console<B>) {
    let rule = "=".repeat(console.width());
    let bottom = console.height().saturating_sub(1);
    console.set_cursor(0, 0);
    console.write_colored(&rule, BORDER);
    console.set_cursor(0, bottom);
    console.write_colored(&rule, BORDER);
    console.set_cursor(0, 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tofu_console::MemoryBuffer;

    #[test]
    fn test_welcome_draws_full_border_rows() {
        let mut console = Console::new(MemoryBuffer::vga());
        welcome(&mut console);
        assert_eq!(console.row_text(0), "=".repeat(80));
        assert_eq!(console.row_text(24), "=".repeat(80));
        assert_eq!(console.cell_at(0, 0).attr, BORDER);
    }

    #[test]
    fn test_welcome_keeps_default_attribute() {
        let mut console = Console::new(MemoryBuffer::vga());
        let attr = console.attribute();
        welcome(&mut console);
        assert_eq!(console.attribute(), attr);
    }

    #[test]
    fn test_logo_lines_have_equal_width() {
        let width = LOGO_LINES[0].len();
        assert!(LOGO_LINES.iter().all(|line| line.len() == width));
        assert!(LOGO_COL + width < 80);
    }

    #[test]
    fn test_help_fits_without_scrolling() {
        let mut console = Console::new(MemoryBuffer::vga());
        console.clear();
        help(&mut console);
        let (_, row) = console.cursor();
        assert!(row < 24);
    }
}
