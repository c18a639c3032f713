//! Command-word text interface
//!
//! The default front-end: a prompt loop understanding `go <direction>`,
//! `fire`, `fire!!!` (empty the bay), `stop`, `help` and `exit`.
//! Unrecognized input prints an error line and re-prompts.

use anyhow::Result;
use device::{FireDelay, Launcher, Transport};
use std::io::{self, BufRead, Write};

use super::FAREWELL;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Continue,
    Exit,
}

pub fn run<T: Transport>(mut launcher: Launcher<T>, delay: FireDelay) -> Result<()> {
    println!("Welcome to the missile control center. Type `help` then Enter for help.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF behaves like `exit`
        }

        if dispatch(&mut launcher, &line, delay)? == Disposition::Exit {
            break;
        }
    }

    launcher.close()?;
    println!("{FAREWELL}");
    Ok(())
}

/// Handle one input line.
fn dispatch<T: Transport>(
    launcher: &mut Launcher<T>,
    line: &str,
    delay: FireDelay,
) -> device::Result<Disposition> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace();

    match (words.next(), words.next()) {
        (Some("fire"), _) => launcher.fire(1u8, delay)?,
        (Some("fire!!!"), _) => launcher.fire_all(delay)?,
        (Some("stop"), _) => launcher.stop()?,
        (Some("help"), _) => print_help(),
        (Some("exit"), _) => return Ok(Disposition::Exit),
        (Some("go"), Some(direction)) => launcher.move_to(direction)?,
        _ => println!("I don't understand..."),
    }

    Ok(Disposition::Continue)
}

fn print_help() {
    println!("Here are the instructions that you can give:");
    println!("    * `go X`: moves in the X direction (up, down, left, right, ne, ...)");
    println!("    * `fire`: fires one missile");
    println!("    * `fire!!!`: fires all available missiles");
    println!("    * `stop`: stops the device (only useful if it is still moving)");
    println!("    * `exit`: exits this program");
    println!("    * `help`: shows this message");
}
