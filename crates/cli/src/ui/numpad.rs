//! Numeric-keypad interface
//!
//! Digits 1-9 lay out as a compass rose with 5 as stop, 42 fires once,
//! and a blank line exits.

use anyhow::Result;
use device::{FireDelay, Launcher, Transport};
use std::io::{self, BufRead, Write};

use super::FAREWELL;

pub fn run<T: Transport>(mut launcher: Launcher<T>, delay: FireDelay) -> Result<()> {
    print_help();

    let stdin = io::stdin();
    loop {
        print!("Direction: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        match input.parse::<u32>() {
            Ok(n) => move_by_number(&mut launcher, n, delay)?,
            Err(_) => println!("Try again..."),
        }
    }

    launcher.close()?;
    println!("{FAREWELL}");
    Ok(())
}

/// Drive the launcher from a keypad number.
fn move_by_number<T: Transport>(
    launcher: &mut Launcher<T>,
    n: u32,
    delay: FireDelay,
) -> device::Result<()> {
    match n {
        5 => launcher.stop(),
        1..=9 => launcher.move_to(&n.to_string()),
        42 => launcher.fire(1u8, delay),
        _ => {
            println!("{n} is not a valid direction");
            Ok(())
        }
    }
}

fn print_help() {
    println!("Use your numeric keypad to move the device.");
    println!("Enter a digit between 1 and 9 and press Enter (5 stops the turret).");
    println!("To fire a missile, enter the number 42.");
    println!("To leave the program, leave the line blank and press Enter.");
}
