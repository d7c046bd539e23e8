//! Reads hex strings from stdin and sends the decoded bytes to a fixed
//! device, one UDP datagram per line.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Context;
use hexprobe::session::{self, Exit};
use hexprobe::{Destination, Sender};
use signal_hook::consts::SIGINT;
use signal_hook::flag;

// Change these to match the device under test.
const DEST_HOST: &str = "192.168.1.1";
const DEST_PORT: u16 = 4321;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let interrupt = Arc::new(AtomicBool::new(false));
    // First ^C sets the flag; a second one terminates immediately.
    flag::register_conditional_shutdown(SIGINT, 130, Arc::clone(&interrupt))
        .context("failed to install SIGINT handler")?;
    flag::register(SIGINT, Arc::clone(&interrupt))
        .context("failed to install SIGINT handler")?;

    let dest = Destination::resolve(DEST_HOST, DEST_PORT)?;
    let mut sender = Sender::open(dest).context("failed to create UDP socket")?;
    println!(
        "UDP socket created. Ready to send data to {}",
        sender.destination()
    );

    let stdin = io::stdin();
    let exit = session::run(&mut sender, stdin.lock(), io::stdout(), &interrupt)?;

    match exit {
        Exit::Quit => println!("Exit command received. Closing socket."),
        Exit::EndOfInput => println!("Input closed. Closing socket."),
        Exit::Interrupted => println!("\nInterrupted. Closing socket."),
        // The loop already reported the send failure.
        Exit::SendFailed(_) => println!("Closing socket."),
    }

    drop(sender);
    println!("Socket closed.");
    Ok(())
}
