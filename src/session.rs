//! The interactive prompt-decode-send loop.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::codec;
use crate::{Error, Transmit};

pub const PROMPT: &str = "Enter hex data to send (or 'q' to quit): ";

const QUIT_SENTINEL: &str = "q";

/// Why the loop stopped. Every variant still passes through socket release.
#[derive(Debug)]
pub enum Exit {
    /// Operator typed the quit sentinel.
    Quit,
    /// The input stream ended.
    EndOfInput,
    /// SIGINT observed between reads.
    Interrupted,
    /// A send failed; the loop does not retry.
    SendFailed(Error),
}

enum Step {
    Continue,
    Stop(Exit),
}

/// Runs the loop until a terminal condition, writing all operator-facing
/// status to `output`. Decode failures are reported and the loop keeps
/// going; the first transmit failure ends it.
///
/// The `Err` case covers only the output handle itself failing; the
/// caller still owns the sender and releases it either way.
pub fn run<S, R, W>(
    sender: &mut S,
    mut input: R,
    mut output: W,
    interrupt: &AtomicBool,
) -> io::Result<Exit>
where
    S: Transmit,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        if interrupt.load(Ordering::Relaxed) {
            return Ok(Exit::Interrupted);
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(Exit::EndOfInput),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(Exit::Interrupted);
            }
            Err(e) => return Err(e),
        }
        // A signal during the blocking read lands here once the read returns.
        if interrupt.load(Ordering::Relaxed) {
            return Ok(Exit::Interrupted);
        }

        match step(sender, line.trim(), &mut output)? {
            Step::Continue => {}
            Step::Stop(exit) => return Ok(exit),
        }
    }
}

fn step<S, W>(sender: &mut S, entry: &str, output: &mut W) -> io::Result<Step>
where
    S: Transmit,
    W: Write,
{
    if entry.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return Ok(Step::Stop(Exit::Quit));
    }

    // An empty line is a valid zero-length payload, not an error.
    let payload = match codec::decode(entry) {
        Ok(payload) => payload,
        Err(e) => {
            writeln!(output, "Error: {}. Please try again.", e)?;
            return Ok(Step::Continue);
        }
    };

    match sender.transmit(&payload) {
        Ok(()) => {
            writeln!(output, "Sent: '{}'", entry)?;
            Ok(Step::Continue)
        }
        Err(e) => {
            writeln!(output, "Error sending data: {}", e)?;
            Ok(Step::Stop(Exit::SendFailed(e)))
        }
    }
}
