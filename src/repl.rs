//! Line-oriented read-eval-print loop.

use crate::handlers::{dispatch, CommandContext, Reply, FAREWELL};
use crate::parser::parse_input;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Read commands from `input` until `close`/`exit` or end of input,
/// writing one reply per command to `output`.
///
/// Blank lines are skipped without a reply. End of input is treated like
/// `exit`. Lines that are not valid UTF-8 are decoded lossily, so a bad byte
/// only affects its own line.
pub fn run<R, W>(
    ctx: &mut CommandContext,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("End of input reached");
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!("Read command {:?}", command);

        match dispatch(ctx, &command, &args) {
            Reply::Continue(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
        }
    }
}
