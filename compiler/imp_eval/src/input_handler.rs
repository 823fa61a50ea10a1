//! Line source for `read` statements.
//!
//! The executor asks for one line at a time. `None` means the source is
//! exhausted and no more lines will ever arrive.
//! - Native runs: stdin (default)
//! - Tests: a scripted queue of lines

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads lines from stdin. Blocks until a line is available.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    pub fn read_line(&self) -> Option<String> {
        read_line_from(&mut std::io::stdin().lock())
    }
}

/// Read one line from `reader`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the number parser as a malformed line and is retried.
/// Only end of input (or a read error) yields `None`.
fn read_line_from(reader: &mut impl BufRead) -> Option<String> {
    let mut bytes = Vec::new();
    match reader.read_until(b'\n', &mut bytes) {
        Ok(0) => None,
        Ok(_) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!("stdin read failed: {e}");
            None
        }
    }
}

/// Serves a fixed list of lines, then reports end of input.
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.lock().len()
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
}

impl InputHandlerImpl {
    /// Next line of input, including any trailing newline.
    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => h.read_line(),
        }
    }

    /// Lines left in a scripted source. Always 0 for stdin.
    pub fn remaining(&self) -> usize {
        match self {
            Self::Stdin(_) => 0,
            Self::Scripted(h) => h.remaining(),
        }
    }
}

/// Shared input handler that can be passed around.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn scripted_handler<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(lines)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_come_back_in_order() {
        let handler = scripted_handler(["3", "abc", "7"]);
        assert_eq!(handler.remaining(), 3);
        assert_eq!(handler.read_line().as_deref(), Some("3"));
        assert_eq!(handler.read_line().as_deref(), Some("abc"));
        assert_eq!(handler.read_line().as_deref(), Some("7"));
        assert_eq!(handler.remaining(), 0);
    }

    #[test]
    fn invalid_utf8_line_is_still_a_line() {
        let mut source = std::io::Cursor::new(b"\xff\xfe\n5\n".to_vec());
        assert_eq!(
            read_line_from(&mut source).as_deref(),
            Some("\u{fffd}\u{fffd}\n")
        );
        assert_eq!(read_line_from(&mut source).as_deref(), Some("5\n"));
        assert_eq!(read_line_from(&mut source), None);
    }

    #[test]
    fn final_line_without_newline() {
        let mut source = std::io::Cursor::new(b"42".to_vec());
        assert_eq!(read_line_from(&mut source).as_deref(), Some("42"));
        assert_eq!(read_line_from(&mut source), None);
    }

    #[test]
    fn exhausted_script_reports_end_of_input() {
        let handler = ScriptedInputHandler::new(Vec::<String>::new());
        assert_eq!(handler.read_line(), None);
        assert_eq!(handler.read_line(), None);
    }
}
