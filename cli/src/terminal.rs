//! Terminal host for the chat widget.
//!
//! The panel is the output stream, one plain line per message. The input is
//! the line most recently read from the user. There is no clickable send
//! control, so enabling/disabling it only changes whether a prompt is shown.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};

use chatwidget::{ChatSurface, ChatTransport, ChatWidget, Message, SubmitOutcome};

pub const PROMPT: &str = "> ";

/// Words that end an interactive session (matched case-insensitively).
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "salir"];

pub struct TerminalSurface<W: Write> {
    out: RefCell<W>,
    input: RefCell<String>,
    ready: Cell<bool>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out), input: RefCell::default(), ready: Cell::new(false) }
    }

    /// Put `line` into the input, as if the user had typed it.
    pub fn set_input(&self, line: &str) {
        line.clone_into(&mut self.input.borrow_mut());
    }

    /// Print the prompt if the send control is enabled.
    ///
    /// # Errors
    ///
    /// Returns the write error from the underlying stream.
    pub fn prompt(&self) -> io::Result<()> {
        if !self.ready.get() {
            return Ok(());
        }
        let mut out = self.out.borrow_mut();
        out.write_all(PROMPT.as_bytes())?;
        out.flush()
    }

    /// Write a line that is not part of the conversation.
    ///
    /// # Errors
    ///
    /// Returns the write error from the underlying stream.
    pub fn notice(&self, text: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{text}")
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    fn append(&self, message: &Message) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", message.to_plain()) {
            tracing::warn!(error = %e, "failed to write chat line");
        }
    }

    fn scroll_to_bottom(&self) {
        if let Err(e) = self.out.borrow_mut().flush() {
            tracing::warn!(error = %e, "failed to flush chat output");
        }
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.ready.set(enabled);
    }

    fn focus_input(&self) {}
}

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub replied: usize,
    pub failed: usize,
}

/// Run a prompt loop until EOF or an exit word.
///
/// Blank lines are skipped without contacting the endpoint.
///
/// # Errors
///
/// Returns I/O errors from reading `input` or writing the prompt.
pub async fn run_repl<R, W, T>(mut input: R, widget: &ChatWidget<TerminalSurface<W>, T>) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    T: ChatTransport,
{
    let surface = widget.surface();
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    loop {
        surface.prompt()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if is_exit_word(&line) {
            surface.notice("Bye.")?;
            break;
        }

        surface.set_input(&line);
        match widget.submit().await {
            SubmitOutcome::Replied => summary.replied += 1,
            SubmitOutcome::Failed(_) => summary.failed += 1,
            SubmitOutcome::Empty | SubmitOutcome::Busy => {}
        }
    }

    tracing::info!(replied = summary.replied, failed = summary.failed, "chat session ended");
    Ok(summary)
}

fn is_exit_word(line: &str) -> bool {
    let word = line.trim();
    EXIT_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w))
}
