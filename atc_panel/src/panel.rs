use std::io::{self, BufRead, Write};

use taxi_instructions::{AtcRouter, DisplayPort, InputPort};
use tracing::{info, warn};
use tracing_unwrap::ResultExt;

/// Reads prompt answers line by line. End of input counts as a cancelled prompt.
pub(crate) struct PromptReader<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Blocks until the pilot presses Enter. Returns false once input is closed.
    pub fn wait_for_click(&mut self, hint: &str) -> bool {
        self.read_answer(hint).ok_or_log().flatten().is_some()
    }

    fn read_answer(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{message}\n> ")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(Some(answer.to_string()))
    }
}

impl<R: BufRead, W: Write> InputPort for PromptReader<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_answer(message).ok_or_log().flatten()
    }
}

/// The panel itself: a title line followed by the current message.
pub(crate) struct PanelDisplay<W> {
    writer: W,
    title: String,
}

impl<W: Write> PanelDisplay<W> {
    pub fn new(writer: W, title: impl Into<String>) -> Self {
        Self {
            writer,
            title: title.into(),
        }
    }

    fn render(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "[{}]", self.title)?;
        writeln!(self.writer, "{message}")?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> DisplayPort for PanelDisplay<W> {
    fn show(&mut self, message: &str) {
        if let Err(e) = self.render(message) {
            warn!("Failed to update panel: {e}");
        }
    }
}

pub(crate) fn run_interactive<R, W1, W2>(
    router: &AtcRouter<'_>,
    input: &mut PromptReader<R, W1>,
    display: &mut PanelDisplay<W2>,
    idle_message: &str,
    click_hint: &str,
) where
    R: BufRead,
    W1: Write,
    W2: Write,
{
    display.show(idle_message);
    while input.wait_for_click(click_hint) {
        router.handle_click(input, display);
    }
    info!("Closing ATC panel");
}
