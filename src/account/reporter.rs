use std::cell::RefCell;
use std::fmt::Display;
use std::io::Write;
use std::rc::Rc;

use crate::account::aggregate::AccountAggregate;
use crate::account::event::AccountEvent;
use crate::event::EventEnvelope;
use crate::handler::EventHandler;

/// Shared text sink. Clones write to the same underlying writer.
pub struct Output<W> {
    writer: Rc<RefCell<W>>,
}

impl<W> Clone for Output<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Rc::clone(&self.writer),
        }
    }
}

impl<W: Write> Output<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    /// Writes `value` as is.
    pub fn write(&self, value: impl Display) -> std::io::Result<()> {
        write!(self.writer.borrow_mut(), "{}", value)
    }

    /// Writes `value` followed by a newline.
    pub fn line(&self, value: impl Display) -> std::io::Result<()> {
        writeln!(self.writer.borrow_mut(), "{}", value)
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.borrow_mut().flush()
    }
}

impl Output<Vec<u8>> {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.writer.borrow()).into_owned()
    }
}

/// Prints the success message of every applied account event.
pub struct ConsoleReporter<W> {
    output: Output<W>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: Output<W>) -> Self {
        Self { output }
    }
}

impl<W: Write> EventHandler<AccountAggregate> for ConsoleReporter<W> {
    fn handle(&self, event: &EventEnvelope<AccountEvent>) {
        if let Err(error) = self.output.line(event.payload()) {
            tracing::error!(error = %error, aggregate_id = %event.aggregate_id, "failed to write account event");
        }
    }

    fn name(&self) -> &'static str {
        "ConsoleReporter"
    }
}
