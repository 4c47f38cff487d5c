//! Terminal output helpers shared by the commands.

use std::cell::RefCell;
use std::io::Write;

use holdem_engine::snapshot::{PresentationSink, TableSnapshot};

use crate::formatters::{format_board, format_cards};

/// An output stream several parts of a command write to in turn, e.g. the
/// table display and the human seat's prompt during `play`.
pub type SharedOut<'a> = RefCell<&'a mut dyn Write>;

/// Runs `f` against the shared stream.
pub fn with_shared<R>(shared: &SharedOut<'_>, f: impl FnOnce(&mut dyn Write) -> R) -> R {
    let mut guard = shared.borrow_mut();
    f(&mut **guard)
}

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints every table snapshot as it is published.
///
/// Write failures are dropped; presentation never interrupts a hand.
pub struct TerminalSink<'s, 'a> {
    out: &'s SharedOut<'a>,
}

impl<'s, 'a> TerminalSink<'s, 'a> {
    pub fn new(out: &'s SharedOut<'a>) -> Self {
        Self { out }
    }
}

impl PresentationSink for TerminalSink<'_, '_> {
    fn publish(&mut self, snapshot: &TableSnapshot) {
        with_shared(self.out, |out| {
            let _ = writeln!(
                out,
                "[{:?}] {} | pot {} | board {}",
                snapshot.street,
                snapshot.event,
                snapshot.pot,
                format_board(&snapshot.board)
            );
            if snapshot.event == "pot awarded" {
                for p in &snapshot.players {
                    let shown = p
                        .shown
                        .map(|h| format!(" shows {}", format_cards(&h.cards())))
                        .unwrap_or_default();
                    let _ = writeln!(out, "  {} ({}): {} chips{}", p.name, p.id, p.stack, shown);
                }
            }
        });
    }
}
