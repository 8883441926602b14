//! Diagnostic output
//!
//! Receives one-line, human-readable messages on failure paths. A serial
//! console, a display line or a logger all qualify.

pub trait DiagnosticSink {
    fn report(&mut self, line: &str);
}

/// Discards every line.
impl DiagnosticSink for () {
    fn report(&mut self, _line: &str) {}
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, line: &str) {
        (**self).report(line)
    }
}
