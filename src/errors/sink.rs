use tracing::error;

use super::errors::Error;

/// Receives the diagnostics the parser recovers from.
pub trait ErrorSink {
    fn report(&mut self, error: &Error);
}

/// Forwards every diagnostic to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&mut self, error: &Error) {
        let position = error.get_position();
        error!(
            offset = position.0,
            source = %position.1,
            kind = error.get_error_name(),
            "{}",
            error
        );
    }
}

impl ErrorSink for Vec<Error> {
    fn report(&mut self, error: &Error) {
        self.push(error.clone());
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, error: &Error) {
        (**self).report(error)
    }
}
