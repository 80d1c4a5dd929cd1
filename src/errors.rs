//! Errors raised when a signature or a readable type name is malformed.

/// Types nested deeper than this are rejected with [`SyntaxErrorKind::TooDeep`] instead of
/// overflowing the stack.
pub(crate) const MAX_DEPTH: usize = 256;

/// The reason a piece of input could not be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SyntaxErrorKind {
    /// The input ended before the current production was complete.
    #[display("unexpected end of input")]
    UnexpectedEnd,
    /// A specific marker was required but something else was found.
    #[display("expected `{_0}`")]
    Expected(char),
    /// The character cannot start or continue the current production.
    #[display("unexpected character `{_0}`")]
    UnexpectedChar(char),
    /// An identifier (class name segment, type variable name, ...) is empty.
    #[display("empty identifier")]
    EmptyIdentifier,
    /// `void` is used where only a value type is allowed.
    #[display("`void` is not allowed here")]
    IllegalVoid,
    /// A type argument list is opened but holds no argument.
    #[display("empty type argument list")]
    EmptyTypeArguments,
    /// A generic argument list or an array suffix is not closed.
    #[display("unbalanced brackets")]
    Unbalanced,
    /// Types are nested deeper than the parser supports.
    #[display("nesting too deep")]
    TooDeep,
    /// A complete production was scanned but input remains.
    #[display("trailing characters")]
    TrailingCharacters,
}

/// An error indicating that the input is not well-formed.
///
/// The error carries the whole input together with the byte index where
/// scanning stopped, so that [`SyntaxError::fragment`] yields the offending
/// substring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed signature `{input}` at index {index}: {kind}")]
pub struct SyntaxError {
    /// The input that was being scanned.
    pub input: String,
    /// The byte offset in [`SyntaxError::input`] where scanning failed.
    pub index: usize,
    /// What went wrong.
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates a new [`SyntaxError`].
    pub fn new<S: Into<String>>(input: S, index: usize, kind: SyntaxErrorKind) -> Self {
        Self {
            input: input.into(),
            index,
            kind,
        }
    }

    /// Returns the part of the input starting at the failure position.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.input.get(self.index..).unwrap_or_default()
    }

    /// Emits a `debug` event for a rejected input and hands the error back.
    pub(crate) fn reported(self) -> Self {
        tracing::debug!(
            input = %self.input,
            index = self.index,
            reason = %self.kind,
            "rejected malformed signature"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_starts_at_index() {
        let err = SyntaxError::new("Ljava.lang.String", 17, SyntaxErrorKind::UnexpectedEnd);
        assert_eq!(err.fragment(), "");

        let err = SyntaxError::new("(I#)V", 2, SyntaxErrorKind::UnexpectedChar('#'));
        assert_eq!(err.fragment(), "#)V");
    }

    #[test]
    fn message_mentions_reason() {
        let err = SyntaxError::new("QObject", 7, SyntaxErrorKind::Expected(';'));
        assert_eq!(
            err.to_string(),
            "Malformed signature `QObject` at index 7: expected `;`"
        );
    }
}
