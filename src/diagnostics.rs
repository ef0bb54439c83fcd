//! Shared error-reporting facility used by every stage of the pipeline.
//!
//! The language's error policy is "report, don't throw": a lexer, parser or
//! evaluator that hits a problem writes one line to the error stream and
//! substitutes a defined fallback rather than aborting. [`Diagnostics`] is
//! the single sink all three stages report through, so that policy lives in
//! one place instead of being reimplemented at each call site.
//!
//! A [`Diagnostics::strict`] sink flips the policy: every report becomes a
//! hard `Err` instead of a printed line, which is useful for test harnesses
//! that want to assert a program produced *no* diagnostics at all.

use std::error::Error;
use std::fmt;

/// A single reported problem, optionally tied to a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: Option<usize>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Error (line {line}): {}", self.message),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl Error for Diagnostic {}

/// Where diagnostics go: stderr-and-continue (the language default) or
/// hard failure (opt-in, for strict test harnesses).
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    strict: bool,
}

impl Diagnostics {
    /// The default, lenient sink: reports print to stderr and execution continues.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// A sink that turns every report into an `Err` instead of printing it.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Report `message`, optionally tied to a source `line`.
    ///
    /// In the lenient (default) sink this always prints and returns `Ok(())`,
    /// so callers can follow it with their fallback value unconditionally.
    /// In the strict sink it returns `Err`, so a trailing `?` short-circuits
    /// the caller instead.
    pub fn report(
        &self,
        message: impl Into<String>,
        line: Option<usize>,
    ) -> Result<(), Diagnostic> {
        let diagnostic = Diagnostic {
            message: message.into(),
            line,
        };

        if self.strict {
            return Err(diagnostic);
        }

        eprintln!("{diagnostic}");
        Ok(())
    }
}
