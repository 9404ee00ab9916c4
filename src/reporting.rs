/// A single reported problem, carrying the location context the interactive
/// console prints alongside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the input source; interactive input reads from `stdin`.
    pub source_name: String,
    /// Source line the problem was found on. Interactive single-line input
    /// is not tracked per line, so it uses line zero as a placeholder.
    pub line: u32,
    /// Human-readable description of the problem.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic with the interactive defaults (`stdin`, line 0).
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_location("stdin", 0, message)
    }

    /// Creates a diagnostic with an explicit source name and line.
    #[must_use]
    pub fn with_location(source_name: &str, line: u32, message: impl Into<String>) -> Self {
        Self { source_name: source_name.to_string(),
               line,
               message: message.into() }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f,
                 "[\u{1b}[1;31m error \u{1b}[0m] : {} line {} ~",
                 self.source_name, self.line)?;
        write!(f, "\t {}", self.message)
    }
}

/// Collects diagnostics raised while a line is being processed.
///
/// The pipeline itself never prints: the lexer pushes its non-fatal reports
/// here, and the caller drains and displays them once the line is done.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message with the interactive location defaults.
    pub fn report(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(message));
    }

    /// Returns the diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` when nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Removes and returns every collected diagnostic.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
