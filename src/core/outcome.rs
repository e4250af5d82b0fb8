/// Result of handling a form submission. Errors never escape a handler; this is
/// what the caller gets instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    /// A required field was empty; no request was made.
    Invalid,
    /// The request failed or the backend rejected it.
    Failed,
    /// Another submission from the same form is still in flight.
    Busy,
}

/// Result of the best-effort quick recommendation preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutcome {
    Updated,
    /// Population, temperature or weather is still empty.
    Skipped,
    /// A newer preview started before this response arrived.
    Stale,
    /// Logged and otherwise ignored.
    Failed,
}
