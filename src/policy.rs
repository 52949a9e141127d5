/// Read buffer size used for each opened file.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256 * 1024;

/// What to do when a listed path cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFailurePolicy {
    /// Return the error and stop the whole stream (strict).
    #[default]
    Abort,
    /// Log a warning, remember the path and continue with the next one.
    Skip,
}

#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub open_failure: OpenFailurePolicy,
    pub buffer_capacity: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            open_failure: OpenFailurePolicy::Abort,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}
