use crate::error::LineError;
use crate::line_reader::{FileOpener, LineReader, OpenLines};
use crate::policy::{OpenFailurePolicy, ReaderOptions};

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Reads several files back to back as one stream of lines.
///
/// Files are opened lazily, one at a time, in the order given. An exhausted
/// file is closed before the next one is opened, so at most one handle is
/// live. Empty files contribute no lines and do not end the stream.
///
/// The reader owns its open handle exclusively and is not `Clone`.
pub struct JoinedLineReader<O: OpenLines = FileOpener> {
    // Next path to open is at the end.
    pending: Vec<PathBuf>,
    active: Option<O::Reader>,
    current: Option<PathBuf>,
    opener: O,
    opts: ReaderOptions,
    skipped: Vec<PathBuf>,
    line_num: u64,
    lines_read: u64,
    files_opened: usize,
    exhausted: bool,
}

impl JoinedLineReader<FileOpener> {
    /// Join plain files from disk. No file is touched until the first read.
    pub fn new<I, P>(paths: I, opts: ReaderOptions) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let opener = FileOpener::new(opts.buffer_capacity);
        Self::with_opener(paths, opener, opts)
    }
}

impl<O: OpenLines> JoinedLineReader<O> {
    /// Join paths using a custom opener for the individual files.
    pub fn with_opener<I, P>(paths: I, opener: O, opts: ReaderOptions) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut pending: Vec<PathBuf> = paths
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        pending.reverse();

        Self {
            pending,
            active: None,
            current: None,
            opener,
            opts,
            skipped: Vec::new(),
            line_num: 0,
            lines_read: 0,
            files_opened: 0,
            exhausted: false,
        }
    }

    /// Read the next line of the joined stream into `dst`.
    ///
    /// Returns `Ok(false)` once every file has been consumed. After that, or
    /// after any error, the reader stays exhausted and never opens anything
    /// again.
    pub fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError> {
        while !self.exhausted {
            let Some(reader) = self.active.as_mut() else {
                self.open_next_file()?;
                continue;
            };

            match reader.read_line(dst) {
                Ok(true) => {
                    self.line_num += 1;
                    self.lines_read += 1;
                    return Ok(true);
                }
                Ok(false) => self.close_current(),
                Err(err) => {
                    self.abort();
                    return Err(err);
                }
            }
        }

        dst.clear();
        Ok(false)
    }

    /// Pop paths until one opens. Returns `Ok(false)` and marks the reader
    /// exhausted when none are left.
    fn open_next_file(&mut self) -> Result<bool, LineError> {
        self.close_current();

        while let Some(path) = self.pending.pop() {
            match self.opener.open(&path) {
                Ok(reader) => {
                    log::debug!("opened input '{}'", path.display());
                    self.active = Some(reader);
                    self.current = Some(path);
                    self.line_num = 0;
                    self.files_opened += 1;
                    return Ok(true);
                }
                Err(err) => match self.opts.open_failure {
                    OpenFailurePolicy::Abort => {
                        self.abort();
                        return Err(err);
                    }
                    OpenFailurePolicy::Skip => {
                        log::warn!("skipping unreadable input: {err}");
                        self.skipped.push(path);
                    }
                },
            }
        }

        log::trace!(
            "all inputs consumed after {} lines from {} files",
            self.lines_read,
            self.files_opened
        );
        self.exhausted = true;
        Ok(false)
    }

    fn close_current(&mut self) {
        if self.active.take().is_some() {
            if let Some(path) = &self.current {
                log::debug!("finished input '{}' ({} lines)", path.display(), self.line_num);
            }
        }
        self.current = None;
        self.line_num = 0;
    }

    fn abort(&mut self) {
        self.active = None;
        self.current = None;
        self.line_num = 0;
        self.pending.clear();
        self.exhausted = true;
    }

    /// Path of the file currently being read, if one is open.
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Number of the last line returned from the current file (1-based).
    /// Zero when no file is open.
    pub fn line_number(&self) -> u64 {
        self.line_num
    }

    /// Total lines returned across all files.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn files_opened(&self) -> usize {
        self.files_opened
    }

    /// Paths not yet opened.
    pub fn remaining_paths(&self) -> usize {
        self.pending.len()
    }

    /// Paths dropped under [`OpenFailurePolicy::Skip`], in order.
    pub fn skipped_paths(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<O: OpenLines> LineReader for JoinedLineReader<O> {
    fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError> {
        JoinedLineReader::read_line(self, dst)
    }
}

impl<O: OpenLines> Iterator for JoinedLineReader<O> {
    type Item = Result<String, LineError>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(true) => Some(Ok(line)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<O: OpenLines> FusedIterator for JoinedLineReader<O> {}
