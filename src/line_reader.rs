use crate::error::{IoContext, LineError};
use crate::policy::DEFAULT_BUFFER_CAPACITY;
use crate::util::open_file;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Something that yields text lines one at a time.
pub trait LineReader {
    /// Read the next line into `dst`, without its terminator.
    ///
    /// Returns `Ok(false)` at end of input; `dst` is then left empty.
    fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError>;
}

impl<R: LineReader + ?Sized> LineReader for Box<R> {
    fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError> {
        (**self).read_line(dst)
    }
}

/// Opens one path at a time on behalf of a joined reader.
pub trait OpenLines {
    type Reader: LineReader;

    fn open(&mut self, path: &Path) -> Result<Self::Reader, LineError>;
}

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

impl Source {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Path(p) => Some(p),
            Source::Reader => None,
        }
    }
}

/// Line reader over a single file or `BufRead`, streaming.
pub struct FileLineReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
}

impl FileLineReader {
    /// Open a plain file. The handle is closed when the reader is dropped.
    ///
    /// A `capacity` of zero falls back to [`DEFAULT_BUFFER_CAPACITY`].
    pub fn from_path<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self, LineError> {
        let path = path.as_ref();
        // a zero-sized BufReader reports EOF on the first fill_buf
        let capacity = if capacity == 0 {
            DEFAULT_BUFFER_CAPACITY
        } else {
            capacity
        };
        let f = open_file(path).map_err(|e| LineError::open_err(path, e))?;

        let rdr = buffered(f, capacity).map_err(|e| LineError::open_err(path, e))?;

        Ok(Self {
            src: Source::Path(path.to_path_buf()),
            rdr,
            line_num: 0,
            byte_pos: 0,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            src: Source::Reader,
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
        }
    }

    pub fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError> {
        dst.clear();
        let n = self.rdr.read_line(dst).map_err(|e| {
            LineError::read_err(self.src.path().map(Path::to_path_buf), e, self.ctx())
        })?;
        if n == 0 {
            return Ok(false);
        }
        self.line_num += 1;
        self.byte_pos += n as u64;
        if dst.ends_with('\n') {
            dst.pop();
        }
        if dst.ends_with('\r') {
            dst.pop();
        }
        Ok(true)
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Number of lines read so far.
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    pub fn byte_pos(&self) -> u64 {
        self.byte_pos
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl LineReader for FileLineReader {
    fn read_line(&mut self, dst: &mut String) -> Result<bool, LineError> {
        FileLineReader::read_line(self, dst)
    }
}

impl Iterator for FileLineReader {
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

#[cfg(feature = "mmap")]
fn buffered(f: File, capacity: usize) -> io::Result<Box<dyn BufRead + Send>> {
    use memmap2::Mmap;
    use std::io::Cursor;
    // FIFOs and devices cannot be mapped
    if !f.metadata()?.is_file() {
        return Ok(Box::new(BufReader::with_capacity(capacity, f)));
    }
    // Own the Mmap inside Cursor to avoid self-ref problems
    let mmap = unsafe { Mmap::map(&f) }?;
    Ok(Box::new(BufReader::with_capacity(capacity, Cursor::new(mmap))))
}

#[cfg(not(feature = "mmap"))]
fn buffered(f: File, capacity: usize) -> io::Result<Box<dyn BufRead + Send>> {
    Ok(Box::new(BufReader::with_capacity(capacity, f)))
}

/// Opens plain files as [`FileLineReader`]s.
#[derive(Debug, Clone)]
pub struct FileOpener {
    capacity: usize,
}

impl FileOpener {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for FileOpener {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

impl OpenLines for FileOpener {
    type Reader = FileLineReader;

    fn open(&mut self, path: &Path) -> Result<FileLineReader, LineError> {
        FileLineReader::from_path(path, self.capacity)
    }
}
