//! Log Tail
//!
//! Follows a growing text file by polling its length, the way `tail -f`
//! does. Used for the Minecraft client log and for the debug console.

use std::fs::{File, Metadata};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Where reading starts when the file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAt {
    /// Skip everything already in the file
    End,
    /// Replay existing content first
    Beginning,
}

/// Reads lines appended to a file since the last poll
pub struct LogTail {
    path: PathBuf,
    file: File,
    position: u64,
    /// Bytes of a line whose newline has not been written yet
    partial: Vec<u8>,
}

impl LogTail {
    /// Open `path` for tailing
    pub fn open(path: impl AsRef<Path>, start: StartAt) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let position = match start {
            StartAt::End => file.metadata()?.len(),
            StartAt::Beginning => 0,
        };
        log::debug!("Tailing {} from offset {}", path.display(), position);

        Ok(Self {
            path,
            file,
            position,
            partial: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read complete, non-empty lines written since the last poll
    ///
    /// Never blocks. Invalid UTF-8 is dropped from the returned lines. When
    /// the file at `path` was replaced (the client renames `latest.log` away
    /// on restart) the rest of the old file is read first, then the new file
    /// from its start.
    pub fn poll_lines(&mut self) -> std::io::Result<Vec<String>> {
        let open = self.file.metadata()?;

        if !self.replaced(&open) {
            if open.len() < self.position {
                log::info!(
                    "{} was truncated, reading from the start",
                    self.path.display()
                );
                self.position = 0;
                self.partial.clear();
            }
            return self.read_to(open.len());
        }

        let mut lines = self.read_to(open.len())?;
        log::info!("{} was replaced, reopening", self.path.display());
        self.file = File::open(&self.path)?;
        self.position = 0;
        self.partial.clear();

        let len = self.file.metadata()?.len();
        lines.extend(self.read_to(len)?);
        Ok(lines)
    }

    /// Whether `path` now names a different file than the one being read
    ///
    /// A missing path counts as not replaced; the old file is kept until a
    /// new one appears.
    fn replaced(&self, open: &Metadata) -> bool {
        let Ok(current) = std::fs::metadata(&self.path) else {
            return false;
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            if current.ino() != open.ino() || current.dev() != open.dev() {
                return true;
            }
        }

        current.len() < self.position && open.len() >= self.position
    }

    /// Read from the current position up to `len` and split off complete lines
    fn read_to(&mut self, len: u64) -> std::io::Result<Vec<String>> {
        if len <= self.position {
            return Ok(Vec::new());
        }

        self.file.seek(SeekFrom::Start(self.position))?;
        let mut chunk = Vec::with_capacity((len - self.position) as usize);
        let read = (&mut self.file)
            .take(len - self.position)
            .read_to_end(&mut chunk)?;
        self.position += read as u64;

        self.partial.extend_from_slice(&chunk);
        Ok(self.take_complete_lines())
    }

    fn take_complete_lines(&mut self) -> Vec<String> {
        let Some(last_newline) = self.partial.iter().rposition(|&b| b == b'\n') else {
            return Vec::new();
        };

        let rest = self.partial.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.partial, rest);

        complete
            .split(|&b| b == b'\n')
            .map(decode_line)
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// Blocking iterator over new lines, polling every `interval`
    ///
    /// The iterator never ends on its own; it stops at the first read error
    /// or once a flag passed to [`Lines::until`] is set.
    pub fn into_lines(self, interval: Duration) -> Lines {
        Lines {
            tail: self,
            interval,
            buffered: Vec::new().into_iter(),
            stop: None,
            error: None,
        }
    }
}

/// Lossy decode with the replacement characters removed again
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Iterator returned by [`LogTail::into_lines`]
pub struct Lines {
    tail: LogTail,
    interval: Duration,
    buffered: std::vec::IntoIter<String>,
    stop: Option<Arc<AtomicBool>>,
    error: Option<std::io::Error>,
}

impl Lines {
    /// End the iteration once `stop` is set; checked between polls
    pub fn until(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Read error that ended the iteration, if any
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    fn stopped(&self) -> bool {
        self.error.is_some()
            || self
                .stop
                .as_ref()
                .is_some_and(|stop| stop.load(Ordering::Relaxed))
    }
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.buffered.next() {
                return Some(line);
            }
            if self.stopped() {
                return None;
            }
            match self.tail.poll_lines() {
                Ok(lines) if lines.is_empty() => thread::sleep(self.interval),
                Ok(lines) => self.buffered = lines.into_iter(),
                Err(e) => {
                    log::debug!("Reading {} failed: {}", self.tail.path().display(), e);
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::OpenOptions;
    use std::io::Write;

    fn append(path: &Path, bytes: &[u8]) {
        let mut file = OpenOptions::new().append(true).open(path).unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
    }

    fn log_file(initial: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.log");
        std::fs::write(&path, initial).unwrap();
        (dir, path)
    }

    #[test]
    fn test_existing_content_is_skipped() {
        let (_dir, path) = log_file(b"old line\n");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();
        assert!(tail.poll_lines().unwrap().is_empty());

        append(&path, b"new line\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["new line"]);
    }

    #[test]
    fn test_beginning_replays_content() {
        let (_dir, path) = log_file(b"one\ntwo\n");
        let mut tail = LogTail::open(&path, StartAt::Beginning).unwrap();
        assert_eq!(tail.poll_lines().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_lines_arrive_in_order() {
        let (_dir, path) = log_file(b"");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"a\nb\n");
        append(&path, b"c\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_partial_line_waits_for_newline() {
        let (_dir, path) = log_file(b"");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"Notch has jo");
        assert!(tail.poll_lines().unwrap().is_empty());

        append(&path, b"ined\r\nnext");
        assert_eq!(tail.poll_lines().unwrap(), vec!["Notch has joined"]);

        append(&path, b"\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["next"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let (_dir, path) = log_file(b"");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"\n  \nx\n\r\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["x"]);
    }

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let (_dir, path) = log_file(b"");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"Ste\xffve\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["Steve"]);
    }

    #[test]
    fn test_truncation_restarts_from_zero() {
        let (_dir, path) = log_file(b"a long line from the previous session\n");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        std::fs::write(&path, b"fresh\n").unwrap();
        assert_eq!(tail.poll_lines().unwrap(), vec!["fresh"]);
    }

    #[test]
    fn test_replaced_file_is_reopened() {
        let (dir, path) = log_file(b"previous session\n");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"last old line\n");
        std::fs::rename(&path, dir.path().join("2024-05-01-1.log")).unwrap();
        std::fs::write(&path, b"new session\n").unwrap();

        assert_eq!(
            tail.poll_lines().unwrap(),
            vec!["last old line", "new session"]
        );

        append(&path, b"Notch has joined\n");
        assert_eq!(tail.poll_lines().unwrap(), vec!["Notch has joined"]);
    }

    #[test]
    fn test_missing_path_keeps_reading_old_file() {
        let (dir, path) = log_file(b"");
        let mut tail = LogTail::open(&path, StartAt::End).unwrap();

        append(&path, b"before rename\n");
        std::fs::rename(&path, dir.path().join("old.log")).unwrap();
        assert_eq!(tail.poll_lines().unwrap(), vec!["before rename"]);
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LogTail::open(dir.path().join("nope.log"), StartAt::End).is_err());
    }

    #[test]
    fn test_into_lines_yields_appended_lines() {
        let (_dir, path) = log_file(b"skipped\n");
        let tail = LogTail::open(&path, StartAt::End).unwrap();

        let writer_path = path.clone();
        let writer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            append(&writer_path, b"first\nsecond\n");
        });

        let lines: Vec<String> = tail.into_lines(Duration::from_millis(10)).take(2).collect();
        writer.join().unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_into_lines_ends_when_stopped() {
        let (_dir, path) = log_file(b"");
        let stop = Arc::new(AtomicBool::new(true));
        let mut lines = LogTail::open(&path, StartAt::End)
            .unwrap()
            .into_lines(Duration::from_millis(10))
            .until(Arc::clone(&stop));

        assert_eq!(lines.next(), None);
        assert!(lines.take_error().is_none());
    }
}
