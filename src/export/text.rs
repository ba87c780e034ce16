//! Line-by-line output of accepted URLs.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early
/// (`urlsift -l urls.txt | head`).
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes every accepted line to stdout and/or a TXT mirror file as it arrives.
pub struct UrlSink {
    outputs: Vec<Box<dyn Write + Send>>,
    written: usize,
}

impl UrlSink {
    /// Opens the configured outputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror file cannot be created.
    pub fn open(echo_stdout: bool, mirror: Option<&Path>) -> Result<Self> {
        let mut outputs: Vec<Box<dyn Write + Send>> = Vec::new();
        if echo_stdout {
            outputs.push(Box::new(IgnoreBrokenPipe::new(BufWriter::new(io::stdout()))));
        }
        if let Some(path) = mirror {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            outputs.push(Box::new(BufWriter::new(file)));
        }
        Ok(Self::from_writers(outputs))
    }

    pub fn from_writers(outputs: Vec<Box<dyn Write + Send>>) -> Self {
        Self {
            outputs,
            written: 0,
        }
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        for output in &mut self.outputs {
            writeln!(output, "{line}").context("Failed to write output line")?;
        }
        self.written += 1;
        Ok(())
    }

    /// Flushes every output and returns the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        for output in &mut self.outputs {
            output.flush().context("Failed to flush output")?;
        }
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_ignore_broken_pipe() {
        let mut writer = IgnoreBrokenPipe::new(ClosedPipe);
        assert_eq!(writer.write(b"abc").unwrap(), 3);
        assert!(writer.flush().is_ok());
    }

    #[test]
    fn test_other_errors_propagate() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut writer = IgnoreBrokenPipe::new(Full);
        assert!(writer.write(b"abc").is_err());
    }

    #[test]
    fn test_sink_writes_to_every_output() {
        let first = SharedBuffer::default();
        let second = SharedBuffer::default();
        let mut sink = UrlSink::from_writers(vec![
            Box::new(first.clone()),
            Box::new(second.clone()),
        ]);
        sink.write_line("https://x.com/a").unwrap();
        sink.write_line("https://x.com/b").unwrap();
        assert_eq!(sink.finish().unwrap(), 2);

        let expected = "https://x.com/a\nhttps://x.com/b\n";
        assert_eq!(String::from_utf8(first.0.lock().unwrap().clone()).unwrap(), expected);
        assert_eq!(String::from_utf8(second.0.lock().unwrap().clone()).unwrap(), expected);
    }

    #[test]
    fn test_sink_mirror_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut sink = UrlSink::open(false, Some(&path)).unwrap();
        sink.write_line("https://x.com/a").unwrap();
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "https://x.com/a\n");
    }

    #[test]
    fn test_sink_mirror_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(UrlSink::open(false, Some(&path)).is_err());
    }
}
