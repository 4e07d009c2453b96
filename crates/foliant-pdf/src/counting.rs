//! A `Write` adapter that tracks the absolute byte offset written so far

use std::io::{self, Write};

pub struct CountingWriter<W> {
    inner: W,
    offset: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.offset += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_cumulative_offset() {
        let mut cw = CountingWriter::new(Vec::new());
        cw.write_all(b"hello").unwrap();
        assert_eq!(cw.offset(), 5);
        cw.write_all(b" world").unwrap();
        assert_eq!(cw.offset(), 11);
    }
}
