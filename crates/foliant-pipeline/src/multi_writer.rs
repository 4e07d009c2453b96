//! A `Write` fan-out to every output directory's temp file at once

use std::fs::File;
use std::io::{self, Write};

pub struct MultiWriter {
    files: Vec<File>,
}

impl MultiWriter {
    pub fn new(files: Vec<File>) -> Self {
        Self { files }
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for file in &mut self.files {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for file in &mut self.files {
            file.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom};

    #[test]
    fn writes_to_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = File::create(dir.path().join("a")).unwrap();
        let f2 = File::create(dir.path().join("b")).unwrap();
        let mut mw = MultiWriter::new(vec![f1, f2]);
        mw.write_all(b"hello").unwrap();
        for mut f in mw.into_files() {
            f.seek(SeekFrom::Start(0)).unwrap();
            let mut s = String::new();
            f.read_to_string(&mut s).unwrap();
            assert_eq!(s, "hello");
        }
    }
}
