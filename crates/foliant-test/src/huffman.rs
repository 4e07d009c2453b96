//! Decode-side Huffman lookup, built from `foliant_ccitt::tables`
//!
//! The forward tables already enumerate every run length the encoder ever
//! emits; this inverts them into `(code, length) -> run token` maps instead
//! of hand-transcribing the ITU-T tables a second time.

use crate::bitreader::BitReader;
use crate::error::{TestError, TestResult};
use foliant_ccitt::tables::{makeup_code, terminating_code};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub(crate) enum RunToken {
    Terminating(u16),
    Makeup(u16),
}

/// One colour's run-length Huffman table, decode direction
pub struct RunTable {
    by_code: HashMap<(u16, u8), RunToken>,
    max_len: u8,
}

impl RunTable {
    pub fn build(color: u8) -> Self {
        let mut by_code = HashMap::new();
        let mut max_len = 0u8;
        for run in 0..=63u16 {
            let (code, len) = terminating_code(color, run);
            by_code.insert((code, len), RunToken::Terminating(run));
            max_len = max_len.max(len);
        }
        let mut run = 64u16;
        while run <= 2560 {
            let (code, len) = makeup_code(color, run);
            by_code.insert((code, len), RunToken::Makeup(run));
            max_len = max_len.max(len);
            run += 64;
        }
        Self { by_code, max_len }
    }

    /// Read exactly one codeword (terminating or make-up) for this colour.
    /// Safe to call without any surrounding mode disambiguation: within a
    /// single colour's table the ITU-T codes are themselves prefix-free.
    pub(crate) fn read_one(&self, reader: &mut BitReader, row: usize) -> TestResult<RunToken> {
        let mut code = 0u16;
        let mut len = 0u8;
        loop {
            let bit = reader
                .read_bit()
                .ok_or(TestError::UnterminatedCode { row, bits_read: len as u32 })?;
            code = (code << 1) | bit as u16;
            len += 1;
            if let Some(token) = self.by_code.get(&(code, len)) {
                return Ok(*token);
            }
            if len > self.max_len {
                return Err(TestError::UnterminatedCode { row, bits_read: len as u32 });
            }
        }
    }

    /// Decode one full run length (accumulating make-up codes until a
    /// terminating code is read), mirroring `run_length::write_run`'s
    /// reduction in reverse.
    pub fn read_run(&self, reader: &mut BitReader, row: usize) -> TestResult<u16> {
        self.continue_run(0, reader, row)
    }

    /// Like [`read_run`](Self::read_run), but starting from a make-up total
    /// already accumulated elsewhere (the decision table's ambiguity
    /// resolution consumes the first code itself).
    pub(crate) fn continue_run(&self, mut total: u16, reader: &mut BitReader, row: usize) -> TestResult<u16> {
        loop {
            match self.read_one(reader, row)? {
                RunToken::Terminating(run) => return Ok(total + run),
                RunToken::Makeup(run) => total += run,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_terminating_run() {
        let white = RunTable::build(0);
        for run in 0..=63u16 {
            let (code, len) = terminating_code(0, run);
            let mut bw = foliant_bitio::BitWriter::new();
            bw.write_bits(code, len);
            bw.flush();
            let bytes = bw.into_bytes();
            let mut reader = BitReader::new(&bytes);
            assert_eq!(white.read_run(&mut reader, 0).unwrap(), run);
        }
    }

    #[test]
    fn round_trips_a_makeup_plus_terminating_run() {
        let black = RunTable::build(1);
        let mut bw = foliant_bitio::BitWriter::new();
        let (mcode, mlen) = makeup_code(1, 1728);
        bw.write_bits(mcode, mlen);
        let (tcode, tlen) = terminating_code(1, 10);
        bw.write_bits(tcode, tlen);
        bw.flush();
        let bytes = bw.into_bytes();
        let mut reader = BitReader::new(&bytes);
        assert_eq!(black.read_run(&mut reader, 0).unwrap(), 1738);
    }
}
