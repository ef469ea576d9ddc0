// crates/varint-core/src/source.rs
//
// Sequential byte sources. A decode call borrows a source for its duration
// and advances it by exactly the bytes it consumed, including on failure.

use std::io::{ErrorKind, Read};

use crate::error::{Result, VarintError};

pub trait ByteSource {
    /// Next byte, or `UnexpectedEndOfInput` once the source is exhausted.
    fn next_byte(&mut self) -> Result<u8>;

    /// Fill `buf` completely. On a short source the bytes that were
    /// available are still consumed.
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.next_byte()?;
        }
        Ok(())
    }
}

impl ByteSource for &[u8] {
    fn next_byte(&mut self) -> Result<u8> {
        let (&b, rest) = self
            .split_first()
            .ok_or(VarintError::UnexpectedEndOfInput)?;
        *self = rest;
        Ok(b)
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.len() < buf.len() {
            *self = &[];
            return Err(VarintError::UnexpectedEndOfInput);
        }
        let (head, rest) = self.split_at(buf.len());
        buf.copy_from_slice(head);
        *self = rest;
        Ok(())
    }
}

/// Cursor over a borrowed buffer that remembers its read position.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn get_ref(&self) -> &'a [u8] {
        self.bytes
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<u8> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or(VarintError::UnexpectedEndOfInput)?;
        self.pos += 1;
        Ok(b)
    }

    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let rest = self.remaining();
        if rest.len() < buf.len() {
            self.pos = self.bytes.len();
            return Err(VarintError::UnexpectedEndOfInput);
        }
        buf.copy_from_slice(&rest[..buf.len()]);
        self.pos += buf.len();
        Ok(())
    }
}

/// Adapter for any [`Read`]. Reads one byte at a time, so wrap unbuffered
/// readers in a `BufReader`.
///
/// `Interrupted` reads are retried. A zero-length read or `UnexpectedEof`
/// becomes `UnexpectedEndOfInput`, and every other I/O error propagates as is.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn next_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Err(VarintError::UnexpectedEndOfInput),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(buf[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(VarintError::UnexpectedEndOfInput)
                }
                Err(e) => return Err(VarintError::Io(e)),
            }
        }
    }
}
