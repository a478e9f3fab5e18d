//! Bounds-checked byte cursors over caller-owned buffers.
//!
//! Every field read or write goes through these helpers, which check the
//! remaining capacity before touching the buffer and report a shortfall as an
//! error instead of indexing out of bounds.

use oxixca_core::error::{Result, XcaError};

/// Little-endian reader over a compressed stream.
#[derive(Debug)]
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| XcaError::input_exhausted(self.pos, N, self.remaining()))?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos += N;
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    /// Re-read a byte that was already consumed, without moving the cursor.
    pub(crate) fn peek_back(&self, position: usize) -> Result<u8> {
        if position >= self.pos {
            return Err(XcaError::input_exhausted(position, 1, 0));
        }
        Ok(self.data[position])
    }
}

/// Little-endian writer into a fixed-capacity output buffer.
#[derive(Debug)]
pub(crate) struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_full(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Fail unless `needed` more bytes fit.
    pub(crate) fn ensure(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(XcaError::output_exhausted(
                self.pos,
                needed,
                self.remaining(),
            ));
        }
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure(bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub(crate) fn write_u8(&mut self, value: u8) -> Result<()> {
        self.put(&[value])
    }

    pub(crate) fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    pub(crate) fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    /// Reserve `len` zeroed bytes and return their position.
    pub(crate) fn reserve(&mut self, len: usize) -> Result<usize> {
        self.ensure(len)?;
        let at = self.pos;
        self.buf[at..at + len].fill(0);
        self.pos += len;
        Ok(at)
    }

    /// Overwrite a previously reserved `u32`.
    pub(crate) fn patch_u32_le(&mut self, position: usize, value: u32) -> Result<()> {
        if position + 4 > self.pos {
            return Err(XcaError::output_exhausted(position, 4, 0));
        }
        self.buf[position..position + 4].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// OR `bits` into a byte that was already written.
    pub(crate) fn or_u8(&mut self, position: usize, bits: u8) -> Result<()> {
        if position >= self.pos {
            return Err(XcaError::output_exhausted(position, 1, 0));
        }
        self.buf[position] |= bits;
        Ok(())
    }

    /// Copy `length` bytes from `offset` bytes behind the cursor, one at a time.
    ///
    /// Source and destination may overlap, which expands runs such as a
    /// single byte repeated with `offset == 1`.
    pub(crate) fn copy_back(&mut self, offset: usize, length: usize) -> Result<()> {
        if offset == 0 || offset > self.pos {
            return Err(XcaError::invalid_back_reference(offset, self.pos));
        }
        self.ensure(length)?;
        for _ in 0..length {
            self.buf[self.pos] = self.buf[self.pos - offset];
            self.pos += 1;
        }
        Ok(())
    }
}
