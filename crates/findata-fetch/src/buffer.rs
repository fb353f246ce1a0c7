//! Growable response body accumulator.

use bytes::Bytes;

use crate::client::TransportError;

/// Accumulates one HTTP response body as chunks arrive.
///
/// The buffer starts empty and only grows. Growth goes through
/// [`Vec::try_reserve`], so running out of memory is reported as
/// [`TransportError::Allocation`] instead of aborting the process.
#[derive(Debug, Default)]
pub struct TransportBuffer {
    data: Vec<u8>,
}

impl TransportBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Appends a chunk of received data.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Allocation`] if the buffer cannot grow; the
    /// buffer is left unchanged in that case.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), TransportError> {
        self.grow(chunk.len())?;
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    fn grow(&mut self, additional: usize) -> Result<(), TransportError> {
        self.data
            .try_reserve(additional)
            .map_err(|_| TransportError::Allocation {
                requested: additional,
            })
    }

    /// Returns the number of bytes received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the received bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the body.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.data)
    }
}
