use std::fmt;
use std::io::Write;

use crate::editor::EditError;

/// An ordered sequence of single-byte characters addressed by zero-based index.
///
/// Every operation either succeeds completely or leaves the contents untouched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a buffer holding `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The contents in document order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Insert `ch` so that it becomes the character at `position`.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidPosition`] if `position > len`.
    pub fn insert(&mut self, position: usize, ch: u8) -> Result<(), EditError> {
        if position > self.bytes.len() {
            return Err(EditError::invalid_position(position, self.bytes.len()));
        }
        self.bytes.insert(position, ch);
        Ok(())
    }

    /// Remove and return the character at `position`.
    ///
    /// # Errors
    /// Returns [`EditError::EmptyBuffer`] when there is nothing to delete, or
    /// [`EditError::InvalidPosition`] if `position >= len`.
    pub fn delete(&mut self, position: usize) -> Result<u8, EditError> {
        if self.bytes.is_empty() {
            return Err(EditError::EmptyBuffer);
        }
        if position >= self.bytes.len() {
            return Err(EditError::invalid_position(position, self.bytes.len()));
        }
        Ok(self.bytes.remove(position))
    }

    /// The saved-file form: one byte per character, no terminator.
    pub fn serialize(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Write the serialized contents to `writer` in one sequential pass.
    ///
    /// # Errors
    /// Propagates any error from the writer.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.bytes.len())
            .field("text", &self.to_string())
            .finish()
    }
}
