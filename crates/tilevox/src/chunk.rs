//! RIFF-style chunk records used by the `.vox` container.

use std::io::{self, Write};

/// Size of a chunk header: tag, content length, children length.
pub const CHUNK_HEADER_LEN: usize = 12;

/// A named record with its own content and the encoded bytes of its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub id: [u8; 4],
    pub content: Vec<u8>,
    pub children: Vec<u8>,
}

impl Chunk {
    /// A leaf chunk without children.
    pub fn new(id: &[u8; 4], content: Vec<u8>) -> Self {
        Self {
            id: *id,
            content,
            children: Vec::new(),
        }
    }

    /// A chunk with no content of its own wrapping `children` in order.
    pub fn with_children(id: &[u8; 4], children: &[Chunk]) -> Self {
        let mut bytes = Vec::with_capacity(children.iter().map(Chunk::encoded_len).sum());
        for child in children {
            child.append_to(&mut bytes);
        }
        Self {
            id: *id,
            content: Vec::new(),
            children: bytes,
        }
    }

    /// Total bytes this chunk occupies once written.
    pub fn encoded_len(&self) -> usize {
        CHUNK_HEADER_LEN + self.content.len() + self.children.len()
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.id)?;
        w.write_all(&(self.content.len() as u32).to_le_bytes())?;
        w.write_all(&(self.children.len() as u32).to_le_bytes())?;
        w.write_all(&self.content)?;
        w.write_all(&self.children)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.append_to(&mut out);
        out
    }

    fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&(self.content.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.children.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.content);
        out.extend_from_slice(&self.children);
    }
}
