use crate::{Compound, Tag, TagKind};
use byteorder::{BigEndian, ReadBytesExt};
use lodestone_common::{LodestoneError, Result};
use std::io::Cursor;

/// Maximum List/Compound nesting accepted before the input is rejected.
pub const MAX_DEPTH: usize = 512;

/// Big-endian NBT reader over an in-memory buffer.
///
/// Every read is bounds-checked against the remaining bytes first, so a
/// short buffer fails with `Truncated` carrying the offset of the read
/// rather than a bare EOF.
#[derive(Debug)]
pub struct NbtReader<'a> {
    cursor: Cursor<&'a [u8]>,
    depth: usize,
}

impl<'a> NbtReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        NbtReader {
            cursor: Cursor::new(buffer),
            depth: 0,
        }
    }

    /// Current cursor position in bytes.
    pub fn offset(&self) -> u64 {
        self.cursor.position()
    }

    pub fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len();
        len.saturating_sub(self.cursor.position() as usize)
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            return Err(LodestoneError::Truncated {
                offset: self.offset(),
                needed,
                available,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.ensure(1)?;
        Ok(self.cursor.read_i8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.cursor.read_u16::<BigEndian>()?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.ensure(2)?;
        Ok(self.cursor.read_i16::<BigEndian>()?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.cursor.read_i32::<BigEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.ensure(8)?;
        Ok(self.cursor.read_i64::<BigEndian>()?)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        Ok(self.cursor.read_f32::<BigEndian>()?)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.ensure(8)?;
        Ok(self.cursor.read_f64::<BigEndian>()?)
    }

    /// Reads a kind byte, rejecting ids outside 0..=12.
    pub fn read_kind(&mut self) -> Result<TagKind> {
        let offset = self.offset();
        let id = self.read_u8()?;
        TagKind::try_from(id).map_err(|kind| LodestoneError::UnknownTagKind { kind, offset })
    }

    /// u16-prefixed string. Bytes that are not valid UTF-8 (Java's modified
    /// UTF-8 among them) are replaced with U+FFFD.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_u16()? as usize;
        self.ensure(length)?;
        let start = self.cursor.position() as usize;
        let bytes = &self.cursor.get_ref()[start..start + length];
        let value = String::from_utf8_lossy(bytes).into_owned();
        self.cursor.set_position((start + length) as u64);
        Ok(value)
    }

    /// Reads an i32 element count and checks that `count * min_width`
    /// bytes are still available before anything is allocated.
    fn read_length(&mut self, min_width: usize) -> Result<usize> {
        let offset = self.offset();
        let length = self.read_i32()?;
        if length < 0 {
            return Err(LodestoneError::InvalidPayload {
                offset,
                reason: format!("negative length {}", length),
            });
        }
        let length = length as usize;
        self.ensure(length.saturating_mul(min_width))?;
        Ok(length)
    }

    /// Reads a full tag header and payload. An End tag has no name and
    /// comes back as `("", Tag::End)`.
    pub fn read_named_tag(&mut self) -> Result<(String, Tag)> {
        let kind = self.read_kind()?;
        if kind == TagKind::End {
            return Ok((String::new(), Tag::End));
        }

        let name = self.read_string()?;
        let tag = self.read_payload(kind)?;
        Ok((name, tag))
    }

    pub fn read_payload(&mut self, kind: TagKind) -> Result<Tag> {
        match kind {
            TagKind::End => Ok(Tag::End),
            TagKind::Byte => Ok(Tag::Byte(self.read_i8()?)),
            TagKind::Short => Ok(Tag::Short(self.read_i16()?)),
            TagKind::Int => Ok(Tag::Int(self.read_i32()?)),
            TagKind::Long => Ok(Tag::Long(self.read_i64()?)),
            TagKind::Float => Ok(Tag::Float(self.read_f32()?)),
            TagKind::Double => Ok(Tag::Double(self.read_f64()?)),
            TagKind::ByteArray => {
                let length = self.read_length(1)?;
                let mut bytes = vec![0i8; length];
                self.cursor.read_i8_into(&mut bytes)?;
                Ok(Tag::ByteArray(bytes))
            }
            TagKind::String => Ok(Tag::String(self.read_string()?)),
            TagKind::List => self.nested(|reader| reader.read_list()),
            TagKind::Compound => self.nested(|reader| reader.read_compound().map(Tag::Compound)),
            TagKind::IntArray => {
                let length = self.read_length(4)?;
                let mut ints = vec![0i32; length];
                self.cursor.read_i32_into::<BigEndian>(&mut ints)?;
                Ok(Tag::IntArray(ints))
            }
            TagKind::LongArray => {
                let length = self.read_length(8)?;
                let mut longs = vec![0i64; length];
                self.cursor.read_i64_into::<BigEndian>(&mut longs)?;
                Ok(Tag::LongArray(longs))
            }
        }
    }

    fn read_list(&mut self) -> Result<Tag> {
        let kind_offset = self.offset();
        let element_kind = self.read_kind()?;
        let length = self.read_length(element_kind.min_payload_size())?;
        if element_kind == TagKind::End && length > 0 {
            return Err(LodestoneError::InvalidPayload {
                offset: kind_offset,
                reason: format!("list of TAG_End with {} elements", length),
            });
        }

        let mut list = Vec::with_capacity(length);
        for _ in 0..length {
            list.push(self.read_payload(element_kind)?);
        }
        Ok(Tag::List(element_kind, list))
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let (name, tag) = self.read_named_tag()?;
            if let Tag::End = tag {
                break;
            }
            compound.insert(name, tag);
        }
        Ok(compound)
    }

    fn nested<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(LodestoneError::InvalidPayload {
                offset: self.offset(),
                reason: format!("nesting deeper than {} levels", MAX_DEPTH),
            });
        }
        self.depth += 1;
        let result = read(self);
        self.depth -= 1;
        result
    }
}
