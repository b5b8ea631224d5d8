pub mod compression;
#[cfg(any(test, feature = "fixture"))]
pub mod fixture;
pub mod reader;

use indexmap::IndexMap;
use lodestone_common::{LodestoneError, Result};
use lodestone_logger::{log, LogSeverity::Debug};
use std::fmt;

pub use compression::{decompress, is_gzip, GZIP_MAGIC};
pub use reader::NbtReader;

/// Compound payload. Keeps insertion order; a repeated name replaces the
/// earlier value in place.
pub type Compound = IndexMap<String, Tag>;

/// Wire id of a tag, as written in headers and list prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagKind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagKind {
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Smallest number of bytes a payload of this kind can occupy.
    pub(crate) fn min_payload_size(self) -> usize {
        match self {
            TagKind::End => 0,
            TagKind::Byte | TagKind::Compound => 1,
            TagKind::Short | TagKind::String => 2,
            TagKind::Int | TagKind::Float => 4,
            TagKind::ByteArray | TagKind::IntArray | TagKind::LongArray => 4,
            TagKind::Long | TagKind::Double => 8,
            TagKind::List => 5,
        }
    }
}

impl TryFrom<u8> for TagKind {
    type Error = u8;

    fn try_from(id: u8) -> std::result::Result<Self, Self::Error> {
        Ok(match id {
            0 => TagKind::End,
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            12 => TagKind::LongArray,
            other => return Err(other),
        })
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::End => "TAG_End",
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_Byte_Array",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
            TagKind::IntArray => "TAG_Int_Array",
            TagKind::LongArray => "TAG_Long_Array",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    /// Element kind as declared on the wire, then the elements.
    List(TagKind, Vec<Tag>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(..) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Looks up `key` if this is a compound.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|map| map.get(key))
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(_, list) => Some(list),
            _ => None,
        }
    }

    pub fn list_kind(&self) -> Option<TagKind> {
        match self {
            Tag::List(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    /// Any integral scalar, widened to i64.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Tag::Byte(n) => Some(i64::from(*n)),
            Tag::Short(n) => Some(i64::from(*n)),
            Tag::Int(n) => Some(i64::from(*n)),
            Tag::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Tag::Byte(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Tag::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Tag::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(ints) => Some(ints),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Tag::LongArray(longs) => Some(longs),
            _ => None,
        }
    }
}

/// A decoded NBT document: the root compound and its name.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
    pub name: String,
    pub root: Compound,
}

impl NbtFile {
    pub fn new(name: String, root: Compound) -> Self {
        NbtFile { name, root }
    }

    /// Decodes uncompressed NBT bytes. The root tag must be a compound;
    /// anything after it is ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = NbtReader::new(bytes);
        let (name, root) = reader.read_named_tag()?;
        match root {
            Tag::Compound(root) => {
                log(
                    format!(
                        "Decoded NBT root '{}' with {} entries ({} of {} bytes read)",
                        name,
                        root.len(),
                        reader.offset(),
                        bytes.len()
                    ),
                    Debug,
                );
                Ok(NbtFile::new(name, root))
            }
            other => Err(LodestoneError::InvalidPayload {
                offset: 0,
                reason: format!("root tag must be a TAG_Compound, found {}", other.kind()),
            }),
        }
    }

    /// Decodes NBT bytes that may be gzip-framed.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let raw = decompress(bytes)?;
        Self::from_bytes(&raw)
    }
}
