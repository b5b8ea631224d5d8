//! NBT encoder for building test inputs. Compiled only for tests or with
//! the `fixture` feature.

use crate::{Compound, Tag};
use byteorder::{BigEndian, WriteBytesExt};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Builds a compound from `(name, tag)` pairs, in order.
pub fn compound(entries: Vec<(&str, Tag)>) -> Compound {
    entries
        .into_iter()
        .map(|(name, tag)| (name.to_string(), tag))
        .collect()
}

/// A list whose element kind is taken from the first element (End if empty).
pub fn list(items: Vec<Tag>) -> Tag {
    let kind = items.first().map(Tag::kind).unwrap_or(crate::TagKind::End);
    Tag::List(kind, items)
}

pub fn int_list(values: &[i32]) -> Tag {
    Tag::List(
        crate::TagKind::Int,
        values.iter().map(|&v| Tag::Int(v)).collect(),
    )
}

/// Encodes a root compound named `name` as uncompressed NBT.
pub fn encode(name: &str, root: &Compound) -> Vec<u8> {
    let mut buffer = Vec::new();
    write_named(&mut buffer, name, &Tag::Compound(root.clone()))
        .expect("writing to a Vec cannot fail");
    buffer
}

pub fn encode_gzip(name: &str, root: &Compound) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&encode(name, root))
        .expect("writing to a Vec cannot fail");
    encoder.finish().expect("writing to a Vec cannot fail")
}

pub fn write_named<W: Write>(writer: &mut W, name: &str, tag: &Tag) -> io::Result<()> {
    writer.write_u8(tag.kind().id())?;

    if !matches!(tag, Tag::End) {
        writer.write_u16::<BigEndian>(name.len() as u16)?;
        writer.write_all(name.as_bytes())?;
    }

    write_payload(writer, tag)
}

fn write_payload<W: Write>(writer: &mut W, tag: &Tag) -> io::Result<()> {
    match tag {
        Tag::End => Ok(()),
        Tag::Byte(v) => writer.write_i8(*v),
        Tag::Short(v) => writer.write_i16::<BigEndian>(*v),
        Tag::Int(v) => writer.write_i32::<BigEndian>(*v),
        Tag::Long(v) => writer.write_i64::<BigEndian>(*v),
        Tag::Float(v) => writer.write_f32::<BigEndian>(*v),
        Tag::Double(v) => writer.write_f64::<BigEndian>(*v),
        Tag::ByteArray(v) => {
            writer.write_i32::<BigEndian>(v.len() as i32)?;
            for &b in v {
                writer.write_i8(b)?;
            }
            Ok(())
        }
        Tag::String(v) => {
            writer.write_u16::<BigEndian>(v.len() as u16)?;
            writer.write_all(v.as_bytes())
        }
        Tag::List(kind, items) => {
            writer.write_u8(kind.id())?;
            writer.write_i32::<BigEndian>(items.len() as i32)?;
            for item in items {
                write_payload(writer, item)?;
            }
            Ok(())
        }
        Tag::Compound(map) => {
            for (name, tag) in map {
                write_named(writer, name, tag)?;
            }
            write_named(writer, "", &Tag::End)
        }
        Tag::IntArray(v) => {
            writer.write_i32::<BigEndian>(v.len() as i32)?;
            for &i in v {
                writer.write_i32::<BigEndian>(i)?;
            }
            Ok(())
        }
        Tag::LongArray(v) => {
            writer.write_i32::<BigEndian>(v.len() as i32)?;
            for &l in v {
                writer.write_i64::<BigEndian>(l)?;
            }
            Ok(())
        }
    }
}
