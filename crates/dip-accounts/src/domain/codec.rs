//! # Binary Account Layout
//!
//! Wire format of every account record:
//!
//! ```text
//! [8-byte discriminator][field_1][field_2]...
//! ```
//!
//! Fields are fixed width, in declared order, with no padding and no length
//! prefixes. Integers are little-endian. Trailing bytes after the last
//! declared field are ignored on read so the program can grow its schema.
//!
//! Discriminators follow the Anchor convention: the first 8 bytes of
//! `sha256("account:<Name>")`.

use super::address::{Address, ADDRESS_LEN};
use super::constants::MAX_TAG_LENGTH;
use super::errors::FormatError;
use super::tag::Tag;
use sha2::{Digest, Sha256};

/// Length of the record type prefix.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Field types a record layout may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// 32-byte address.
    Address,
    /// Little-endian unsigned 64-bit integer.
    U64,
    /// Zero-padded 32-byte tag.
    Tag,
}

impl FieldType {
    pub const fn width(self) -> usize {
        match self {
            FieldType::Address => ADDRESS_LEN,
            FieldType::U64 => 8,
            FieldType::Tag => MAX_TAG_LENGTH,
        }
    }
}

/// Ordered `(name, type)` pairs describing a record body.
pub type Layout = &'static [(&'static str, FieldType)];

/// Sum of field widths in `layout`.
pub const fn layout_width(layout: Layout) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < layout.len() {
        total += layout[i].1.width();
        i += 1;
    }
    total
}

fn sighash(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = Sha256::new()
        .chain_update(namespace.as_bytes())
        .chain_update(b":")
        .chain_update(name.as_bytes())
        .finalize();
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

/// Discriminator for an account type named `name`.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("account", name)
}

/// Discriminator for an instruction handler named `name` (snake case).
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("global", name)
}

// =============================================================================
// READER / WRITER
// =============================================================================

/// Cursor over a record body.
pub struct FieldReader<'a> {
    record: &'static str,
    data: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'static str, data: &'a [u8]) -> Self {
        Self {
            record,
            data,
            offset: 0,
        }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], FormatError> {
        let end = self.offset + N;
        let slice = self.data.get(self.offset..end).ok_or(FormatError::TooShort {
            record: self.record,
            expected: DISCRIMINATOR_LEN + end,
            actual: DISCRIMINATOR_LEN + self.data.len(),
        })?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        self.offset = end;
        Ok(out)
    }

    pub fn read_address(&mut self) -> Result<Address, FormatError> {
        self.take::<ADDRESS_LEN>().map(Address::new)
    }

    pub fn read_u64(&mut self) -> Result<u64, FormatError> {
        self.take::<8>().map(u64::from_le_bytes)
    }

    pub fn read_tag(&mut self) -> Result<Tag, FormatError> {
        let field = self.take::<MAX_TAG_LENGTH>()?;
        Tag::from_field(&field)
    }
}

/// Append-only encoder for records and instruction arguments.
#[derive(Debug, Default)]
pub struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    /// Start a buffer with `discriminator` already written.
    pub fn with_discriminator(discriminator: [u8; DISCRIMINATOR_LEN], capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(DISCRIMINATOR_LEN + capacity);
        buf.extend_from_slice(&discriminator);
        Self { buf }
    }

    pub fn write_address(&mut self, address: &Address) -> &mut Self {
        self.buf.extend_from_slice(address.as_bytes());
        self
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_tag(&mut self, tag: &Tag) -> &mut Self {
        self.buf.extend_from_slice(&tag.to_field());
        self
    }

    /// u32 little-endian length prefix followed by the UTF-8 bytes.
    /// Only instruction arguments use this; account records never do.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        self.buf
            .extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// =============================================================================
// RECORD TRAIT
// =============================================================================

/// A fixed-schema account record.
///
/// Implementors describe their layout and read/write their fields in layout
/// order; framing and validation live in the provided methods.
pub trait AccountRecord: Sized {
    /// Type name, also the discriminator preimage.
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN];
    const LAYOUT: Layout;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self, FormatError>;

    fn write_fields(&self, writer: &mut FieldWriter);

    /// Minimum buffer length accepted by `decode`.
    fn encoded_len() -> usize {
        DISCRIMINATOR_LEN + layout_width(Self::LAYOUT)
    }

    /// Decode a raw account buffer.
    ///
    /// # Errors
    /// * `FormatError::TooShort` - shorter than discriminator plus layout
    /// * `FormatError::DiscriminatorMismatch` - wrong record type
    fn decode(data: &[u8]) -> Result<Self, FormatError> {
        let actual = read_discriminator(Self::NAME, data)?;
        if actual != Self::DISCRIMINATOR {
            return Err(FormatError::DiscriminatorMismatch {
                record: Self::NAME,
                expected: Self::DISCRIMINATOR,
                actual,
            });
        }
        if data.len() < Self::encoded_len() {
            return Err(FormatError::TooShort {
                record: Self::NAME,
                expected: Self::encoded_len(),
                actual: data.len(),
            });
        }
        let mut reader = FieldReader::new(Self::NAME, &data[DISCRIMINATOR_LEN..]);
        Self::read_fields(&mut reader)
    }

    /// Encode as discriminator followed by each field.
    fn encode(&self) -> Vec<u8> {
        let mut writer =
            FieldWriter::with_discriminator(Self::DISCRIMINATOR, layout_width(Self::LAYOUT));
        self.write_fields(&mut writer);
        writer.into_bytes()
    }
}

/// Leading discriminator of `data`.
pub fn read_discriminator(
    record: &'static str,
    data: &[u8],
) -> Result<[u8; DISCRIMINATOR_LEN], FormatError> {
    let head = data.get(..DISCRIMINATOR_LEN).ok_or(FormatError::TooShort {
        record,
        expected: DISCRIMINATOR_LEN,
        actual: data.len(),
    })?;
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(head);
    Ok(out)
}
