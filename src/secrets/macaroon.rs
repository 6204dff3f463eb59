//! Minimal reader for v2 binary macaroons.
//!
//! PyPI API tokens embed a v2 binary macaroon after the `pypi-` prefix.
//! Validation only needs to inspect the decoded structure (location and
//! caveat identifiers), so this reader covers exactly the v2 binary
//! serialisation: a version byte, then varint-framed fields grouped into an
//! EOS-terminated header section, caveat sections and a signature.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use thiserror::Error;

const VERSION_V2: u8 = 2;

const FIELD_LOCATION: u64 = 1;
const FIELD_IDENTIFIER: u64 = 2;
const FIELD_VID: u64 = 4;
const FIELD_SIGNATURE: u64 = 6;

/// Errors raised while decoding a serialised macaroon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacaroonError {
    #[error("invalid base64: {0}")]
    Base64(String),

    #[error("unsupported serialisation version {0}")]
    UnsupportedVersion(u8),

    #[error("unexpected field type {0}")]
    UnexpectedField(u64),

    #[error("truncated input")]
    Truncated,

    #[error("length prefix overflows")]
    VarintOverflow,

    #[error("location is not valid UTF-8")]
    InvalidUtf8,
}

/// A single caveat: its identifier plus the third-party fields, which PyPI
/// tokens do not use but the wire format permits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caveat {
    pub identifier: Vec<u8>,
    pub location: Option<String>,
    pub verification_id: Option<Vec<u8>>,
}

/// A decoded macaroon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macaroon {
    pub location: Option<String>,
    pub identifier: Vec<u8>,
    pub caveats: Vec<Caveat>,
    pub signature: Vec<u8>,
}

impl Macaroon {
    /// Decode a base64 string (urlsafe or standard alphabet, padding
    /// tolerated) as a v2 binary macaroon.
    pub fn from_base64(encoded: &str) -> Result<Self, MacaroonError> {
        let trimmed = encoded.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(trimmed)
            .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
            .map_err(|e| MacaroonError::Base64(e.to_string()))?;
        Self::decode_v2(&bytes)
    }

    /// Decode the v2 binary serialisation.
    pub fn decode_v2(bytes: &[u8]) -> Result<Self, MacaroonError> {
        let mut reader = Reader { buf: bytes, pos: 0 };

        let version = reader.take_byte()?;
        if version != VERSION_V2 {
            return Err(MacaroonError::UnsupportedVersion(version));
        }

        let location = reader.try_text_field(FIELD_LOCATION)?;
        let identifier = reader.expect_field(FIELD_IDENTIFIER)?.to_vec();
        reader.expect_eos()?;

        let mut caveats = Vec::new();
        loop {
            if reader.at_eos() {
                reader.take_byte()?;
                break;
            }

            let location = reader.try_text_field(FIELD_LOCATION)?;
            let identifier = reader.expect_field(FIELD_IDENTIFIER)?.to_vec();
            let verification_id = reader.try_field(FIELD_VID)?.map(<[u8]>::to_vec);
            reader.expect_eos()?;

            caveats.push(Caveat {
                identifier,
                location,
                verification_id,
            });
        }

        let signature = reader.expect_field(FIELD_SIGNATURE)?.to_vec();

        Ok(Macaroon {
            location,
            identifier,
            caveats,
            signature,
        })
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take_byte(&mut self) -> Result<u8, MacaroonError> {
        let byte = *self.buf.get(self.pos).ok_or(MacaroonError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], MacaroonError> {
        let end = self.pos.checked_add(len).ok_or(MacaroonError::Truncated)?;
        let slice = self.buf.get(self.pos..end).ok_or(MacaroonError::Truncated)?;
        self.pos = end;
        Ok(slice)
    }

    fn at_eos(&self) -> bool {
        self.buf.get(self.pos) == Some(&0)
    }

    fn varint(&mut self) -> Result<u64, MacaroonError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.take_byte()?;
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift > 56 {
                return Err(MacaroonError::VarintOverflow);
            }
        }
    }

    /// Read a field of the given type if it is next, leaving the reader
    /// untouched otherwise.
    fn try_field(&mut self, field_type: u64) -> Result<Option<&'a [u8]>, MacaroonError> {
        if self.at_eos() {
            return Ok(None);
        }

        let mark = self.pos;
        let found = self.varint()?;
        if found != field_type {
            self.pos = mark;
            return Ok(None);
        }

        let len = usize::try_from(self.varint()?).map_err(|_| MacaroonError::VarintOverflow)?;
        Ok(Some(self.take(len)?))
    }

    fn expect_field(&mut self, field_type: u64) -> Result<&'a [u8], MacaroonError> {
        match self.try_field(field_type)? {
            Some(data) => Ok(data),
            None => {
                let mark = self.pos;
                let found = self.varint().unwrap_or(0);
                self.pos = mark;
                Err(MacaroonError::UnexpectedField(found))
            }
        }
    }

    fn try_text_field(&mut self, field_type: u64) -> Result<Option<String>, MacaroonError> {
        match self.try_field(field_type)? {
            Some(data) => String::from_utf8(data.to_vec())
                .map(Some)
                .map_err(|_| MacaroonError::InvalidUtf8),
            None => Ok(None),
        }
    }

    fn expect_eos(&mut self) -> Result<(), MacaroonError> {
        let byte = self.take_byte()?;
        if byte != 0 {
            return Err(MacaroonError::UnexpectedField(u64::from(byte)));
        }
        Ok(())
    }
}
