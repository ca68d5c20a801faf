use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::format::{ADDRESS_LEN, ADDRESS_OFFSET, HOURS_OFFSET, NAME_LEN, NAME_OFFSET, RECORD_SIZE};
use crate::text::FixedStr;

/// One fixed-size employee entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: FixedStr<NAME_LEN>,
    pub address: FixedStr<ADDRESS_LEN>,
    /// Host order in memory, big-endian on disk.
    pub hours: u32,
}

/// Errors from parsing a `name,address,hours` add string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected `name,address,hours`, found {found} field(s)")]
    MissingField { found: usize },
    #[error("invalid hours `{value}`")]
    InvalidHours {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl Employee {
    /// Builds a record, truncating `name` and `address` to their field widths.
    pub fn new(name: &str, address: &str, hours: u32) -> Self {
        Self {
            name: FixedStr::new(name),
            address: FixedStr::new(address),
            hours,
        }
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[NAME_OFFSET..NAME_OFFSET + NAME_LEN].copy_from_slice(self.name.as_bytes());
        buf[ADDRESS_OFFSET..ADDRESS_OFFSET + ADDRESS_LEN].copy_from_slice(self.address.as_bytes());
        codec::put_u32(&mut buf, HOURS_OFFSET, self.hours);
        buf
    }

    pub fn decode(buf: &[u8; RECORD_SIZE]) -> Self {
        Self {
            name: FixedStr::from_bytes(field(buf, NAME_OFFSET)),
            address: FixedStr::from_bytes(field(buf, ADDRESS_OFFSET)),
            hours: codec::get_u32(buf, HOURS_OFFSET),
        }
    }
}

fn field<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    out
}

/// Parses the add string `name,address,hours`.
///
/// Fields are comma-separated and empty fields are skipped, so `a,,b` holds
/// two fields. The first three fields are used and anything after them is
/// ignored. `hours` is a decimal `u32`, surrounding whitespace allowed.
/// Over-long text fields are truncated, not rejected.
impl FromStr for Employee {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').filter(|f| !f.is_empty()).take(3).collect();

        let &[name, address, hours] = fields.as_slice() else {
            return Err(ParseError::MissingField {
                found: fields.len(),
            });
        };

        let hours = hours
            .trim()
            .parse::<u32>()
            .map_err(|source| ParseError::InvalidHours {
                value: hours.to_string(),
                source,
            })?;

        Ok(Self::new(name, address, hours))
    }
}
