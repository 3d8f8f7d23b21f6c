//! UUIDs for GATT attributes
//!
//! BLE attribute tables identify services, characteristics and descriptors
//! by either a SIG-assigned short UUID (16 or 32 bits) or a full 128-bit
//! UUID. The stack needs to know which form it was given, so the form is
//! part of the type rather than a separate tag.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// UUID for GATT attributes
///
/// Byte-oriented constructors and accessors use little-endian order, the
/// order UUIDs travel in over the air and through vendor stack APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uuid {
    /// 16-bit SIG-assigned UUID
    Uuid16(u16),
    /// 32-bit SIG-assigned UUID
    Uuid32(u32),
    /// Full 128-bit UUID
    Uuid128([u8; 16]),
}

impl Uuid {
    /// Convert raw little-endian bytes to a UUID based on length.
    ///
    /// Accepts slices of length 2 (16-bit), 4 (32-bit), or 16 (128-bit);
    /// returns `None` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes.len() {
            2 => Some(Uuid::Uuid16(u16::from_le_bytes([bytes[0], bytes[1]]))),
            4 => Some(Uuid::Uuid32(u32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            16 => {
                let mut uuid = [0u8; 16];
                uuid.copy_from_slice(bytes);
                Some(Uuid::Uuid128(uuid))
            }
            _ => None,
        }
    }

    /// Create a UUID from a 16-bit SIG-assigned value.
    pub const fn from_u16(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }

    /// Create a UUID from a 32-bit SIG-assigned value.
    pub const fn from_u32(uuid: u32) -> Self {
        Uuid::Uuid32(uuid)
    }

    /// Create a full UUID from a 128-bit value.
    pub const fn from_u128(uuid: u128) -> Self {
        Uuid::Uuid128(uuid.to_le_bytes())
    }

    /// Get the little-endian byte representation of this UUID.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Uuid::Uuid16(uuid) => uuid.to_le_bytes().to_vec(),
            Uuid::Uuid32(uuid) => uuid.to_le_bytes().to_vec(),
            Uuid::Uuid128(uuid) => uuid.to_vec(),
        }
    }

    /// Get the 16-bit value if this is a 16-bit UUID.
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Uuid::Uuid16(uuid) => Some(*uuid),
            _ => None,
        }
    }

    /// Get the 32-bit value if this is a 32-bit UUID.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Uuid::Uuid32(uuid) => Some(*uuid),
            _ => None,
        }
    }
}

// --- From Implementations ---

impl From<u16> for Uuid {
    fn from(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }
}

impl From<u32> for Uuid {
    fn from(uuid: u32) -> Self {
        Uuid::Uuid32(uuid)
    }
}

impl From<[u8; 16]> for Uuid {
    /// Assumes bytes are in little-endian order.
    fn from(bytes: [u8; 16]) -> Self {
        Uuid::Uuid128(bytes)
    }
}

// --- Formatting ---

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uuid::Uuid16(uuid) => write!(f, "{:04x}", uuid),
            Uuid::Uuid32(uuid) => write!(f, "{:08x}", uuid),
            Uuid::Uuid128(uuid) => {
                // Standard hyphenated format (big-endian)
                write!(
                    f,
                    "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
                    uuid[15], uuid[14], uuid[13], uuid[12],
                    uuid[11], uuid[10],
                    uuid[9], uuid[8],
                    uuid[7], uuid[6],
                    uuid[5], uuid[4], uuid[3], uuid[2], uuid[1], uuid[0]
                )
            }
        }
    }
}

// --- Parsing ---

/// Errors produced when parsing a UUID from a string.
#[derive(Debug, Error)]
pub enum UuidParseError {
    #[error("UUID string must contain 4, 8 or 32 hex digits")]
    InvalidLength,

    #[error("UUID string is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("UUID value out of range: {0}")]
    InvalidValue(#[from] ParseIntError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    /// Parses `"180f"`, `"0000180f"` or the full hyphenated 128-bit form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();

        match cleaned.len() {
            4 => {
                let val = u16::from_str_radix(&cleaned, 16)?;
                Ok(Uuid::Uuid16(val))
            }
            8 => {
                let val = u32::from_str_radix(&cleaned, 16)?;
                Ok(Uuid::Uuid32(val))
            }
            32 => {
                let mut bytes_be = [0u8; 16];
                hex::decode_to_slice(&cleaned, &mut bytes_be)?;
                bytes_be.reverse(); // store little-endian
                Ok(Uuid::Uuid128(bytes_be))
            }
            _ => Err(UuidParseError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_accepts_the_three_lengths() {
        assert_eq!(Uuid::from_bytes(&[0x0f, 0x18]), Some(Uuid::Uuid16(0x180f)));
        assert_eq!(
            Uuid::from_bytes(&[0x78, 0x56, 0x34, 0x12]),
            Some(Uuid::Uuid32(0x12345678))
        );
        let full = [0xAB; 16];
        assert_eq!(Uuid::from_bytes(&full), Some(Uuid::Uuid128(full)));
        assert_eq!(Uuid::from_bytes(&[1, 2, 3]), None);
    }

    #[test]
    fn short_forms_round_trip_through_bytes() {
        let uuid = Uuid::from_u16(0x2a19);
        assert_eq!(uuid.as_bytes(), vec![0x19, 0x2a]);
        assert_eq!(uuid.as_u16(), Some(0x2a19));
        assert_eq!(uuid.as_u32(), None);
    }

    #[test]
    fn parse_16_bit_short_form() {
        let uuid: Uuid = "180F".parse().unwrap();
        assert_eq!(uuid, Uuid::Uuid16(0x180f));
    }

    #[test]
    fn parse_full_form_and_display_round_trip() {
        let s = "6e400001-b5a3-f393-e0a9-e50e24dcca9e";
        let uuid: Uuid = s.parse().unwrap();
        assert_eq!(uuid.to_string(), s);
    }

    #[test]
    fn parse_rejects_odd_lengths() {
        assert!(matches!(
            "180".parse::<Uuid>(),
            Err(UuidParseError::InvalidLength)
        ));
    }

    #[test]
    fn from_u128_is_little_endian() {
        let uuid = Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e);
        assert_eq!(
            uuid.to_string(),
            "6e400001-b5a3-f393-e0a9-e50e24dcca9e"
        );
    }
}
