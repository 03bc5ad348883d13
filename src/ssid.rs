use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{escape, hexstr};

/// Maximum SSID length in octets (IEEE 802.11). Not enforced by this crate;
/// callers must not exceed it.
pub const MAX_SSID_LEN: usize = 32;

/// Placeholder reported at boundaries where no SSID is known at all.
pub const UNKNOWN_SSID: &str = "<unknown ssid>";

/// Stores SSID octets and handles conversion between the raw buffer and its
/// textual forms.
///
/// In the escaped form, any octet < 32 or > 127 appears as `\x` followed by
/// the hex representation of the octet; `"`, `\`, `\e`, `\n`, `\r`, `\t` are
/// escaped by a `\`. See src/utils/common.c in the supplicant for the
/// reference implementation.
///
/// A value is immutable once constructed; build a new one for a new
/// identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ssid {
    octets: Vec<u8>,
}

impl Ssid {
    /// Build an SSID from its escaped textual form. Never fails; malformed
    /// escapes degrade locally (see [`escape::decode`]).
    pub fn from_escaped(text: &str) -> Self {
        Self {
            octets: escape::decode(text),
        }
    }

    /// Build an SSID from its hex textual form, with or without a `0x`/`0X`
    /// prefix. Never fails; an invalid pair decodes as 0x00.
    pub fn from_hex(text: &str) -> Self {
        Self {
            octets: hexstr::decode_permissive(text),
        }
    }

    /// Build an SSID directly from raw octets, e.g. when restoring a
    /// previously transferred value.
    pub fn from_octets(octets: impl Into<Vec<u8>>) -> Self {
        Self {
            octets: octets.into(),
        }
    }

    /// The raw octet buffer, no escaping applied.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Consume the value and recover the raw octet buffer.
    pub fn into_octets(self) -> Vec<u8> {
        self.octets
    }

    /// Number of octets.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Whether this is a hidden network identifier: no octets at all, or
    /// every octet zero.
    pub fn is_hidden(&self) -> bool {
        self.octets.iter().all(|&b| b == 0)
    }

    /// The buffer decoded as UTF-8 display text.
    ///
    /// The supplicant reports a hidden access point as an all-zero buffer
    /// (`\x00\x00...`); keep the established behavior of rendering that, and
    /// the empty buffer, as the empty string. Malformed UTF-8 sequences are
    /// replaced with U+FFFD rather than failing the decode.
    pub fn display_string(&self) -> String {
        if self.is_hidden() {
            return String::new();
        }
        String::from_utf8_lossy(&self.octets).into_owned()
    }

    /// The buffer rendered as `0x` plus two lowercase hex digits per octet.
    pub fn hex_string(&self) -> String {
        hexstr::encode(&self.octets)
    }

    /// The buffer rendered in the escaped form accepted by
    /// [`Ssid::from_escaped`].
    pub fn to_escaped(&self) -> String {
        escape::encode(&self.octets)
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// Serialized as the hex text form, which is lossless for arbitrary octets
/// where the display form is not.
impl Serialize for Ssid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex_string())
    }
}

impl<'de> Deserialize<'de> for Ssid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Ssid::from_hex(&text))
    }
}
