// Cross-process transfer layout: 4-byte little-endian signed length prefix,
// then the raw octets.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::Ssid;

/// Write an SSID in the length-prefixed wire layout. A zero-length buffer is
/// valid and writes only the prefix.
pub fn write_ssid(ssid: &Ssid, writer: &mut impl Write) -> Result<()> {
    let len = i32::try_from(ssid.len()).context("SSID length exceeds wire range")?;
    writer
        .write_all(&len.to_le_bytes())
        .context("Failed to write SSID length")?;
    writer
        .write_all(ssid.octets())
        .context("Failed to write SSID octets")?;
    Ok(())
}

/// Read an SSID previously written by [`write_ssid`]. The stream is assumed
/// well formed; a truncated or negative length is reported as an error rather
/// than trusted.
pub fn read_ssid(reader: &mut impl Read) -> Result<Ssid> {
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .context("Failed to read SSID length")?;
    let len = usize::try_from(i32::from_le_bytes(len_buf))
        .context("Negative SSID length on the wire")?;

    let mut octets = vec![0u8; len];
    reader
        .read_exact(&mut octets)
        .context("Failed to read SSID octets")?;
    Ok(Ssid::from_octets(octets))
}
