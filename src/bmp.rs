//! Writing of 24 bit BMP files
//!
//! Layout, all values little endian:
//!
//! ```text
//!     file header   14 bytes   "BM", file size, 2 x u16 reserved, offset 54
//!     info header   40 bytes   size 40, width, -height (top-down rows),
//!                              1 plane, 24 bits, no compression, image size 0,
//!                              4767 px/m in x and y, 0 colors, 0 important
//!     pixels                   B G R per pixel, rows padded to 4 bytes
//! ```
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

/// Size of both headers in bytes
pub const BMP_HEADER_SIZE: u32 = 14 + 40;

const PIXELS_PER_METER: u32 = 4767;

/// Write a 24 bit RGB buffer as a BMP image
///
/// `rgb` holds `width * height` red, green, blue triples, top row first.
pub fn write_bmp<W: Write>(out: &mut W, rgb: &[u8], width: usize, height: usize) -> std::io::Result<()> {
    if rgb.len() < width * height * 3 {
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput,
                                       "pixel buffer smaller than width x height"));
    }
    let file_size = (width * height * 3) as u32 + BMP_HEADER_SIZE;
    out.write_all(b"BM")?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&BMP_HEADER_SIZE.to_le_bytes())?;

    out.write_all(&40u32.to_le_bytes())?;
    out.write_all(&(width as u32).to_le_bytes())?;
    out.write_all(&(-(height as i32)).to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?;
    out.write_all(&24u16.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&PIXELS_PER_METER.to_le_bytes())?;
    out.write_all(&PIXELS_PER_METER.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?;

    let pad = [0u8; 3];
    let npad = (4 - (width * 3) % 4) % 4;
    let mut row = Vec::with_capacity(width * 3 + npad);
    for y in 0 .. height {
        row.clear();
        for px in rgb[y * width * 3 .. (y + 1) * width * 3].chunks_exact(3) {
            row.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        row.extend_from_slice(&pad[.. npad]);
        out.write_all(&row)?;
    }
    Ok(())
}

/// Save a 24 bit RGB buffer as a BMP file
pub fn save_bmp<P: AsRef<Path>>(filename: P, rgb: &[u8], width: usize, height: usize) -> std::io::Result<()> {
    debug!("writing {}x{} bmp to {}", width, height, filename.as_ref().display());
    let mut out = BufWriter::new(File::create(filename)?);
    write_bmp(&mut out, rgb, width, height)?;
    out.flush()
}
