//! Reading and writing image files through the `image` crate
//!
//! Buffers are 24 bit RGB, row-major, as returned by
//! [`Canvas::to_rgb24`](crate::Canvas::to_rgb24).
//!
use std::path::Path;

use log::debug;

/// Read an image file as 24 bit RGB, returning `(data, width, height)`
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write a 24 bit RGB buffer, format chosen by the file extension
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), image::ImageError> {
    debug!("writing {}x{} image to {}", width, height, filename.as_ref().display());
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgb8)
}

/// Compare two image files pixel by pixel
///
/// Differences are reported at debug level.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trip() {
        let dir = std::env::temp_dir();
        let f1 = dir.join("polycanvas_export_a.png");
        let f2 = dir.join("polycanvas_export_b.png");
        let mut buf: Vec<u8> = (0 .. 4 * 3 * 3).map(|i| i as u8 * 7).collect();
        write_file(&buf, 4, 3, &f1).unwrap();
        let (d, w, h) = read_file(&f1).unwrap();
        assert_eq!((w, h), (4, 3));
        assert_eq!(d, buf);

        buf[5] ^= 1;
        write_file(&buf, 4, 3, &f2).unwrap();
        assert!(img_diff(&f1, &f1).unwrap());
        assert!(!img_diff(&f1, &f2).unwrap());
    }
}
