// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `.bin` raster format
//!
//! Two bytes of big-endian height, two bytes of big-endian width, then
//! `height * width` RGB triples, row-major.  That's all there is.

use crate::errors::{CarveError, Result};
use crate::pixelgrid::{PixelGrid, CHANNELS};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const HEADER_LEN: usize = 4;

// Read as much of `buf` as the source will give, returning the count.
fn read_fully<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Decode an image.  Anything after the raster is ignored.
pub fn read_bin<R: Read>(mut source: R) -> Result<PixelGrid> {
    let mut header = [0u8; HEADER_LEN];
    let got = read_fully(&mut source, &mut header)?;
    if got < HEADER_LEN {
        return Err(CarveError::Truncated {
            expected: HEADER_LEN,
            actual: got,
        });
    }
    let height = usize::from(u16::from_be_bytes([header[0], header[1]]));
    let width = usize::from(u16::from_be_bytes([header[2], header[3]]));

    let mut raster = vec![0u8; height * width * CHANNELS];
    let got = read_fully(&mut source, &mut raster)?;
    if got < raster.len() {
        return Err(CarveError::Truncated {
            expected: raster.len(),
            actual: got,
        });
    }
    PixelGrid::from_raw(height, width, raster)
}

/// Encode an image.  Dimensions must fit in sixteen bits each.
pub fn write_bin<W: Write>(mut sink: W, image: &PixelGrid) -> Result<()> {
    let (height, width) = image.dimensions();
    if height > usize::from(u16::max_value()) || width > usize::from(u16::max_value()) {
        return Err(CarveError::TooLarge { height, width });
    }
    sink.write_all(&(height as u16).to_be_bytes())?;
    sink.write_all(&(width as u16).to_be_bytes())?;
    sink.write_all(image.as_raw())?;
    sink.flush()?;
    Ok(())
}

/// Read a `.bin` file from disk.
pub fn load_bin<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    read_bin(BufReader::new(File::open(path)?))
}

/// Write a `.bin` file to disk.
pub fn save_bin<P: AsRef<Path>>(path: P, image: &PixelGrid) -> Result<()> {
    write_bin(BufWriter::new(File::create(path)?), image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_big_endian_height_then_width() {
        let mut image = PixelGrid::new(2, 300);
        image.set_pixel(1, 299, [7, 8, 9]).unwrap();
        let mut out = Vec::new();
        write_bin(&mut out, &image).unwrap();
        assert_eq!(&out[..4], &[0x00, 0x02, 0x01, 0x2c]);
        assert_eq!(out.len(), 4 + 2 * 300 * 3);
        assert_eq!(&out[out.len() - 3..], &[7, 8, 9]);
    }

    #[test]
    fn decodes_a_hand_built_file() {
        let bytes = [0, 1, 0, 2, 1, 2, 3, 4, 5, 6, 0xff];
        let image = read_bin(&bytes[..]).unwrap();
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(&image[(0, 1)], &[4, 5, 6]);
    }

    #[test]
    fn short_files_are_truncated() {
        match read_bin(&[0, 1][..]) {
            Err(CarveError::Truncated {
                expected: 4,
                actual: 2,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match read_bin(&[0, 1, 0, 2, 1, 2, 3][..]) {
            Err(CarveError::Truncated {
                expected: 6,
                actual: 3,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn oversized_images_are_refused() {
        let image = PixelGrid::new(1, 65536);
        let mut out = Vec::new();
        match write_bin(&mut out, &image) {
            Err(CarveError::TooLarge {
                height: 1,
                width: 65536,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn files_survive_a_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.bin");
        let image = PixelGrid::filled(3, 5, [200, 100, 50]);
        save_bin(&path, &image).unwrap();
        assert_eq!(load_bin(&path).unwrap(), image);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4 + 45);
    }
}
