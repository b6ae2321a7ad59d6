//! Plain-text PPM (P3) output.

use std::io::{self, Write};

/// Write an RGB buffer as a P3 image, one pixel per line.
///
/// `rgb` must hold exactly `width * height * 3` bytes, top row first.
pub fn write_ppm<W: Write>(writer: &mut W, width: u32, height: u32, rgb: &[u8]) -> io::Result<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "pixel buffer holds {} bytes, {}x{} needs {}",
                rgb.len(),
                width,
                height,
                expected
            ),
        ));
    }

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for pixel in rgb.chunks_exact(3) {
        writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }

    writer.flush()
}

/// The color ramp test image: red grows left to right, green grows top to
/// bottom, blue is fixed at a quarter.
///
/// Both dimensions must be at least 2.
pub fn gradient_image(width: u32, height: u32) -> Vec<u8> {
    let to_byte = |x: f32| (255.999 * x) as u8;

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for j in 0..height {
        for i in 0..width {
            let r = i as f32 / (width - 1) as f32;
            let g = j as f32 / (height - 1) as f32;
            rgb.extend_from_slice(&[to_byte(r), to_byte(g), to_byte(0.25)]);
        }
    }
    rgb
}
