//! pixkit-io - Image and label I/O for pixkit
//!
//! The codec side of pixkit. Images cross this boundary as
//! [`DecodedImage`] byte buffers; [`load`] and [`save`] connect those
//! buffers to typed [`Image`]s through the default caster.
//!
//! # Supported formats
//!
//! | Format | Feature | Read | Write |
//! |---|---|---|---|
//! | PNG | `png-format` (default) | 8/16-bit gray, gray+alpha, RGB, RGBA, palette | 8-bit |
//! | Label text | always | yes | yes |
//!
//! # Examples
//!
//! ```no_run
//! use pixkit_core::{ImageGf, ImageRgbaD};
//!
//! let gray: ImageGf = pixkit_io::load("input.png")?;
//! let rgba: ImageRgbaD = gray.convert();
//! pixkit_io::save("output.png", &rgba)?;
//! # Ok::<(), pixkit_io::IoError>(())
//! ```

mod decoded;
mod error;
pub mod label;
#[cfg(feature = "png-format")]
pub mod png;

pub use decoded::{DecodedImage, from_decoded, to_decoded};
pub use error::{IoError, IoResult};
pub use label::{load_labels, read_labels, save_labels, write_labels};

use pixkit_core::{Component, Image};
use std::fs::File;
#[cfg(feature = "png-format")]
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Decode an image file into a byte buffer.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable
/// image. No partial buffer is ever returned.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let file = File::open(path.as_ref())?;
    decode_file(file)
}

#[cfg(feature = "png-format")]
fn decode_file(file: File) -> IoResult<DecodedImage> {
    crate::png::read_png(BufReader::new(file))
}

#[cfg(not(feature = "png-format"))]
fn decode_file(_file: File) -> IoResult<DecodedImage> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled".to_string(),
    ))
}

/// Encode a byte buffer into an image file.
///
/// # Errors
///
/// Returns an error if the buffer is inconsistent or empty, or if the file
/// cannot be written.
pub fn write_image<P: AsRef<Path>>(path: P, image: &DecodedImage) -> IoResult<()> {
    encode_file(path.as_ref(), image)
}

#[cfg(feature = "png-format")]
fn encode_file(path: &Path, image: &DecodedImage) -> IoResult<()> {
    // Encode before touching the file so an invalid buffer leaves no output
    let mut encoded = Vec::new();
    crate::png::write_png(image, &mut encoded)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&encoded)?;
    writer.flush()?;
    Ok(())
}

#[cfg(not(feature = "png-format"))]
fn encode_file(_path: &Path, _image: &DecodedImage) -> IoResult<()> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled".to_string(),
    ))
}

/// Load an image file into an image of any component type and channel count.
///
/// The file's own channel count is mapped onto `C` with the default rule.
pub fn load<T: Component, const C: usize, P: AsRef<Path>>(path: P) -> IoResult<Image<T, C>> {
    from_decoded(read_image(path)?)
}

/// Save an image, casting every component to a byte.
pub fn save<T: Component, const C: usize, P: AsRef<Path>>(
    path: P,
    image: &Image<T, C>,
) -> IoResult<()> {
    write_image(path, &to_decoded(image))
}
