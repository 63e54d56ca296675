//! Label image text format
//!
//! A plain text serialization of [`LabelImage`], for debugging and for
//! exchanging labels with other tools:
//!
//! ```text
//! height width
//! l(0,0) l(0,1) ... l(0,width-1)
//! ...
//! l(height-1,0) ... l(height-1,width-1)
//! ```
//!
//! Reading accepts any whitespace between values but requires two
//! positive integers followed by exactly `height * width` labels.

use crate::{IoError, IoResult};
use log::debug;
use pixkit_core::LabelImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write labels in text form.
pub fn write_labels<W: Write>(mut writer: W, labels: &LabelImage) -> IoResult<()> {
    writeln!(writer, "{} {}", labels.height(), labels.width())?;
    for i in 0..labels.height() {
        let line = labels
            .row(i)
            .iter()
            .map(|l| l[0].to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Read labels in text form.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the header is not two positive
/// integers, a label does not parse, or the label count is not
/// `height * width`.
pub fn read_labels<R: Read>(mut reader: R) -> IoResult<LabelImage> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let mut dimension = |name: &str| -> IoResult<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| IoError::InvalidData(format!("missing label {}", name)))?;
        match token.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(IoError::InvalidData(format!(
                "label {} must be a positive integer, got '{}'",
                name, token
            ))),
        }
    };
    let height = dimension("height")?;
    let width = dimension("width")?;

    let expected = height.checked_mul(width).ok_or_else(|| {
        IoError::InvalidData(format!("label dimensions {}x{} overflow", height, width))
    })?;
    let values = tokens
        .map(|t| {
            t.parse::<i32>()
                .map_err(|_| IoError::InvalidData(format!("invalid label value '{}'", t)))
        })
        .collect::<IoResult<Vec<i32>>>()?;
    if values.len() != expected {
        return Err(IoError::InvalidData(format!(
            "expected {} labels for {}x{}, found {}",
            expected,
            height,
            width,
            values.len()
        )));
    }

    Ok(LabelImage::from_vec(height, width, values)?)
}

/// Write labels to a text file.
pub fn save_labels<P: AsRef<Path>>(path: P, labels: &LabelImage) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_labels(&mut writer, labels)?;
    writer.flush()?;
    debug!(
        "labels: wrote {}x{} to {}",
        labels.height(),
        labels.width(),
        path.display()
    );
    Ok(())
}

/// Read labels from a text file.
pub fn load_labels<P: AsRef<Path>>(path: P) -> IoResult<LabelImage> {
    let path = path.as_ref();
    let labels = read_labels(BufReader::new(File::open(path)?))?;
    debug!(
        "labels: read {}x{} from {}",
        labels.height(),
        labels.width(),
        path.display()
    );
    Ok(labels)
}
