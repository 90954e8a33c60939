use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{arg_parsers::Location, error::BlurError, image::Image, wb_err, wb_try};

pub fn encode(
    image: &Image,
    location: &Location,
    format: Option<FileFormat>,
) -> Result<(), BlurError> {
    let format = match format {
        // no-op, return immediately
        Some(FileFormat::DoNotEncode) => return Ok(()),
        Some(FileFormat::Format(fmt)) => Some(fmt),
        None => None,
    };
    let format = choose_encoding_format(image, location, format)?;

    let file = match location {
        // `File::create` automatically truncates (overwrites) the file if it exists.
        Location::Path(path) => File::create(path)
            .map_err(|error| wb_err!("unable to open image '{}': {error}", path.display()))?,
        // Some of the encoders require Seek, which Stdout doesn't implement.
        // We write to a temporary file and then print out the content at the end.
        Location::Stdio => wb_try!(tempfile::tempfile()),
    };
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    wb_try!(image.pixels.write_to(&mut writer, format));

    match location {
        Location::Path(_) => {
            // Flush the buffers to write everything to disk.
            // The buffers will be flushed automatically when the writer goes out of scope,
            // but that will not report any errors. This handles errors.
            wb_try!(writer.flush());
        }
        Location::Stdio => {
            // Copy from the temporary file to stdout while handling errors
            let mut file = wb_try!(writer.into_inner());
            wb_try!(file.seek(std::io::SeekFrom::Start(0)));
            let mut stdout = std::io::stdout().lock();
            wb_try!(std::io::copy(&mut file, &mut stdout));
            wb_try!(stdout.flush());
        }
    }

    Ok(())
}

fn choose_encoding_format(
    image: &Image,
    location: &Location,
    explicitly_specified: Option<ImageFormat>,
) -> Result<ImageFormat, BlurError> {
    if let Some(format) = explicitly_specified {
        return Ok(format);
    }
    // if format was not explicitly specified, guess based on the output path
    if let Location::Path(path) = location {
        if let Ok(format) = ImageFormat::from_path(path) {
            return Ok(format);
        }
    }
    // if that fails, use the input format
    if let Some(format) = image.format {
        return Ok(format);
    }
    // otherwise error
    let extension = match location {
        Location::Path(path) => Path::new(path).extension().unwrap_or(OsStr::new("")),
        Location::Stdio => OsStr::new(""),
    };
    Err(wb_err!(
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().display()
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Format(ImageFormat),
    /// Encoding operation is present but is a no-op. On the CLI this is "null:" passed as filename.
    DoNotEncode,
}

impl FileFormat {
    /// Creates a format from the explicit specifier that precedes the filename,
    /// e.g. `png:my-file` or `null:`
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let lowercase_prefix = prefix.to_ascii_lowercase();
        let format = if lowercase_prefix == "null" {
            Self::DoNotEncode
        } else {
            Self::Format(ImageFormat::from_extension(lowercase_prefix)?)
        };
        Some(format)
    }
}
