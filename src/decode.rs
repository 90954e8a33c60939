use std::io::{BufRead, Cursor, Read, Seek};

use image::{ImageFormat, ImageReader, ImageResult};

use crate::arg_parsers::Location;
use crate::image::Image;

/// Decodes an image from a file or stdin, blocking until done.
/// If the format has not been explicitly specified,
/// guesses the format based on file contents.
pub fn decode(location: &Location, format: Option<ImageFormat>) -> ImageResult<Image> {
    match location {
        Location::Path(path) => decode_reader(ImageReader::open(path)?, format),
        Location::Stdio => {
            // Decoders need Seek, which stdin doesn't implement,
            // so slurp the whole stream into memory first.
            let mut buffer = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buffer)?;
            decode_reader(ImageReader::new(Cursor::new(buffer)), format)
        }
    }
}

fn decode_reader<R: BufRead + Seek>(
    mut reader: ImageReader<R>,
    format: Option<ImageFormat>,
) -> ImageResult<Image> {
    match format {
        Some(format) => reader.set_format(format),
        None => reader = reader.with_guessed_format()?,
    }
    let format = reader.format();
    Ok(Image {
        format,
        pixels: reader.decode()?,
    })
}
