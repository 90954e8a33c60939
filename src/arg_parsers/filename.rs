use std::{ffi::OsStr, path::PathBuf};

use image::ImageFormat;

use crate::encode::FileFormat;

/// Where an image is read from or written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    Stdio,
}

impl Default for Location {
    fn default() -> Self {
        Location::Stdio
    }
}

/// A positional input argument: `-` means stdin, and an explicit
/// `png:file` style prefix overrides content-based format guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFileArg {
    pub location: Location,
    pub format: Option<ImageFormat>,
}

impl InputFileArg {
    pub fn parse(input: &OsStr) -> Self {
        if input.as_encoded_bytes() == [b'-'] {
            return Self {
                location: Location::Stdio,
                format: None,
            };
        }
        let (format, path) = split_format_prefix(input);
        Self {
            location: Location::Path(path),
            format,
        }
    }
}

/// Parses the trailing output argument: `-` means stdout, and a prefix
/// may specify the encoding format (including `null:` for no encoding).
pub fn parse_output_filename(input: &OsStr) -> (Location, Option<FileFormat>) {
    if input.as_encoded_bytes() == [b'-'] {
        return (Location::Stdio, None);
    }
    if let Some(string) = input.to_str() {
        if let Some((prefix, rest)) = string.split_once(':') {
            if let Some(format) = FileFormat::from_prefix(prefix) {
                return (Location::Path(PathBuf::from(rest)), Some(format));
            }
        }
    }
    (Location::Path(PathBuf::from(input)), None)
}

fn split_format_prefix(input: &OsStr) -> (Option<ImageFormat>, PathBuf) {
    if let Some(string) = input.to_str() {
        if let Some((prefix, rest)) = string.split_once(':') {
            if let Some(format) = ImageFormat::from_extension(prefix) {
                return (Some(format), PathBuf::from(rest));
            }
        }
    }
    // no recognizable prefix, the whole thing is a path
    (None, PathBuf::from(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_input() {
        let parsed = InputFileArg::parse(OsStr::new("photo.png"));
        assert_eq!(parsed.location, Location::Path(PathBuf::from("photo.png")));
        assert_eq!(parsed.format, None);
    }

    #[test]
    fn dash_means_stdin() {
        let parsed = InputFileArg::parse(OsStr::new("-"));
        assert_eq!(parsed.location, Location::Stdio);
    }

    #[test]
    fn format_prefix_on_input() {
        let parsed = InputFileArg::parse(OsStr::new("png:some-file"));
        assert_eq!(parsed.location, Location::Path(PathBuf::from("some-file")));
        assert_eq!(parsed.format, Some(ImageFormat::Png));
    }

    #[test]
    fn unknown_prefix_is_part_of_the_path() {
        let parsed = InputFileArg::parse(OsStr::new("weird:some-file"));
        assert_eq!(
            parsed.location,
            Location::Path(PathBuf::from("weird:some-file"))
        );
        assert_eq!(parsed.format, None);
    }

    #[test]
    fn output_format_prefix() {
        let (location, format) = parse_output_filename(OsStr::new("jpeg:out"));
        assert_eq!(location, Location::Path(PathBuf::from("out")));
        assert_eq!(format, Some(FileFormat::Format(ImageFormat::Jpeg)));
    }

    #[test]
    fn null_output_means_do_not_encode() {
        let (_, format) = parse_output_filename(OsStr::new("null:"));
        assert_eq!(format, Some(FileFormat::DoNotEncode));
    }

    #[test]
    fn dash_output_means_stdout() {
        let (location, format) = parse_output_filename(OsStr::new("-"));
        assert_eq!(location, Location::Stdio);
        assert_eq!(format, None);
    }
}
