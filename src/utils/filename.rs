use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// Inserts the suffix between the file stem and the extension,
/// so distinct output names can be generated for multiple inputs.
/// If no extension is present, appends to the end instead.
pub fn insert_suffix_before_extension_in_path(
    os_path_string: &OsStr,
    suffix_to_insert: &OsStr,
) -> OsString {
    let path = Path::new(os_path_string);

    let (Some(stem), Some(extension)) = (path.file_stem(), path.extension()) else {
        let mut result = os_path_string.to_owned();
        result.push(suffix_to_insert);
        return result;
    };

    let mut new_filename = OsString::new();
    new_filename.push(stem);
    new_filename.push(suffix_to_insert);
    new_filename.push(".");
    new_filename.push(extension);

    match path.parent() {
        // for bare filenames the parent is the empty path,
        // which join() handles correctly
        Some(parent_dir) => parent_dir.join(new_filename).into_os_string(),
        None => new_filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_number_suffix() {
        let test_cases = vec![
            ("filename.txt", "filename-1.txt"),
            ("archive.tar.gz", "archive.tar-1.gz"),
            ("nodotfile", "nodotfile-1"),
            ("..hidden_file.txt", "..hidden_file-1.txt"),
        ];

        for (input_str, expected_str) in test_cases {
            let result =
                insert_suffix_before_extension_in_path(OsStr::new(input_str), OsStr::new("-1"));
            assert_eq!(
                result,
                OsString::from(expected_str),
                "Test failed for input: {input_str}"
            );
        }
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn append_number_suffix_with_directories() {
        let test_cases = vec![
            ("some_folder/filename.txt", "some_folder/filename-1.txt"),
            ("some_folder/archive.tar.gz", "some_folder/archive.tar-1.gz"),
            ("some_folder/nodotfile", "some_folder/nodotfile-1"),
            ("foo/bar/baz.longext", "foo/bar/baz-1.longext"),
            ("a/b/.hidd.en", "a/b/.hidd-1.en"),
        ];

        for (input_str, expected_str) in test_cases {
            let result =
                insert_suffix_before_extension_in_path(OsStr::new(input_str), OsStr::new("-1"));
            assert_eq!(
                result,
                OsString::from(expected_str),
                "Test failed for input: {input_str}"
            );
        }
    }
}
