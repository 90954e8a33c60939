use std::{ffi::OsString, path::PathBuf};

use image::ImageFormat;

use crate::arg_parsers::{InputFileArg, Location};
use crate::decode::decode;
use crate::encode::{self, FileFormat};
use crate::error::BlurError;
use crate::operations::Operation;
use crate::utils::filename::insert_suffix_before_extension_in_path;
use crate::{wb_err, wb_try};

/// Plan of operations for the whole run over multiple files
#[derive(Debug, Default)]
pub struct ExecutionPlan {
    /// Operations to be applied to ALL input files
    global_ops: Vec<Operation>,
    output_file: Location,
    input_files: Vec<FilePlan>,
    output_format: Option<FileFormat>,
}

impl ExecutionPlan {
    pub fn add_operation(&mut self, op: Operation) {
        // Operations such as -blur apply to all the files already listed,
        // but not subsequent ones,
        // UNLESS they are specified before any of the files,
        // in which case they apply to all subsequent operations.
        if self.input_files.is_empty() {
            self.global_ops.push(op);
        } else {
            for file_plan in &mut self.input_files {
                file_plan.ops.push(op)
            }
        }
    }

    pub fn add_input_file(&mut self, file: InputFileArg) {
        self.input_files.push(FilePlan {
            location: file.location,
            format: file.format,
            ops: self.global_ops.clone(),
        });
    }

    pub fn set_output_file(&mut self, file: Location, format: Option<FileFormat>) {
        self.output_file = file;
        self.output_format = format;
    }

    pub fn execute(&self) -> Result<(), BlurError> {
        if self.input_files.is_empty() {
            return Err(wb_err!("no images defined"));
        }
        for (file_plan, output_file) in self.input_files.iter().zip(self.output_locations().iter())
        {
            let mut image = wb_try!(decode(&file_plan.location, file_plan.format));

            for operation in &file_plan.ops {
                operation.execute(&mut image)?;
            }

            encode::encode(&image, output_file, self.output_format)?;
        }

        Ok(())
    }

    fn output_locations(&self) -> Vec<Location> {
        if self.input_files.len() > 1 {
            if let Location::Path(output_file) = &self.output_file {
                let mut locations = Vec::new();
                for i in 1..=self.input_files.len() {
                    let suffix = OsString::from(format!("-{i}")); // indexing for output images starts at 1
                    let name =
                        insert_suffix_before_extension_in_path(output_file.as_os_str(), &suffix);
                    locations.push(Location::Path(PathBuf::from(name)))
                }
                return locations;
            }
        }
        vec![self.output_file.clone(); self.input_files.len()]
    }
}

/// Plan of operations for a single input file
#[derive(Debug, Default)]
pub struct FilePlan {
    pub location: Location,
    pub format: Option<ImageFormat>,
    pub ops: Vec<Operation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_output_locations_for_multiple_inputs() {
        let plan = ExecutionPlan {
            output_file: Location::Path(PathBuf::from("out.png")),
            input_files: vec![Default::default(), Default::default()],
            ..Default::default()
        };
        assert_eq!(
            plan.output_locations(),
            vec![
                Location::Path(PathBuf::from("out-1.png")),
                Location::Path(PathBuf::from("out-2.png")),
            ],
        );

        let plan = ExecutionPlan {
            output_file: Location::Path(PathBuf::from("no-extension")),
            input_files: vec![Default::default(), Default::default()],
            ..Default::default()
        };
        assert_eq!(
            plan.output_locations(),
            vec![
                Location::Path(PathBuf::from("no-extension-1")),
                Location::Path(PathBuf::from("no-extension-2")),
            ],
        );

        let plan = ExecutionPlan {
            output_file: Location::Stdio,
            input_files: vec![Default::default(), Default::default()],
            ..Default::default()
        };
        assert_eq!(
            plan.output_locations(),
            vec![Location::Stdio, Location::Stdio],
        );
    }

    #[test]
    fn single_input_keeps_the_output_name() {
        let plan = ExecutionPlan {
            output_file: Location::Path(PathBuf::from("out.png")),
            input_files: vec![Default::default()],
            ..Default::default()
        };
        assert_eq!(
            plan.output_locations(),
            vec![Location::Path(PathBuf::from("out.png"))],
        );
    }

    #[test]
    fn operations_before_any_file_apply_to_every_file() {
        use crate::arg_parsers::KernelSize;
        use std::ffi::OsStr;

        let mut plan = ExecutionPlan::default();
        plan.add_operation(Operation::Blur(KernelSize::new(3).unwrap()));
        plan.add_input_file(InputFileArg::parse(OsStr::new("a.png")));
        plan.add_input_file(InputFileArg::parse(OsStr::new("b.png")));
        // listed after the files: applies to the files above it
        plan.add_operation(Operation::GaussianBlur(KernelSize::new(5).unwrap()));

        for file_plan in &plan.input_files {
            assert_eq!(file_plan.ops.len(), 2);
        }
    }
}
