mod blur;

use crate::{arg_parsers::KernelSize, error::BlurError, image::Image};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Two-pass separable blur, the fast path
    Blur(KernelSize),
    /// Full 2-D Gaussian convolution
    GaussianBlur(KernelSize),
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), BlurError> {
        match self {
            Operation::Blur(kernel_size) => blur::blur(image, *kernel_size),
            Operation::GaussianBlur(kernel_size) => blur::gaussian_blur(image, *kernel_size),
        }
    }
}
