//! Gaussian convolution over RGB pixel buffers.
//!
//! The engine never mutates its input: every pass reads from one buffer
//! and writes into a freshly allocated one, so a partially written
//! output can never contaminate subsequent reads.

use std::fmt::{self, Display};

use image::{Rgb, RgbImage};

use crate::kernel;

/// Selects how the Gaussian weights are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurMode {
    /// Two sequential 1-D passes, horizontal then vertical.
    /// O(width * height * k) per pass; a close approximation
    /// of the full convolution, not numerically identical to it.
    Separable,
    /// A single 2-D pass over the whole window. O(width * height * k^2).
    Full,
}

/// Validation failures of the blur entry point.
/// The CLI layer checks for both of these before calling in,
/// but the engine rejects them on its own as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolveError {
    /// The kernel size was even or zero. A kernel needs a center pixel.
    InvalidKernelSize(usize),
    /// The image has zero width or height.
    EmptyImage,
}

impl Display for ConvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolveError::InvalidKernelSize(size) => {
                write!(f, "kernel size must be a positive odd number, got {size}")
            }
            ConvolveError::EmptyImage => f.write_str("image is empty"),
        }
    }
}

impl std::error::Error for ConvolveError {}

/// Blurs `image` with a Gaussian kernel of the given odd size,
/// returning a new image of the same dimensions.
pub fn blur(
    image: &RgbImage,
    kernel_size: usize,
    mode: BlurMode,
) -> Result<RgbImage, ConvolveError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ConvolveError::InvalidKernelSize(kernel_size));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(ConvolveError::EmptyImage);
    }

    Ok(match mode {
        BlurMode::Separable => blur_separable(image, kernel_size),
        BlurMode::Full => blur_full(image, kernel_size),
    })
}

/// Maps a sample coordinate back into `0..dim`: coordinates below zero
/// are reflected, and anything still past the far edge is folded back
/// onto it. This exact fold-back policy is load-bearing for output
/// compatibility; it is not the same as clamping or mirroring.
fn fold(base: u32, offset: i64, dim: u32) -> u32 {
    let dim = dim as i64;
    let mut p = (base as i64 + offset).abs();
    if p >= dim {
        p -= p - dim + 1;
    }
    p as u32
}

/// Accumulated channel sums are rounded and saturated into `0..=255`.
/// `as` performs the saturating conversion, which gives us an explicit
/// clamp instead of undefined wrap-around.
fn store(sum: [f64; 3]) -> Rgb<u8> {
    Rgb(sum.map(|channel| channel.round() as u8))
}

fn blur_full(image: &RgbImage, kernel_size: usize) -> RgbImage {
    let weights = kernel::weights_2d(kernel_size);
    let half = (kernel_size / 2) as i64;
    let (width, height) = image.dimensions();

    let mut output = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let mut sum = [0.0_f64; 3];
            for i in -half..=half {
                for j in -half..=half {
                    let sample = image.get_pixel(fold(x, i, width), fold(y, j, height));
                    let index = ((i + half) as usize) * kernel_size + (j + half) as usize;
                    let weight = weights[index] as f64;
                    for (acc, channel) in sum.iter_mut().zip(sample.0) {
                        *acc += channel as f64 * weight;
                    }
                }
            }
            output.put_pixel(x, y, store(sum));
        }
    }
    output
}

fn blur_separable(image: &RgbImage, kernel_size: usize) -> RgbImage {
    let weights = kernel::weights_1d(kernel_size);
    let half = (kernel_size / 2) as i64;
    let (width, height) = image.dimensions();

    // horizontal pass: source into intermediate
    let mut intermediate = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let mut sum = [0.0_f64; 3];
            for i in -half..=half {
                let sample = image.get_pixel(fold(x, i, width), y);
                let weight = weights[(i + half) as usize] as f64;
                for (acc, channel) in sum.iter_mut().zip(sample.0) {
                    *acc += channel as f64 * weight;
                }
            }
            intermediate.put_pixel(x, y, store(sum));
        }
    }

    // vertical pass: the finished intermediate into the output
    let mut output = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let mut sum = [0.0_f64; 3];
            for i in -half..=half {
                let sample = intermediate.get_pixel(x, fold(y, i, height));
                let weight = weights[(i + half) as usize] as f64;
                for (acc, channel) in sum.iter_mut().zip(sample.0) {
                    *acc += channel as f64 * weight;
                }
            }
            output.put_pixel(x, y, store(sum));
        }
    }
    output
}
