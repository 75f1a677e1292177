//! Named image filters and the pipeline that runs them.
//!
//! | name     | params      | effect                                        |
//! |----------|-------------|-----------------------------------------------|
//! | `crop`   | `w h`       | keep the bottom-left `w` x `h` region         |
//! | `gs`     |             | grayscale (luma)                              |
//! | `neg`    |             | negative                                      |
//! | `blur`   | `sigma`     | 3x3 Gaussian blur, renormalized at the edges  |
//! | `sharp`  |             | 3x3 sharpen, border kept, clamped             |
//! | `thermo` |             | 3x3 high-pass, border black, unclamped        |
//! | `edge`   | `threshold` | grayscale + Laplacian threshold               |

mod color;
mod convolve;
mod geometry;
mod pipeline;
mod registry;
mod spec;

pub use color::{grayscale, negative};
pub use convolve::{Kernel3, edge_detect, gaussian_blur, sharpen, thermo};
pub use geometry::crop;
pub use pipeline::{Pipeline, PipelineReport, SkippedFilter};
pub use registry::{FilterFn, FilterRegistry, RegisteredFilter};
pub use spec::{FilterSpec, parse_filter_args};
