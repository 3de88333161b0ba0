//! # floem-font-resize
//!
//! A font size grade slider widget for [Floem](https://github.com/lapce/floem).
//!
//! Draws a baseline with evenly spaced ticks, "A" labels at the smallest and
//! largest sizes, a label at the standard size, and a round handle. The handle
//! can be dragged or the track tapped; on release the handle snaps to the
//! nearest tick with an eased animation and the new size is reported.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_font_resize::{font_resize, FontResizeConfig};
//!
//! let slider = font_resize(FontResizeConfig::default().with_total_grade(5))
//!     .on_font_change(|size| println!("font size is now {size}"));
//! let handle = slider.handle();
//! // Put `slider` in your Floem view tree; use `handle` to read or set the
//! // size later.
//! # let _ = handle;
//! ```

mod animation;
mod config;
mod constants;
mod controller;
mod font_resize;
mod geometry;
mod grade;

pub use animation::SnapKind;
pub use config::FontResizeConfig;
pub use controller::{FontChange, FontResizeController, Phase};
pub use font_resize::{font_resize, FontResize, FontResizeHandle};
pub use geometry::{measure, Geometry, LabelAnchors, Measure};
pub use grade::GradeScale;
