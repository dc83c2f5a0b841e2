//! Color text normalization for picker and search interfaces.
//!
//! Raw text such as `#f00`, `rgb 10 20`, `hsl(200)`, `cmyk 0,100,100` or
//! `rebeccapurple` goes through three stages:
//!
//! 1. [`detect`] classifies the text into a [`Notation`].
//! 2. [`correct`] repairs partial input into a well-formed notation.
//! 3. A [`ColorEngine`] parses the result, and [`describe`] projects it into
//!    five [`DisplayEntry`] rows (hex, rgb, hsl, cmyk JSON, cmyk).
//!
//! ```rust
//! use huepick_core::describe;
//!
//! let entries = describe("#f00").unwrap();
//! assert_eq!(entries[0].title, "#ff0000");
//! assert_eq!(entries[1].title, "rgb(255, 0, 0)");
//! ```

pub mod correct;
pub mod describe;
pub mod engine;
pub mod notation;

pub use correct::{correct, correct_cmyk, correct_hex, correct_hsl, correct_rgb, Corrected};
pub use describe::{describe, describe_as, Describer, Projection};
pub use engine::{ColorEngine, ColorProjection, CssEngine};
pub use notation::{detect, Notation};

pub use huepick_common::{CmykFields, Cmyka, ColorError, DisplayEntry, Rgba};
