mod cmyk;
mod color;
mod entry;

pub use cmyk::*;
pub use color::*;
pub use entry::*;
