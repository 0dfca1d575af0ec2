pub mod compose;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{Rgb, RgbBuffer, RgbView, BLACK};
pub use self::traits::{ImageView, ImageViewMut, Rows};
