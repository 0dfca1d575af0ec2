pub mod builder;
pub mod face;
pub mod options;

pub use self::builder::{SkinAtlasBuilder, SkinBake};
pub use self::options::BakeOptions;
