pub mod phonetic;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use phonetic::{ConvertOptions, KanaConverter, PhoneticConverter, Script};
