//! Kana Context - AquesTalk 風記法コーデック

pub mod errors;
pub mod parser;
pub mod writer;

pub use errors::KanaParseError;
pub use parser::parse_kana;
pub use writer::to_kana;
