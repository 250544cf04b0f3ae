//! Conversion between integers in `1..=3999` and Roman numerals.
//!
//! ```
//! assert_eq!(romans::romanize(1994).unwrap(), "MCMXCIV");
//! assert_eq!(romans::deromanize("MCMXCIV").unwrap(), 1994);
//! assert!(romans::deromanize("IIII").is_err());
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::codec::{build_codec, MemoizedCodec, StandardCodec};
pub use crate::core::converter::Converter;
pub use crate::core::decoder::{deromanize, deromanize_with};
pub use crate::core::encoder::{romanize, romanize_f64};
pub use crate::core::symbols::{symbol_chars, symbol_values, symbols, SYMBOL_TABLE};
pub use crate::core::validator::is_valid_roman;
pub use domain::model::{CaseMode, Conversion, RomanNumeral, Symbol, MAX_VALUE, MIN_VALUE};
pub use domain::ports::{ConfigProvider, RomanCodec};
pub use utils::error::{RomanError, Result};
