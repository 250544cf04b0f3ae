pub mod codec;
pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod symbols;
pub mod validator;

pub use crate::domain::model::{CaseMode, RomanNumeral, Symbol};
pub use crate::domain::ports::{ConfigProvider, RomanCodec};
pub use crate::utils::error::Result;
