use crate::domain::model::CaseMode;
use crate::utils::error::Result;

/// Bidirectional conversion between decimals and Roman numerals.
pub trait RomanCodec: Send + Sync {
    fn romanize(&self, decimal: i64) -> Result<String>;
    fn deromanize(&self, roman: &str) -> Result<u32>;
}

pub trait ConfigProvider: Send + Sync {
    fn case_mode(&self) -> CaseMode;
    fn memoize(&self) -> bool;
}
