use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::decoder::deromanize_with;
use crate::core::encoder::romanize;
use crate::domain::model::{CaseMode, MAX_VALUE, MIN_VALUE};
use crate::domain::ports::{ConfigProvider, RomanCodec};
use crate::utils::error::{RomanError, Result};

/// Converts on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec {
    case_mode: CaseMode,
}

impl StandardCodec {
    pub fn new(case_mode: CaseMode) -> Self {
        Self { case_mode }
    }
}

impl RomanCodec for StandardCodec {
    fn romanize(&self, decimal: i64) -> Result<String> {
        let roman = romanize(decimal)?;
        tracing::trace!(decimal, %roman, "romanized");
        Ok(roman)
    }

    fn deromanize(&self, roman: &str) -> Result<u32> {
        let decimal = deromanize_with(roman, self.case_mode)?;
        tracing::trace!(roman, decimal, "deromanized");
        Ok(decimal)
    }
}

struct MemoTable {
    numerals: Vec<String>,
    values: HashMap<String, u32>,
}

// Every canonical numeral, built on first use and never modified.
static MEMO_TABLE: LazyLock<MemoTable> = LazyLock::new(|| {
    let numerals: Vec<String> = (MIN_VALUE..=MAX_VALUE)
        .map(|n| romanize(i64::from(n)).expect("every value in range encodes"))
        .collect();
    let values = numerals
        .iter()
        .zip(MIN_VALUE..)
        .map(|(roman, n)| (roman.clone(), n))
        .collect();
    tracing::debug!(entries = numerals.len(), "built roman numeral memo table");
    MemoTable { numerals, values }
});

/// Answers from a precomputed table of all 3999 numerals.
///
/// The valid numerals are exactly the canonical encodings, so a miss in the
/// reverse map is the same outcome as failing validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedCodec {
    case_mode: CaseMode,
}

impl MemoizedCodec {
    pub fn new(case_mode: CaseMode) -> Self {
        Self { case_mode }
    }
}

impl RomanCodec for MemoizedCodec {
    fn romanize(&self, decimal: i64) -> Result<String> {
        if decimal <= 0 {
            return Err(RomanError::InvalidInput);
        }
        if decimal > i64::from(MAX_VALUE) {
            return Err(RomanError::OutOfRange);
        }
        Ok(MEMO_TABLE.numerals[(decimal - 1) as usize].clone())
    }

    fn deromanize(&self, roman: &str) -> Result<u32> {
        let found = match self.case_mode {
            CaseMode::Strict => MEMO_TABLE.values.get(roman),
            CaseMode::Fold => MEMO_TABLE.values.get(&roman.to_ascii_uppercase()),
        };
        found.copied().ok_or(RomanError::InvalidFormat)
    }
}

pub fn build_codec(config: &impl ConfigProvider) -> Box<dyn RomanCodec> {
    let case_mode = config.case_mode();
    if config.memoize() {
        tracing::debug!(?case_mode, "using memoized codec");
        Box::new(MemoizedCodec::new(case_mode))
    } else {
        tracing::debug!(?case_mode, "using standard codec");
        Box::new(StandardCodec::new(case_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedConfig {
        case_mode: CaseMode,
        memoize: bool,
    }

    impl ConfigProvider for FixedConfig {
        fn case_mode(&self) -> CaseMode {
            self.case_mode
        }

        fn memoize(&self) -> bool {
            self.memoize
        }
    }

    #[test]
    fn test_memoized_agrees_with_standard() {
        let standard = StandardCodec::default();
        let memoized = MemoizedCodec::default();
        for n in 1..=3999 {
            let roman = standard.romanize(n).unwrap();
            assert_eq!(memoized.romanize(n).unwrap(), roman);
            assert_eq!(memoized.deromanize(&roman).unwrap(), n as u32);
        }
    }

    #[test]
    fn test_memoized_errors_match_standard() {
        let memoized = MemoizedCodec::default();
        assert!(matches!(memoized.romanize(0), Err(RomanError::InvalidInput)));
        assert!(matches!(memoized.romanize(4000), Err(RomanError::OutOfRange)));
        for roman in ["", "IIII", "IC", "mcmxciv"] {
            assert!(matches!(memoized.deromanize(roman), Err(RomanError::InvalidFormat)));
        }
    }

    #[test]
    fn test_build_codec_honours_config() {
        for memoize in [false, true] {
            let strict = build_codec(&FixedConfig { case_mode: CaseMode::Strict, memoize });
            assert!(strict.deromanize("xiv").is_err());

            let folding = build_codec(&FixedConfig { case_mode: CaseMode::Fold, memoize });
            assert_eq!(folding.deromanize("xiv").unwrap(), 14);
            assert_eq!(folding.romanize(14).unwrap(), "XIV");
        }
    }
}
