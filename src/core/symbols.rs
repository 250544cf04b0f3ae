use crate::domain::model::Symbol;

pub const SYMBOL_COUNT: usize = 13;

/// Canonical symbols, strictly descending by value.
pub const SYMBOL_TABLE: [Symbol; SYMBOL_COUNT] = [
    Symbol { value: 1000, numeral: "M" },
    Symbol { value: 900, numeral: "CM" },
    Symbol { value: 500, numeral: "D" },
    Symbol { value: 400, numeral: "CD" },
    Symbol { value: 100, numeral: "C" },
    Symbol { value: 90, numeral: "XC" },
    Symbol { value: 50, numeral: "L" },
    Symbol { value: 40, numeral: "XL" },
    Symbol { value: 10, numeral: "X" },
    Symbol { value: 9, numeral: "IX" },
    Symbol { value: 5, numeral: "V" },
    Symbol { value: 4, numeral: "IV" },
    Symbol { value: 1, numeral: "I" },
];

pub fn symbols() -> &'static [Symbol] {
    &SYMBOL_TABLE
}

pub fn symbol_values() -> [u32; SYMBOL_COUNT] {
    SYMBOL_TABLE.map(|s| s.value)
}

pub fn symbol_chars() -> [&'static str; SYMBOL_COUNT] {
    SYMBOL_TABLE.map(|s| s.numeral)
}

/// Value of a single letter. Subtractive pairs have no single-letter entry.
pub fn value_of(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
