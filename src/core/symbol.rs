use crate::types::Symbol;

impl Symbol {
    /// Look up a single character. Only the upper-case forms are recognized.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }
}

/// Value of `c` as a Roman symbol, or `None` if it is not one.
pub fn symbol_value(c: char) -> Option<u32> {
    Symbol::from_char(c).map(Symbol::value)
}
