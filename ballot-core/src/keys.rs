//! Keypad symbols
//!
//! The 16 symbols a 4x4 telephone-style keypad can produce. A [`Key`] has
//! no structure beyond its symbol; which physical switch produces which
//! symbol is decided by the [`ScanMap`](crate::config::ScanMap).

/// Symbolic key produced by exactly one physical press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// All symbols in keypad label order
    pub const ALL: [Key; 16] = [
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::Star,
        Key::Hash,
    ];

    /// Parse a keypad label character
    ///
    /// Letters are accepted in either case.
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c.to_ascii_uppercase() {
            '0' => Key::Num0,
            '1' => Key::Num1,
            '2' => Key::Num2,
            '3' => Key::Num3,
            '4' => Key::Num4,
            '5' => Key::Num5,
            '6' => Key::Num6,
            '7' => Key::Num7,
            '8' => Key::Num8,
            '9' => Key::Num9,
            'A' => Key::A,
            'B' => Key::B,
            'C' => Key::C,
            'D' => Key::D,
            '*' => Key::Star,
            '#' => Key::Hash,
            _ => return None,
        };
        Some(key)
    }

    /// The label printed on the key
    pub const fn as_char(self) -> char {
        match self {
            Key::Num0 => '0',
            Key::Num1 => '1',
            Key::Num2 => '2',
            Key::Num3 => '3',
            Key::Num4 => '4',
            Key::Num5 => '5',
            Key::Num6 => '6',
            Key::Num7 => '7',
            Key::Num8 => '8',
            Key::Num9 => '9',
            Key::A => 'A',
            Key::B => 'B',
            Key::C => 'C',
            Key::D => 'D',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }

    /// Numeric value for digit keys
    pub const fn digit(self) -> Option<u8> {
        match self {
            Key::Num0 => Some(0),
            Key::Num1 => Some(1),
            Key::Num2 => Some(2),
            Key::Num3 => Some(3),
            Key::Num4 => Some(4),
            Key::Num5 => Some(5),
            Key::Num6 => Some(6),
            Key::Num7 => Some(7),
            Key::Num8 => Some(8),
            Key::Num9 => Some(9),
            _ => None,
        }
    }
}
