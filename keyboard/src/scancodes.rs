//! Scan code set 1 decoding
//!
//! Only "make" codes are decoded. Release codes and the extended `0xE0`
//! prefix are not modeled, so every decoded entry reports `KeyStatus::Down`.

/// Physical key identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    None,
    Escape,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    OemMinus,
    OemPlus,
    OemOpenBrackets,
    OemCloseBrackets,
    OemSemicolon,
    OemQuotes,
    OemTilde,
    OemBackslash,
    OemComma,
    OemPeriod,
    OemQuestion,
    Back,
    Tab,
    Enter,
    Space,
    Multiply,
    LeftCtrl,
    LeftShift,
    RightShift,
    LeftAlt,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
}

impl Key {
    /// Returns true for the "no key" placeholder
    pub fn is_none(&self) -> bool {
        *self == Key::None
    }

    /// Returns true for A through Z
    pub fn is_alphabetic(&self) -> bool {
        matches!(
            self,
            Key::A
                | Key::B
                | Key::C
                | Key::D
                | Key::E
                | Key::F
                | Key::G
                | Key::H
                | Key::I
                | Key::J
                | Key::K
                | Key::L
                | Key::M
                | Key::N
                | Key::O
                | Key::P
                | Key::Q
                | Key::R
                | Key::S
                | Key::T
                | Key::U
                | Key::V
                | Key::W
                | Key::X
                | Key::Y
                | Key::Z
        )
    }
}

/// Transition state of a key, also used for the caps-lock level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyStatus {
    Unknown = 0,
    Up = 1,
    Down = 2,
}

impl KeyStatus {
    /// Decode the raw representation used by atomic storage.
    /// Anything unrecognized maps to `Unknown`.
    pub const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => KeyStatus::Up,
            2 => KeyStatus::Down,
            _ => KeyStatus::Unknown,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_down(&self) -> bool {
        *self == KeyStatus::Down
    }
}

/// Result of decoding a raw code that has no table entry
pub const UNKNOWN: (Key, KeyStatus) = (Key::None, KeyStatus::Unknown);

/// Number of raw codes covered by the table
pub const TABLE_SIZE: usize = 0x45;

pub const CAPS_LOCK_PRESSED: u8 = 0x3A;

const fn down(key: Key) -> (Key, KeyStatus) {
    (key, KeyStatus::Down)
}

// Make codes 0x00-0x44
static SCAN_CODE_SET1: [(Key, KeyStatus); TABLE_SIZE] = [
    // 0x00
    UNKNOWN,
    down(Key::Escape),
    down(Key::D1),
    down(Key::D2),
    down(Key::D3),
    down(Key::D4),
    down(Key::D5),
    down(Key::D6),
    // 0x08
    down(Key::D7),
    down(Key::D8),
    down(Key::D9),
    down(Key::D0),
    down(Key::OemMinus),
    down(Key::OemPlus),
    down(Key::Back),
    down(Key::Tab),
    // 0x10
    down(Key::Q),
    down(Key::W),
    down(Key::E),
    down(Key::R),
    down(Key::T),
    down(Key::Y),
    down(Key::U),
    down(Key::I),
    // 0x18
    down(Key::O),
    down(Key::P),
    down(Key::OemOpenBrackets),
    down(Key::OemCloseBrackets),
    down(Key::Enter),
    down(Key::LeftCtrl),
    down(Key::A),
    down(Key::S),
    // 0x20
    down(Key::D),
    down(Key::F),
    down(Key::G),
    down(Key::H),
    down(Key::J),
    down(Key::K),
    down(Key::L),
    down(Key::OemSemicolon),
    // 0x28
    down(Key::OemQuotes),
    down(Key::OemTilde),
    down(Key::LeftShift),
    down(Key::OemBackslash),
    down(Key::Z),
    down(Key::X),
    down(Key::C),
    down(Key::V),
    // 0x30
    down(Key::B),
    down(Key::N),
    down(Key::M),
    down(Key::OemComma),
    down(Key::OemPeriod),
    down(Key::OemQuestion), // '/'
    down(Key::RightShift),
    down(Key::Multiply), // keypad '*'
    // 0x38
    down(Key::LeftAlt),
    down(Key::Space),
    down(Key::CapsLock),
    down(Key::F1),
    down(Key::F2),
    down(Key::F3),
    down(Key::F4),
    down(Key::F5),
    // 0x40
    down(Key::F6),
    down(Key::F7),
    down(Key::F8),
    down(Key::F9),
    down(Key::F10),
];

/// Decode a raw scan code.
///
/// Codes past the end of the table decode to `(Key::None, KeyStatus::Unknown)`,
/// the same as the undefined code `0x00`.
pub fn translate(scancode: u8) -> (Key, KeyStatus) {
    SCAN_CODE_SET1
        .get(scancode as usize)
        .copied()
        .unwrap_or(UNKNOWN)
}
