//! SWT-style to abstract conversion tables
//!
//! The abstract model uses Swing/AWT conventions, so Swing-style native
//! values pass through unchanged and only SWT-style values need converting.

use crate::domain::value_objects::ModifierMask;

use super::event::{KeyLocation, CHAR_UNDEFINED};
use super::keys::*;

/// SWT-style native constants
pub mod swt {
    pub const ALT: u32 = 1 << 16;
    pub const SHIFT: u32 = 1 << 17;
    pub const CONTROL: u32 = 1 << 18;
    pub const BUTTON1: u32 = 1 << 19;
    pub const BUTTON2: u32 = 1 << 20;
    pub const BUTTON3: u32 = 1 << 21;
    pub const COMMAND: u32 = 1 << 22;

    pub const KEYCODE_BIT: u32 = 1 << 24;
    pub const ARROW_UP: u32 = KEYCODE_BIT + 1;
    pub const ARROW_DOWN: u32 = KEYCODE_BIT + 2;
    pub const ARROW_LEFT: u32 = KEYCODE_BIT + 3;
    pub const ARROW_RIGHT: u32 = KEYCODE_BIT + 4;
    pub const PAGE_UP: u32 = KEYCODE_BIT + 5;
    pub const PAGE_DOWN: u32 = KEYCODE_BIT + 6;
    pub const HOME: u32 = KEYCODE_BIT + 7;
    pub const END: u32 = KEYCODE_BIT + 8;
    pub const INSERT: u32 = KEYCODE_BIT + 9;
    pub const F1: u32 = KEYCODE_BIT + 10;
    pub const F12: u32 = KEYCODE_BIT + 21;
    pub const F13: u32 = KEYCODE_BIT + 22;
    pub const F15: u32 = KEYCODE_BIT + 24;
    pub const F16: u32 = KEYCODE_BIT + 25;
    pub const F20: u32 = KEYCODE_BIT + 29;
    pub const KEYPAD_MULTIPLY: u32 = KEYCODE_BIT + 42;
    pub const KEYPAD_ADD: u32 = KEYCODE_BIT + 43;
    pub const KEYPAD_SUBTRACT: u32 = KEYCODE_BIT + 45;
    pub const KEYPAD_DECIMAL: u32 = KEYCODE_BIT + 46;
    pub const KEYPAD_DIVIDE: u32 = KEYCODE_BIT + 47;
    pub const KEYPAD_0: u32 = KEYCODE_BIT + 48;
    pub const KEYPAD_9: u32 = KEYCODE_BIT + 57;
    pub const KEYPAD_EQUAL: u32 = KEYCODE_BIT + 61;
    pub const KEYPAD_CR: u32 = KEYCODE_BIT + 80;
    pub const CAPS_LOCK: u32 = KEYCODE_BIT + 82;
    pub const NUM_LOCK: u32 = KEYCODE_BIT + 83;
    pub const SCROLL_LOCK: u32 = KEYCODE_BIT + 84;
    pub const PAUSE: u32 = KEYCODE_BIT + 85;
    pub const PRINT_SCREEN: u32 = KEYCODE_BIT + 87;

    pub const BS: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const CR: u32 = 0x0D;
    pub const ESC: u32 = 0x1B;
    pub const DEL: u32 = 0x7F;

    // Key locations
    pub const NONE: u32 = 0;
    pub const KEYPAD: u32 = 1 << 1;
    pub const LEFT: u32 = 1 << 14;
    pub const RIGHT: u32 = 1 << 17;
}

/// Reinterpret the signed native time as the unsigned counter it is
pub fn convert_swt_event_time(time: i32) -> u64 {
    u64::from(time as u32)
}

/// Convert an SWT state mask; `mouse_button` additionally marks that button as down
pub fn convert_swt_state_mask(state_mask: u32, mouse_button: u32) -> ModifierMask {
    let mut result = ModifierMask::NONE;
    if state_mask & swt::SHIFT != 0 {
        result |= ModifierMask::SHIFT;
    }
    if state_mask & swt::CONTROL != 0 {
        result |= ModifierMask::CTRL;
    }
    if state_mask & swt::ALT != 0 {
        result |= ModifierMask::ALT;
    }
    if state_mask & swt::COMMAND != 0 {
        result |= ModifierMask::META;
    }
    if state_mask & swt::BUTTON1 != 0 || mouse_button == 1 {
        result |= ModifierMask::BUTTON1;
    }
    if state_mask & swt::BUTTON2 != 0 || mouse_button == 2 {
        result |= ModifierMask::BUTTON2;
    }
    if state_mask & swt::BUTTON3 != 0 || mouse_button == 3 {
        result |= ModifierMask::BUTTON3;
    }
    result
}

/// Convert an SWT key code to an abstract virtual key code
///
/// Unknown codes become [`VK_UNDEFINED`].
pub fn convert_swt_key_code(code: u32) -> u32 {
    match code {
        swt::ARROW_LEFT => VK_LEFT,
        swt::ARROW_RIGHT => VK_RIGHT,
        swt::ARROW_UP => VK_UP,
        swt::ARROW_DOWN => VK_DOWN,
        swt::INSERT => VK_INSERT,
        swt::BS => VK_BACK_SPACE,
        swt::TAB => VK_TAB,
        swt::CR => VK_ENTER,
        swt::DEL => VK_DELETE,
        swt::HOME => VK_HOME,
        swt::END => VK_END,
        swt::PAGE_UP => VK_PAGE_UP,
        swt::PAGE_DOWN => VK_PAGE_DOWN,

        swt::SHIFT => VK_SHIFT,
        swt::CONTROL => VK_CONTROL,
        swt::ALT => VK_ALT,
        swt::CAPS_LOCK => VK_CAPS_LOCK,
        swt::NUM_LOCK => VK_NUM_LOCK,
        swt::SCROLL_LOCK => VK_SCROLL_LOCK,
        swt::PRINT_SCREEN => VK_PRINTSCREEN,
        swt::PAUSE => VK_PAUSE,

        // SWT reports lower case letters, the abstract codes are upper case
        c if (u32::from(b'a')..=u32::from(b'z')).contains(&c) => c - 0x20,
        c if (VK_0..=VK_9).contains(&c) => c,
        0x20 => VK_SPACE,

        0x3C => VK_LESS,
        0x23 => VK_NUMBER_SIGN,
        0x2E => VK_PERIOD,
        0x3A => VK_COLON,
        0x2C => VK_COMMA,
        0x3B => VK_SEMICOLON,
        0x5B => VK_OPEN_BRACKET,
        0x5D => VK_CLOSE_BRACKET,
        0x7B => VK_BRACELEFT,
        0x7D => VK_BRACERIGHT,
        0x21 => VK_EXCLAMATION_MARK,

        swt::ESC => VK_ESCAPE,
        c if (swt::F1..=swt::F12).contains(&c) => VK_F1 + (c - swt::F1),
        // F13 to F20 continue directly in both code spaces
        c if (swt::F13..=swt::F20).contains(&c) => VK_F13 + (c - swt::F13),

        c if (swt::KEYPAD_0..=swt::KEYPAD_9).contains(&c) => VK_NUMPAD0 + (c - swt::KEYPAD_0),
        swt::KEYPAD_ADD => VK_ADD,
        swt::KEYPAD_SUBTRACT => VK_SUBTRACT,
        swt::KEYPAD_MULTIPLY => VK_MULTIPLY,
        swt::KEYPAD_DIVIDE => VK_DIVIDE,
        swt::KEYPAD_DECIMAL => VK_DECIMAL,
        // The abstract model does not tell keypad enter apart
        swt::KEYPAD_CR | swt::KEYPAD_EQUAL => VK_ENTER,

        _ => VK_UNDEFINED,
    }
}

pub fn convert_swt_key_location(location: u32) -> KeyLocation {
    match location {
        swt::NONE => KeyLocation::Standard,
        swt::LEFT => KeyLocation::Left,
        swt::RIGHT => KeyLocation::Right,
        swt::KEYPAD => KeyLocation::Numpad,
        _ => KeyLocation::Unknown,
    }
}

/// SWT reports `'\0'` for keys without a character
pub fn convert_swt_character(character: char) -> char {
    if character == '\0' {
        CHAR_UNDEFINED
    } else {
        character
    }
}
