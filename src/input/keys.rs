//! Abstract virtual key codes
//!
//! Values match the AWT virtual key codes so Swing-style key events pass
//! through unchanged. SWT-style codes are mapped onto these by
//! [`convert_swt_key_code`](super::conversion::convert_swt_key_code).

pub const VK_UNDEFINED: u32 = 0;

// Navigation
pub const VK_LEFT: u32 = 0x25;
pub const VK_UP: u32 = 0x26;
pub const VK_RIGHT: u32 = 0x27;
pub const VK_DOWN: u32 = 0x28;
pub const VK_HOME: u32 = 0x24;
pub const VK_END: u32 = 0x23;
pub const VK_PAGE_UP: u32 = 0x21;
pub const VK_PAGE_DOWN: u32 = 0x22;

// Editing
pub const VK_BACK_SPACE: u32 = 0x08;
pub const VK_TAB: u32 = 0x09;
pub const VK_ENTER: u32 = 0x0A;
pub const VK_ESCAPE: u32 = 0x1B;
pub const VK_SPACE: u32 = 0x20;
pub const VK_DELETE: u32 = 0x7F;
pub const VK_INSERT: u32 = 0x9B;

// Modifiers and locks
pub const VK_SHIFT: u32 = 0x10;
pub const VK_CONTROL: u32 = 0x11;
pub const VK_ALT: u32 = 0x12;
pub const VK_PAUSE: u32 = 0x13;
pub const VK_CAPS_LOCK: u32 = 0x14;
pub const VK_NUM_LOCK: u32 = 0x90;
pub const VK_SCROLL_LOCK: u32 = 0x91;
pub const VK_PRINTSCREEN: u32 = 0x9A;

// Punctuation
pub const VK_COMMA: u32 = 0x2C;
pub const VK_PERIOD: u32 = 0x2E;
pub const VK_SEMICOLON: u32 = 0x3B;
pub const VK_OPEN_BRACKET: u32 = 0x5B;
pub const VK_CLOSE_BRACKET: u32 = 0x5D;
pub const VK_LESS: u32 = 0x99;
pub const VK_BRACELEFT: u32 = 0xA1;
pub const VK_BRACERIGHT: u32 = 0xA2;
pub const VK_COLON: u32 = 0x201;
pub const VK_EXCLAMATION_MARK: u32 = 0x205;
pub const VK_NUMBER_SIGN: u32 = 0x208;

// Letters and digits use their upper case ASCII values
pub const VK_0: u32 = 0x30;
pub const VK_9: u32 = 0x39;
pub const VK_A: u32 = 0x41;
pub const VK_Z: u32 = 0x5A;

// Function keys (F13 and above are not contiguous with F1-F12)
pub const VK_F1: u32 = 0x70;
pub const VK_F12: u32 = 0x7B;
pub const VK_F13: u32 = 0xF000;
pub const VK_F24: u32 = 0xF00B;

// Keypad
pub const VK_NUMPAD0: u32 = 0x60;
pub const VK_NUMPAD9: u32 = 0x69;
pub const VK_MULTIPLY: u32 = 0x6A;
pub const VK_ADD: u32 = 0x6B;
pub const VK_SUBTRACT: u32 = 0x6D;
pub const VK_DECIMAL: u32 = 0x6E;
pub const VK_DIVIDE: u32 = 0x6F;

/// Key code of function key `n` (1-24), or `None` outside that range
pub fn function_key(n: u32) -> Option<u32> {
    match n {
        1..=12 => Some(VK_F1 + n - 1),
        13..=24 => Some(VK_F13 + n - 13),
        _ => None,
    }
}

/// Check if this is a letter, digit or space key
pub fn is_printable(code: u32) -> bool {
    (VK_A..=VK_Z).contains(&code) || (VK_0..=VK_9).contains(&code) || code == VK_SPACE
}
