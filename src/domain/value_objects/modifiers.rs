//! Modifier key bitmask carried by every abstract input event
//!
//! Bit positions match the AWT extended modifier masks, so Swing-style native
//! masks pass through unchanged and SWT-style masks are converted.

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u32 {
        const SHIFT = 1 << 6;
        const CTRL = 1 << 7;
        const META = 1 << 8;
        const ALT = 1 << 9;
        const BUTTON1 = 1 << 10;
        const BUTTON2 = 1 << 11;
        const BUTTON3 = 1 << 12;
        const ALT_GRAPH = 1 << 13;
    }
}

impl ModifierMask {
    pub const NONE: ModifierMask = ModifierMask::empty();

    pub fn is_shift_down(self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_control_down(self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt_down(self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_alt_graph_down(self) -> bool {
        self.contains(Self::ALT_GRAPH)
    }

    pub fn is_meta_down(self) -> bool {
        self.contains(Self::META)
    }

    pub fn is_button1_down(self) -> bool {
        self.contains(Self::BUTTON1)
    }

    pub fn is_button2_down(self) -> bool {
        self.contains(Self::BUTTON2)
    }

    pub fn is_button3_down(self) -> bool {
        self.contains(Self::BUTTON3)
    }

    /// Whether the platform's menu shortcut key (Cmd on macOS, Ctrl elsewhere) is held
    pub fn is_menu_shortcut_down(self) -> bool {
        if cfg!(target_os = "macos") {
            self.is_meta_down()
        } else {
            self.is_control_down()
        }
    }
}
