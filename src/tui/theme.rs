use ratatui::style::Color;

/// An immutable named set of color tokens. Views hold no palette of their
/// own — they read the one current `Palette` on `App` by reference, so a
/// swap is visible everywhere on the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    // background group
    pub background: Color,
    pub surface: Color,
    pub selection_bg: Color,
    // text group
    pub text: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub text_inverse: Color,
    // accent group
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    // border group
    pub border: Color,
    pub divider: Color,
    pub focus: Color,
}

pub const DARK: Palette = Palette {
    name: "dark",
    background: Color::Rgb(0x00, 0x00, 0x00),
    surface: Color::Rgb(0x1C, 0x1C, 0x1E),
    selection_bg: Color::Rgb(0x3A, 0x3A, 0x3C),
    text: Color::Rgb(0xFF, 0xFF, 0xFF),
    text_secondary: Color::Rgb(0x98, 0x98, 0x9D),
    text_disabled: Color::Rgb(0x48, 0x48, 0x4A),
    text_inverse: Color::Rgb(0x00, 0x00, 0x00),
    accent: Color::Rgb(0x0A, 0x84, 0xFF),
    success: Color::Rgb(0x32, 0xD7, 0x4B),
    warning: Color::Rgb(0xFF, 0x9F, 0x0A),
    error: Color::Rgb(0xFF, 0x45, 0x3A),
    info: Color::Rgb(0x64, 0xD2, 0xFF),
    border: Color::Rgb(0x38, 0x38, 0x3A),
    divider: Color::Rgb(0x2C, 0x2C, 0x2E),
    focus: Color::Rgb(0x0A, 0x84, 0xFF),
};

pub const LIGHT: Palette = Palette {
    name: "light",
    background: Color::Rgb(0xFF, 0xFF, 0xFF),
    surface: Color::Rgb(0xF5, 0xF5, 0xF7),
    selection_bg: Color::Rgb(0xE5, 0xE5, 0xEA),
    text: Color::Rgb(0x1D, 0x1D, 0x1F),
    text_secondary: Color::Rgb(0x6E, 0x6E, 0x73),
    text_disabled: Color::Rgb(0xC7, 0xC7, 0xCC),
    text_inverse: Color::Rgb(0xFF, 0xFF, 0xFF),
    accent: Color::Rgb(0x00, 0x7A, 0xFF),
    success: Color::Rgb(0x34, 0xC7, 0x59),
    warning: Color::Rgb(0xFF, 0x95, 0x00),
    error: Color::Rgb(0xFF, 0x3B, 0x30),
    info: Color::Rgb(0x5A, 0xC8, 0xFA),
    border: Color::Rgb(0xD2, 0xD2, 0xD7),
    divider: Color::Rgb(0xE5, 0xE5, 0xEA),
    focus: Color::Rgb(0x00, 0x7A, 0xFF),
};

pub const DARK_PURPLE: Palette = Palette {
    name: "darkPurple",
    background: Color::Rgb(0x0C, 0x00, 0x1B),
    surface: Color::Rgb(0x1A, 0x10, 0x2E),
    selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
    text: Color::Rgb(0xE8, 0xE2, 0xFF),
    text_secondary: Color::Rgb(0x9D, 0x94, 0xC8),
    text_disabled: Color::Rgb(0x54, 0x4C, 0x78),
    text_inverse: Color::Rgb(0x0C, 0x00, 0x1B),
    accent: Color::Rgb(0xCC, 0x66, 0xFF),
    success: Color::Rgb(0x44, 0xFF, 0x88),
    warning: Color::Rgb(0xFF, 0xD7, 0x00),
    error: Color::Rgb(0xFF, 0x44, 0x44),
    info: Color::Rgb(0x44, 0xDD, 0xFF),
    border: Color::Rgb(0x39, 0x2B, 0x5E),
    divider: Color::Rgb(0x28, 0x1C, 0x45),
    focus: Color::Rgb(0xCC, 0x66, 0xFF),
};

pub const DARK_BLUE: Palette = Palette {
    name: "darkBlue",
    background: Color::Rgb(0x00, 0x08, 0x14),
    surface: Color::Rgb(0x0D, 0x1B, 0x2A),
    selection_bg: Color::Rgb(0x1B, 0x32, 0x4D),
    text: Color::Rgb(0xE0, 0xEC, 0xFF),
    text_secondary: Color::Rgb(0x8C, 0xA3, 0xC0),
    text_disabled: Color::Rgb(0x45, 0x56, 0x6E),
    text_inverse: Color::Rgb(0x00, 0x08, 0x14),
    accent: Color::Rgb(0x44, 0x88, 0xFF),
    success: Color::Rgb(0x34, 0xC7, 0x59),
    warning: Color::Rgb(0xFF, 0xB3, 0x40),
    error: Color::Rgb(0xFF, 0x52, 0x52),
    info: Color::Rgb(0x64, 0xD2, 0xFF),
    border: Color::Rgb(0x21, 0x3A, 0x57),
    divider: Color::Rgb(0x15, 0x28, 0x3D),
    focus: Color::Rgb(0x44, 0x88, 0xFF),
};

/// All built-in palettes, in menu/cycling order.
pub const PALETTES: [Palette; 4] = [DARK, LIGHT, DARK_PURPLE, DARK_BLUE];

impl Palette {
    /// Look up a palette by name. Unknown names return None — callers keep
    /// the palette they already have.
    pub fn named(name: &str) -> Option<Palette> {
        PALETTES.iter().find(|p| p.name == name).copied()
    }

    /// The palette after this one in cycling order (wraps around).
    pub fn next(&self) -> Palette {
        let idx = PALETTES
            .iter()
            .position(|p| p.name == self.name)
            .unwrap_or(0);
        PALETTES[(idx + 1) % PALETTES.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_finds_every_builtin() {
        for palette in PALETTES {
            assert_eq!(Palette::named(palette.name), Some(palette));
        }
    }

    #[test]
    fn named_rejects_unknown() {
        assert_eq!(Palette::named("solarized"), None);
        assert_eq!(Palette::named(""), None);
    }

    #[test]
    fn next_cycles_through_all_and_wraps() {
        let mut palette = DARK;
        let mut seen = vec![palette.name];
        for _ in 0..3 {
            palette = palette.next();
            seen.push(palette.name);
        }
        assert_eq!(seen, vec!["dark", "light", "darkPurple", "darkBlue"]);
        assert_eq!(palette.next().name, "dark");
    }
}
