use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMode {
    Auto,   // Use unicode glyphs if the terminal supports them
    Always, // Always use glyphs
    Never,  // Plain ASCII labels
}

impl GlyphMode {
    pub fn should_use_glyphs(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_unicode_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub glyphs: GlyphMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            glyphs: GlyphMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, glyphs: GlyphMode) -> Self {
        Self { color, glyphs }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never, GlyphMode::Never)
    }

    pub fn from_env() -> Self {
        // NO_COLOR per no-color.org
        if env::var_os("NO_COLOR").is_some() {
            Self::new(ColorMode::Never, GlyphMode::Auto)
        } else {
            Self::default()
        }
    }
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal() && env::var("TERM").map(|t| t != "dumb").unwrap_or(false)
}

fn detect_unicode_support() -> bool {
    env::var("LANG")
        .or_else(|_| env::var("LC_ALL"))
        .map(|v| v.to_uppercase().contains("UTF"))
        .unwrap_or(false)
}

/// Per-metric gate status used by the report renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn glyph(&self, use_glyphs: bool) -> &'static str {
        match (self, use_glyphs) {
            (Status::Pass, true) => "\u{2705}",
            (Status::Warn, true) => "\u{26a0}\u{fe0f}",
            (Status::Fail, true) => "\u{274c}",
            (Status::Pass, false) => "PASS",
            (Status::Warn, false) => "WARN",
            (Status::Fail, false) => "FAIL",
        }
    }
}

/// Human-readable byte size, binary units.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes / KIB)
    } else {
        format!("{} B", bytes as u64)
    }
}

/// Milliseconds rendered as seconds with one decimal.
pub fn format_duration_ms(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}
