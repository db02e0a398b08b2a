//! Indentation configuration for rendered output.

/// Indentation style for block-structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Java convention).
    pub const JAVA: Self = Self::Spaces(4);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// The text for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// Parse a config value: `"tab"` or a number of spaces.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "tab" | "tabs" => Some(Self::Tab),
            n => n.parse::<u8>().ok().map(Self::Spaces),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
