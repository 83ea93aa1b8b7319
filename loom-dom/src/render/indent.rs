use std::fmt;

/// One level of indentation in rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces of the given width.
    Spaces(u8),
    /// A single tab.
    Tab,
}

impl Indent {
    /// Four spaces, the usual C# layout.
    pub const CSHARP: Self = Self::Spaces(4);

    /// Columns occupied by one level, counting a tab as one.
    pub fn width(&self) -> usize {
        match self {
            Self::Spaces(n) => usize::from(*n),
            Self::Tab => 1,
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(n) => write!(f, "{:width$}", "", width = usize::from(*n)),
            Self::Tab => f.write_str("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}
