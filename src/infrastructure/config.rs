/// How the generated command is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One flag per line, joined with a trailing backslash continuation.
    #[default]
    MultiLine,
    /// Everything on a single line.
    SingleLine,
}

impl Layout {
    pub fn separator(self) -> &'static str {
        match self {
            Layout::MultiLine => " \\\n  ",
            Layout::SingleLine => " ",
        }
    }
}

/// Rendering options for the generated command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub layout: Layout,
}

impl RenderConfig {
    pub fn from_flags(one_line: bool) -> Self {
        let layout = if one_line {
            Layout::SingleLine
        } else {
            Layout::MultiLine
        };
        Self { layout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_multi_line() {
        assert_eq!(RenderConfig::default().layout.separator(), " \\\n  ");
    }

    #[test]
    fn one_line_flag_selects_single_line() {
        assert_eq!(RenderConfig::from_flags(true).layout, Layout::SingleLine);
        assert_eq!(RenderConfig::from_flags(false).layout, Layout::MultiLine);
    }
}
