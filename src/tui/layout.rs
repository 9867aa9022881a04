/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code. Used by the status bar (compact vs full format) and the
/// gallery (one vs two columns).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: split pane, minimal terminal
    Compact,
    /// 60-99 cols: half-screen
    Normal,
    /// 100+ cols: full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }
}
