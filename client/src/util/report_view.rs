//! Dashboard sections and their presentation metadata.
//!
//! Each report category appears three times on the dashboard (counter, list,
//! bar) and must look the same everywhere, so labels and colors live here.

#[cfg(test)]
#[path = "report_view_test.rs"]
mod report_view_test;

use charts::Rgba;

use crate::net::types::AnalysisReport;

/// One of the four report categories, in dashboard order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportSection {
    StrongPoints,
    WeakPoints,
    Suggestions,
    NextMoves,
}

impl ReportSection {
    pub const ALL: [Self; 4] = [Self::StrongPoints, Self::WeakPoints, Self::Suggestions, Self::NextMoves];

    /// Heading above the list.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::StrongPoints => "Strong Points",
            Self::WeakPoints => "Weak Points",
            Self::Suggestions => "Smart Suggestions",
            Self::NextMoves => "Next Strategic Moves",
        }
    }

    /// Category label on the bar chart axis.
    #[must_use]
    pub fn bar_label(self) -> &'static str {
        match self {
            Self::StrongPoints => "Strong Points",
            Self::WeakPoints => "Weak Points",
            Self::Suggestions => "Suggestions",
            Self::NextMoves => "Moves",
        }
    }

    /// BEM modifier shared by the counter card and list.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::StrongPoints => "strong",
            Self::WeakPoints => "weak",
            Self::Suggestions => "suggestions",
            Self::NextMoves => "moves",
        }
    }

    #[must_use]
    pub fn color(self) -> Rgba {
        match self {
            Self::StrongPoints => Rgba::rgb(0x22, 0xc5, 0x5e),
            Self::WeakPoints => Rgba::rgb(0xef, 0x44, 0x44),
            Self::Suggestions => Rgba::rgb(0x3b, 0x82, 0xf6),
            Self::NextMoves => Rgba::rgb(0xa8, 0x55, 0xf7),
        }
    }

    #[must_use]
    pub fn items(self, report: &AnalysisReport) -> &[String] {
        match self {
            Self::StrongPoints => &report.strong_points,
            Self::WeakPoints => &report.weak_points,
            Self::Suggestions => &report.suggestions,
            Self::NextMoves => &report.next_moves,
        }
    }
}
