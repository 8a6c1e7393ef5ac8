//! Display and export modes.

use serde::{Deserialize, Serialize};

/// Which image of a page the detail view shows.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    /// Black-and-white line art
    #[default]
    Line,
    /// Colorized variant
    Colored,
}

/// Which image of a page to export.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ExportKind {
    /// Printable line art
    Print,
    /// Colorized variant
    Colored,
}

impl ExportKind {
    /// Suffix appended to exported file names.
    pub fn suffix(&self) -> &'static str {
        match self {
            ExportKind::Print => "print",
            ExportKind::Colored => "colored",
        }
    }
}
