//! Tally XML request descriptors.
//!
//! These enums name the header values of a Tally `<ENVELOPE>` request. The
//! envelope itself is assembled in `tallyai-core::tally::envelope`.

use std::fmt;

/// Value of the `<TALLYREQUEST>` header element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyRequestKind {
    Export,
    Execute,
}

impl fmt::Display for TallyRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyRequestKind::Export => write!(f, "Export"),
            TallyRequestKind::Execute => write!(f, "Execute"),
        }
    }
}

/// Value of the `<TYPE>` header element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyRequestType {
    Data,
    Collection,
    TdlFunction,
}

impl fmt::Display for TallyRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyRequestType::Data => write!(f, "Data"),
            TallyRequestType::Collection => write!(f, "Collection"),
            TallyRequestType::TdlFunction => write!(f, "TDLFunction"),
        }
    }
}

/// Boolean flag as Tally spells it in TDL attributes and variables.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
