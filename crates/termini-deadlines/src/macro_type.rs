//! `MacroType`: the closed set of statutory macro deadlines.

use std::str::FromStr;

use crate::terms::{self, StatutoryTerm};
use termini_core::errors::{Error, Result};

/// A statutory macro deadline.
///
/// Adding a variant forces every `match` on it to be revisited; there is no
/// string dispatch past [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MacroType {
    /// Art. 171-ter c.p.c.: three memoranda before the first hearing.
    #[cfg_attr(feature = "serde", serde(rename = "171-ter"))]
    Art171Ter,
    /// Art. 189 c.p.c.: conclusions, closing brief, reply brief.
    #[cfg_attr(feature = "serde", serde(rename = "189"))]
    Art189,
    /// Art. 281-duodecies c.p.c.: two memoranda.
    #[cfg_attr(feature = "serde", serde(rename = "281-duodecies"))]
    Art281Duodecies,
    /// Long appeal term: six months from publication.
    #[cfg_attr(feature = "serde", serde(rename = "appello-lungo"))]
    AppealLong,
    /// Short appeal term: thirty days from notification.
    #[cfg_attr(feature = "serde", serde(rename = "appello-breve"))]
    AppealShort,
}

/// What the reference date of a macro deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// The hearing the terms run back from.
    Hearing,
    /// Publication of the judgment.
    Publication,
    /// Notification of the judgment.
    Notification,
}

impl ReferenceKind {
    /// Italian caption for the reference date.
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Hearing => "Data dell'udienza",
            ReferenceKind::Publication => "Data di pubblicazione",
            ReferenceKind::Notification => "Data di notifica",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl MacroType {
    /// Every macro type, in menu order.
    pub const ALL: [MacroType; 5] = [
        MacroType::Art171Ter,
        MacroType::Art189,
        MacroType::Art281Duodecies,
        MacroType::AppealLong,
        MacroType::AppealShort,
    ];

    /// Stable code used in storage and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            MacroType::Art171Ter => "171-ter",
            MacroType::Art189 => "189",
            MacroType::Art281Duodecies => "281-duodecies",
            MacroType::AppealLong => "appello-lungo",
            MacroType::AppealShort => "appello-breve",
        }
    }

    /// Long label shown in the selection menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            MacroType::Art171Ter => "Art. 171-ter C.P.C. (Memorie integrative)",
            MacroType::Art189 => "Art. 189 C.P.C. (Precisazione conclusioni)",
            MacroType::Art281Duodecies => "Art. 281-duodecies C.P.C. (Memorie)",
            MacroType::AppealLong => "Atto di appello (termine lungo)",
            MacroType::AppealShort => "Atto di appello (termine breve)",
        }
    }

    /// The ordered sub-deadline table.
    pub fn statutory_terms(&self) -> &'static [StatutoryTerm] {
        match self {
            MacroType::Art171Ter => terms::ART_171_TER,
            MacroType::Art189 => terms::ART_189,
            MacroType::Art281Duodecies => terms::ART_281_DUODECIES,
            MacroType::AppealLong => terms::APPEAL_LONG,
            MacroType::AppealShort => terms::APPEAL_SHORT,
        }
    }

    /// What the reference date stands for.
    pub fn reference_kind(&self) -> ReferenceKind {
        match self {
            MacroType::Art171Ter | MacroType::Art189 | MacroType::Art281Duodecies => {
                ReferenceKind::Hearing
            }
            MacroType::AppealLong => ReferenceKind::Publication,
            MacroType::AppealShort => ReferenceKind::Notification,
        }
    }

    /// Court office filled in automatically, if the act belongs to one.
    pub fn default_court(&self) -> Option<&'static str> {
        match self {
            MacroType::Art171Ter | MacroType::Art189 => Some("TRIB."),
            _ => None,
        }
    }

    /// Court offices the act may be filed with; empty means unrestricted.
    pub fn allowed_courts(&self) -> &'static [&'static str] {
        match self {
            MacroType::Art171Ter | MacroType::Art189 => &["TRIB."],
            MacroType::Art281Duodecies => &["G.D.P.", "TRIB."],
            MacroType::AppealLong | MacroType::AppealShort => &[],
        }
    }
}

impl FromStr for MacroType {
    type Err = Error;

    /// Accepts the storage codes and the English aliases
    /// `appeal-long` / `appeal-short`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "171-ter" => Ok(MacroType::Art171Ter),
            "189" => Ok(MacroType::Art189),
            "281-duodecies" => Ok(MacroType::Art281Duodecies),
            "appello-lungo" | "appeal-long" => Ok(MacroType::AppealLong),
            "appello-breve" | "appeal-short" => Ok(MacroType::AppealShort),
            _ => Err(Error::UnsupportedMacroType(s.to_owned())),
        }
    }
}

impl std::fmt::Display for MacroType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
