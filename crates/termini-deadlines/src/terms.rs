//! Statutory term tables.
//!
//! Each macro deadline expands into a fixed, ordered list of sub-deadlines.
//! The order is the statutory sequence (first memo, second memo, …), which is
//! not necessarily chronological once prudential adjustment has run.

use termini_time::{Period, TimeUnit};

/// One sub-deadline of a macro deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatutoryTerm {
    /// Statutory name of the act, as written on the docket.
    pub label: &'static str,
    /// What the act is for.
    pub description: &'static str,
    /// Distance from the reference date.
    pub offset: Period,
}

impl StatutoryTerm {
    const fn new(label: &'static str, description: &'static str, offset: Period) -> Self {
        Self {
            label,
            description,
            offset,
        }
    }

    /// Signed day offset reported with the result: the day count for terms
    /// running back from a hearing, `0` for appeal terms, which are not
    /// hearing-relative.
    pub fn offset_days(&self) -> i32 {
        match self.offset.unit {
            TimeUnit::Days if self.offset.is_backward() => self.offset.length,
            _ => 0,
        }
    }
}

/// Art. 171-ter c.p.c.: supplementary memoranda before the first hearing.
pub const ART_171_TER: &[StatutoryTerm] = &[
    StatutoryTerm::new(
        "MEMORIA 171-TER 1° TERMINE",
        "Prima memoria integrativa",
        Period::days(-40),
    ),
    StatutoryTerm::new(
        "MEMORIA 171-TER 2° TERMINE",
        "Seconda memoria integrativa",
        Period::days(-20),
    ),
    StatutoryTerm::new(
        "MEMORIA 171-TER 3° TERMINE",
        "Terza memoria (repliche)",
        Period::days(-10),
    ),
];

/// Art. 189 c.p.c.: conclusions and closing briefs before the decision
/// hearing.
pub const ART_189: &[StatutoryTerm] = &[
    StatutoryTerm::new(
        "FOGLIO DI PRECISAZIONE DELLE CONCLUSIONI",
        "Precisazione delle conclusioni",
        Period::days(-60),
    ),
    StatutoryTerm::new(
        "MEMORIA 189 2° TERMINE (CONCLUSIONALE)",
        "Comparsa conclusionale",
        Period::days(-30),
    ),
    StatutoryTerm::new(
        "MEMORIA 189 3° TERMINE C.P.C. (REPLICHE)",
        "Memoria di replica",
        Period::days(-10),
    ),
];

/// Art. 281-duodecies c.p.c.: memoranda in the simplified procedure.
pub const ART_281_DUODECIES: &[StatutoryTerm] = &[
    StatutoryTerm::new(
        "MEMORIA 281-DUODECIES 1° TERMINE",
        "Prima memoria",
        Period::days(-30),
    ),
    StatutoryTerm::new(
        "MEMORIA 281-DUODECIES 2° TERMINE",
        "Seconda memoria",
        Period::days(-10),
    ),
];

/// Art. 327 c.p.c.: long appeal term from publication of the judgment.
pub const APPEAL_LONG: &[StatutoryTerm] = &[StatutoryTerm::new(
    "ATTO DI APPELLO (TERMINE LUNGO)",
    "Atto di appello da depositare entro 6 mesi dalla pubblicazione della sentenza",
    Period::months(6),
)];

/// Art. 325 c.p.c.: short appeal term from notification of the judgment.
pub const APPEAL_SHORT: &[StatutoryTerm] = &[StatutoryTerm::new(
    "ATTO DI APPELLO (TERMINE BREVE)",
    "Atto di appello da depositare entro 30 giorni dalla notifica della sentenza",
    Period::days(30),
)];
