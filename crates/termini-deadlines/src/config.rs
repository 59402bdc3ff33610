//! `MacroConfiguration`: the input of a deadline calculation.

use crate::macro_type::MacroType;
use termini_core::errors::Result;
use termini_time::Date;

/// What to calculate: a macro type, its reference date, and whether the
/// suspension of terms applies.
///
/// Immutable once built; a different input is a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroConfiguration {
    macro_type: MacroType,
    reference_date: Date,
    include_suspension: bool,
}

impl MacroConfiguration {
    /// Build a configuration from typed parts.
    pub fn new(macro_type: MacroType, reference_date: Date, include_suspension: bool) -> Self {
        Self {
            macro_type,
            reference_date,
            include_suspension,
        }
    }

    /// Build a configuration from user-entered text.
    ///
    /// # Errors
    /// [`UnsupportedMacroType`](termini_core::Error::UnsupportedMacroType) for
    /// an unknown code, [`InvalidDateInput`](termini_core::Error::InvalidDateInput)
    /// for a malformed date.
    pub fn parse(macro_code: &str, reference_date: &str, include_suspension: bool) -> Result<Self> {
        Ok(Self::new(
            macro_code.parse()?,
            reference_date.parse()?,
            include_suspension,
        ))
    }

    /// The macro type.
    pub fn macro_type(&self) -> MacroType {
        self.macro_type
    }

    /// Hearing, publication, or notification date.
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Whether the August suspension applies.
    pub fn include_suspension(&self) -> bool {
        self.include_suspension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termini_core::Error;

    #[test]
    fn parse_ok() {
        let c = MacroConfiguration::parse("171-ter", "2025-10-15", true).unwrap();
        assert_eq!(c.macro_type(), MacroType::Art171Ter);
        assert_eq!(c.reference_date(), Date::from_ymd(2025, 10, 15).unwrap());
        assert!(c.include_suspension());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            MacroConfiguration::parse("unknown", "2025-10-15", false),
            Err(Error::UnsupportedMacroType(_))
        ));
        assert!(matches!(
            MacroConfiguration::parse("189", "2025-02-30", false),
            Err(Error::InvalidDateInput(_))
        ));
    }
}
