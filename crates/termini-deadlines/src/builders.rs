//! Deadline set builders.
//!
//! A builder expands a [`MacroConfiguration`] into its ordered list of
//! [`DeadlineCalculationResult`]s by applying each statutory term of the
//! macro type to the reference date.  Either the whole list is returned or
//! the first error is; there are no partial results.

use tracing::debug;

use crate::config::MacroConfiguration;
use crate::macro_type::MacroType;
use crate::result::DeadlineCalculationResult;
use crate::terms::StatutoryTerm;
use termini_core::errors::Result;
use termini_time::{apply_period, Calendar, Date, Italy};

/// Calculate the deadlines of `config` on the Italian calendar.
///
/// ```
/// use termini_deadlines::{calculate_macro_deadlines, MacroConfiguration, MacroType};
/// use termini_time::Date;
///
/// let config = MacroConfiguration::new(MacroType::Art171Ter, Date::from_ymd(2025, 10, 15)?, false);
/// let deadlines = calculate_macro_deadlines(&config)?;
/// assert_eq!(deadlines.len(), 3);
/// assert_eq!(deadlines[0].result_date, Date::from_ymd(2025, 9, 5)?);
/// # Ok::<(), termini_core::Error>(())
/// ```
pub fn calculate_macro_deadlines(
    config: &MacroConfiguration,
) -> Result<Vec<DeadlineCalculationResult>> {
    calculate_macro_deadlines_with(&Italy, config)
}

/// Calculate the deadlines of `config` on an explicit calendar.
pub fn calculate_macro_deadlines_with<C: Calendar + ?Sized>(
    calendar: &C,
    config: &MacroConfiguration,
) -> Result<Vec<DeadlineCalculationResult>> {
    let macro_type = config.macro_type();
    let deadlines = build(
        calendar,
        macro_type.statutory_terms(),
        config.reference_date(),
        config.include_suspension(),
    )?;
    debug!(
        calendar = calendar.name(),
        %macro_type,
        reference = %config.reference_date(),
        include_suspension = config.include_suspension(),
        count = deadlines.len(),
        "macro deadlines calculated"
    );
    Ok(deadlines)
}

/// Parse a macro code and reference date, then calculate on the Italian
/// calendar.
///
/// # Errors
/// `UnsupportedMacroType` for an unknown code, `InvalidDateInput` for a
/// malformed date.
pub fn calculate_from_input(
    macro_code: &str,
    reference_date: &str,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    let config = MacroConfiguration::parse(macro_code, reference_date, include_suspension)?;
    calculate_macro_deadlines(&config)
}

/// Art. 171-ter memoranda for a hearing.
pub fn calculate_171_ter<C: Calendar + ?Sized>(
    calendar: &C,
    hearing: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    by_type(calendar, MacroType::Art171Ter, hearing, include_suspension)
}

/// Art. 189 briefs for a hearing.
pub fn calculate_189<C: Calendar + ?Sized>(
    calendar: &C,
    hearing: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    by_type(calendar, MacroType::Art189, hearing, include_suspension)
}

/// Art. 281-duodecies memoranda for a hearing.
pub fn calculate_281_duodecies<C: Calendar + ?Sized>(
    calendar: &C,
    hearing: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    by_type(calendar, MacroType::Art281Duodecies, hearing, include_suspension)
}

/// Long appeal term from the publication date.
pub fn calculate_appeal_long<C: Calendar + ?Sized>(
    calendar: &C,
    publication: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    by_type(calendar, MacroType::AppealLong, publication, include_suspension)
}

/// Short appeal term from the notification date.
pub fn calculate_appeal_short<C: Calendar + ?Sized>(
    calendar: &C,
    notification: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    by_type(calendar, MacroType::AppealShort, notification, include_suspension)
}

fn by_type<C: Calendar + ?Sized>(
    calendar: &C,
    macro_type: MacroType,
    reference: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    calculate_macro_deadlines_with(
        calendar,
        &MacroConfiguration::new(macro_type, reference, include_suspension),
    )
}

fn build<C: Calendar + ?Sized>(
    calendar: &C,
    terms: &[StatutoryTerm],
    reference: Date,
    include_suspension: bool,
) -> Result<Vec<DeadlineCalculationResult>> {
    terms
        .iter()
        .map(|term| {
            Ok(DeadlineCalculationResult {
                label: term.label.to_owned(),
                description: term.description.to_owned(),
                result_date: apply_period(calendar, reference, term.offset, include_suspension)?,
                offset_days: term.offset_days(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn dates(v: &[DeadlineCalculationResult]) -> Vec<Date> {
        v.iter().map(|r| r.result_date).collect()
    }

    #[test]
    fn art_171_ter_without_suspension() {
        let v = calculate_171_ter(&Italy, date(2025, 10, 15), false).unwrap();
        assert_eq!(
            dates(&v),
            [date(2025, 9, 5), date(2025, 9, 25), date(2025, 10, 3)]
        );
        assert_eq!(v[2].label, "MEMORIA 171-TER 3° TERMINE");
        assert_eq!(v[2].offset_days, -10);
    }

    #[test]
    fn art_281_duodecies_with_suspension() {
        let v = calculate_281_duodecies(&Italy, date(2025, 9, 10), true).unwrap();
        assert_eq!(dates(&v), [date(2025, 7, 11), date(2025, 7, 31)]);
    }

    #[test]
    fn appeals() {
        let long = calculate_appeal_long(&Italy, date(2025, 8, 20), true).unwrap();
        assert_eq!(dates(&long), [date(2026, 3, 2)]);
        assert_eq!(long[0].offset_days, 0);
        let short = calculate_appeal_short(&Italy, date(2025, 7, 20), true).unwrap();
        assert_eq!(dates(&short), [date(2025, 9, 19)]);
        assert_eq!(short[0].offset_days, 0);
    }

    #[test]
    fn input_errors_yield_no_list() {
        assert!(calculate_from_input("unknown", "2025-10-15", false).is_err());
        assert!(calculate_from_input("189", "15-10-2025", false).is_err());
        assert_eq!(calculate_from_input("189", "2025-10-15", false).unwrap().len(), 3);
    }
}
