/// Print the deadlines of a statutory macro.
///
/// Usage: termini <macro> <YYYY-MM-DD> [--suspension] [--trace]
use anyhow::{bail, Context};
use termini::deadlines::{calculate_macro_deadlines, MacroConfiguration, MacroType};
use termini::time::{trace_backward, trace_forward, Italy, Period, TimeUnit};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn usage() -> String {
    let codes: Vec<&str> = MacroType::ALL.iter().map(MacroType::code).collect();
    format!(
        "usage: termini <macro> <YYYY-MM-DD> [--suspension] [--trace]\n  macros: {}",
        codes.join(", ")
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("termini=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut positional = Vec::new();
    let mut include_suspension = false;
    let mut show_trace = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--suspension" | "-s" => include_suspension = true,
            "--trace" | "-t" => show_trace = true,
            "--help" | "-h" => {
                println!("{}", usage());
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }
    let [macro_code, reference] = positional.as_slice() else {
        bail!(usage());
    };

    let config = MacroConfiguration::parse(macro_code, reference, include_suspension)
        .with_context(|| format!("invalid input {macro_code:?} {reference:?}"))?;
    let macro_type = config.macro_type();
    info!(%macro_type, reference = %config.reference_date(), include_suspension, "calculating");

    let deadlines = calculate_macro_deadlines(&config)?;

    println!("{}", macro_type.display_name());
    println!(
        "{}: {}{}",
        macro_type.reference_kind(),
        config.reference_date().format_dmy(),
        if include_suspension {
            " (con sospensione feriale)"
        } else {
            ""
        }
    );
    if let Some(court) = macro_type.default_court() {
        println!("Ufficio: {court}");
    } else if !macro_type.allowed_courts().is_empty() {
        println!("Uffici ammessi: {}", macro_type.allowed_courts().join(", "));
    }
    println!();
    for (deadline, term) in deadlines.iter().zip(macro_type.statutory_terms()) {
        println!("  {deadline}");
        if show_trace {
            print_trace(&config, term.offset)?;
        }
    }
    Ok(())
}

fn print_trace(config: &MacroConfiguration, offset: Period) -> anyhow::Result<()> {
    let days = offset.length.unsigned_abs();
    let trace = match offset.unit {
        TimeUnit::Days if offset.is_backward() => trace_backward(
            &Italy,
            config.reference_date(),
            days,
            config.include_suspension(),
        )?,
        TimeUnit::Days => trace_forward(
            &Italy,
            config.reference_date(),
            days,
            config.include_suspension(),
        )?,
        _ => {
            println!("    (termine a mesi: nessun conteggio giornaliero)");
            return Ok(());
        }
    };
    for line in trace.to_string().lines() {
        println!("    {line}");
    }
    Ok(())
}
