//! Wombat CLI
//!
//! Validates a calc() expression tree stored as JSON and resolves it against
//! a layout context built from command-line flags.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::json;
use wombat_css::{
    CalcSum, CalculatedStyleValue, DEFAULT_FONT_SIZE_PX, LayoutContext, PercentageBasis,
    ResolvedType, Viewport,
};

/// Wombat: evaluate CSS calc() expression trees
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve an expression tree
    wombat demos/rotation.json

    # Resolve percentages against a 400px containing block
    wombat --basis 400px demos/width.json

    # Read from stdin and print JSON
    cat demos/width.json | wombat --basis 400px --json

    # Change the font and viewport used by relative units
    wombat --font-size 20 --viewport-width 1920 --viewport-height 1080 demos/width.json
"#)]
struct Cli {
    /// JSON expression tree to evaluate; reads stdin when omitted
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Computed font-size of the element, in px (em, ex, ch, lh)
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE_PX)]
    font_size: f64,

    /// Font-size of the root element, in px (rem, rlh)
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE_PX)]
    root_font_size: f64,

    /// Viewport width, in px (vw, vmin, vmax)
    #[arg(long, default_value = "1280")]
    viewport_width: f64,

    /// Viewport height, in px (vh, vmin, vmax)
    #[arg(long, default_value = "720")]
    viewport_height: f64,

    /// Reference quantity for percentages, e.g. 200px, 90deg, 2s, 1khz
    #[arg(long, value_name = "DIMENSION")]
    basis: Option<PercentageBasis>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let source = read_input(cli.path.as_deref())?;
    let expression: CalcSum =
        serde_json::from_str(&source).context("input is not a calc() expression tree")?;

    let value = match CalculatedStyleValue::new(expression) {
        Ok(value) => value,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            return Ok(ExitCode::FAILURE);
        }
    };

    let context = LayoutContext::with_font_sizes(
        cli.font_size,
        cli.root_font_size,
        Viewport {
            width: cli.viewport_width,
            height: cli.viewport_height,
        },
    );
    let resolved = resolve(&value, &context, cli.basis.unwrap_or_default());

    if cli.json {
        let report = json!({
            "expression": value.to_string(),
            "type": value.resolved_type().to_string(),
            "contains_percentage": value.contains_percentage(),
            "value": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<20} {value}", "expression:".bold());
        println!("{:<20} {}", "type:".bold(), value.resolved_type());
        println!(
            "{:<20} {}",
            "contains percentage:".bold(),
            value.contains_percentage()
        );
        match resolved {
            Some(text) => println!("{:<20} {}", "value:".bold(), text.green()),
            None => println!(
                "{:<20} {}",
                "value:".bold(),
                "unresolved (percentages need a matching --basis)".yellow()
            ),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Read the expression tree from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            let _ = io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Resolve with the `_percentage` accessor when the basis has the
/// expression's dimension, and with the accessor for the expression's own
/// type otherwise.
fn resolve(
    value: &CalculatedStyleValue,
    context: &LayoutContext,
    basis: PercentageBasis,
) -> Option<String> {
    match (basis, value.resolved_type()) {
        (PercentageBasis::Length(basis), ResolvedType::Length | ResolvedType::Percentage) => value
            .resolve_length_percentage(context, basis)
            .map(|length| length.to_string()),
        (PercentageBasis::Angle(basis), ResolvedType::Angle | ResolvedType::Percentage) => value
            .resolve_angle_percentage(basis)
            .map(|angle| angle.to_string()),
        (PercentageBasis::Frequency(basis), ResolvedType::Frequency | ResolvedType::Percentage) => {
            value
                .resolve_frequency_percentage(basis)
                .map(|frequency| frequency.to_string())
        }
        (PercentageBasis::Time(basis), ResolvedType::Time | ResolvedType::Percentage) => value
            .resolve_time_percentage(basis)
            .map(|time| time.to_string()),
        (_, resolved_type) => resolve_as(value, context, resolved_type),
    }
}

/// Resolve with the plain accessor for `resolved_type`.
fn resolve_as(
    value: &CalculatedStyleValue,
    context: &LayoutContext,
    resolved_type: ResolvedType,
) -> Option<String> {
    match resolved_type {
        ResolvedType::Angle => value.resolve_angle().map(|angle| angle.to_string()),
        ResolvedType::Frequency => value
            .resolve_frequency()
            .map(|frequency| frequency.to_string()),
        ResolvedType::Integer => value.resolve_integer().map(|integer| integer.to_string()),
        ResolvedType::Length => value.resolve_length(context).map(|length| length.to_string()),
        ResolvedType::Number => value.resolve_number().map(|number| number.to_string()),
        ResolvedType::Percentage => value
            .resolve_percentage()
            .map(|percentage| percentage.to_string()),
        ResolvedType::Time => value.resolve_time().map(|time| time.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use wombat_css::{Angle, CalcProduct, Length, LengthUnit, Number, Percentage};

    use super::*;

    fn calc(expression: CalcSum) -> CalculatedStyleValue {
        CalculatedStyleValue::new(expression).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_basis() {
        let cli = Cli::try_parse_from(["wombat", "--basis", "400px", "tree.json"]).unwrap();
        assert_eq!(
            cli.basis,
            Some(PercentageBasis::Length(Length::make_px(400.0)))
        );
        assert!(Cli::try_parse_from(["wombat", "--basis", "400zz"]).is_err());
    }

    #[test]
    fn test_resolve_without_basis() {
        let context = LayoutContext::default();
        let value = calc(CalcSum::new(Length::new(2.0, LengthUnit::Em)).plus(Length::make_px(4.0)));
        assert_eq!(
            resolve(&value, &context, PercentageBasis::None).as_deref(),
            Some("36px")
        );

        let mixed = calc(CalcSum::new(Percentage::new(50.0)).plus(Length::make_px(4.0)));
        assert_eq!(resolve(&mixed, &context, PercentageBasis::None), None);
    }

    #[test]
    fn test_resolve_ignores_basis_of_another_dimension() {
        let context = LayoutContext::default();
        let basis = PercentageBasis::Length(Length::make_px(400.0));

        let integer = calc(CalcSum::new(
            CalcProduct::new(Number::integer(2)).times(Number::integer(3)),
        ));
        assert_eq!(resolve(&integer, &context, basis).as_deref(), Some("6"));

        let number = calc(CalcSum::new(
            CalcProduct::new(Number::integer(3)).divided_by(Number::integer(2)),
        ));
        assert_eq!(resolve(&number, &context, basis).as_deref(), Some("1.5"));

        let angle = calc(CalcSum::new(Angle::make_degrees(10.0)).plus(Angle::make_degrees(5.0)));
        assert_eq!(resolve(&angle, &context, basis).as_deref(), Some("15deg"));

        // A percentage of an angle still needs an angle basis.
        let mixed = calc(CalcSum::new(Percentage::new(50.0)).plus(Angle::make_degrees(5.0)));
        assert_eq!(resolve(&mixed, &context, basis), None);
    }

    #[test]
    fn test_resolve_with_basis() {
        let context = LayoutContext::default();
        let mixed = calc(CalcSum::new(Percentage::new(50.0)).plus(Length::make_px(4.0)));
        let basis = PercentageBasis::Length(Length::make_px(400.0));
        assert_eq!(resolve(&mixed, &context, basis).as_deref(), Some("204px"));

        let turn = calc(CalcSum::new(
            CalcProduct::new(Angle::make_degrees(90.0)).times(Number::integer(2)),
        ));
        assert_eq!(
            resolve(&turn, &context, PercentageBasis::None).as_deref(),
            Some("180deg")
        );
    }
}
