//! Integration tests for calc() construction, type resolution, evaluation
//! and serialization.

use wombat_common::warning::has_warned;
use wombat_css::{
    Angle, CalcError, CalcNumberProduct, CalcNumberSum, CalcProduct, CalcSum,
    CalculatedStyleValue, CalculationResult, Frequency, FrequencyUnit, LayoutContext, Length,
    LengthUnit, Number, Percentage, PercentageBasis, ResolvedType, Time, TimeUnit,
};

const EPSILON: f64 = 1e-9;

fn px(value: f64) -> Length {
    Length::make_px(value)
}

fn calc(expression: CalcSum) -> CalculatedStyleValue {
    CalculatedStyleValue::new(expression).expect("valid calc() expression")
}

fn context() -> LayoutContext {
    LayoutContext::with_viewport(800.0, 600.0)
}

fn assert_px(length: Option<Length>, expected: f64) {
    let length = length.expect("expression should resolve to a length");
    assert!(length.is_px(), "expected px, got {length}");
    assert!(
        (length.raw_value() - expected).abs() < EPSILON,
        "expected {expected}px, got {length}"
    );
}

#[test]
fn test_add_lengths() {
    let value = calc(CalcSum::new(px(1.0)).plus(px(1.0)));
    assert_eq!(value.resolved_type(), ResolvedType::Length);
    assert_px(value.resolve_length(&context()), 2.0);
}

#[test]
fn test_add_mixed_absolute_units() {
    // 1in + 1cm = 96px + 37.795...px
    let value = calc(CalcSum::new(Length::new(1.0, LengthUnit::In)).plus(Length::new(
        1.0,
        LengthUnit::Cm,
    )));
    assert_px(value.resolve_length(&context()), 96.0 + 96.0 / 2.54);
}

#[test]
fn test_relative_lengths_use_context() {
    // 2em + 10px + 10vw with 16px font and 800px viewport
    let value = calc(
        CalcSum::new(Length::new(2.0, LengthUnit::Em))
            .plus(px(10.0))
            .plus(Length::new(10.0, LengthUnit::Vw)),
    );
    assert_px(value.resolve_length(&context()), 32.0 + 10.0 + 80.0);
}

#[test]
fn test_percentage_plus_percentage() {
    let value = calc(CalcSum::new(Percentage::new(50.0)).plus(Percentage::new(50.0)));
    assert_eq!(value.resolved_type(), ResolvedType::Percentage);
    assert_eq!(value.resolve_percentage(), Some(Percentage::new(100.0)));
    // No basis is needed, so the plain result stays a percentage.
    assert_eq!(
        value.resolve(None, &PercentageBasis::None),
        CalculationResult::Percentage(Percentage::new(100.0))
    );
}

#[test]
fn test_percentage_plus_length_against_basis() {
    let value = calc(CalcSum::new(Percentage::new(50.0)).plus(px(10.0)));
    assert_eq!(value.resolved_type(), ResolvedType::Length);
    assert!(value.contains_percentage());
    assert_px(value.resolve_length_percentage(&context(), px(200.0)), 110.0);
}

#[test]
fn test_length_with_percentage_needs_basis() {
    let value = calc(CalcSum::new(px(10.0)).plus(Percentage::new(50.0)));
    assert_eq!(value.resolve_length(&context()), None);
    assert_px(value.resolve_length_percentage(&context(), px(200.0)), 110.0);
}

#[test]
fn test_subtraction_with_percentage_keeps_order() {
    let basis = px(200.0);

    let percentage_first = calc(CalcSum::new(Percentage::new(50.0)).minus(px(10.0)));
    assert_px(percentage_first.resolve_length_percentage(&context(), basis), 90.0);

    let length_first = calc(CalcSum::new(px(10.0)).minus(Percentage::new(50.0)));
    assert_px(length_first.resolve_length_percentage(&context(), basis), -90.0);
}

#[test]
fn test_sum_chain_evaluates_left_to_right() {
    // (10px - 3px) - 2px, not 10px - (3px - 2px)
    let value = calc(CalcSum::new(px(10.0)).minus(px(3.0)).minus(px(2.0)));
    assert_eq!(value.to_string(), "calc(10px - 3px - 2px)");
    assert_px(value.resolve_length(&context()), 5.0);
}

#[test]
fn test_product_chain_evaluates_left_to_right() {
    // (100px / 2) / 5, not 100px / (2 / 5)
    let value = calc(CalcSum::new(
        CalcProduct::new(px(100.0))
            .divided_by(Number::integer(2))
            .divided_by(Number::integer(5)),
    ));
    assert_eq!(value.to_string(), "calc(100px / 2 / 5)");
    assert_px(value.resolve_length(&context()), 10.0);
}

#[test]
fn test_nested_number_chain_evaluates_left_to_right() {
    // 1px * ((8 / 2) / 2)
    let quotient = CalcSum::new(
        CalcProduct::new(Number::integer(8))
            .divided_by(Number::integer(2))
            .divided_by(Number::integer(2)),
    );
    let value = calc(CalcSum::new(CalcProduct::new(px(1.0)).times(quotient)));
    assert_eq!(value.to_string(), "calc(1px * (8 / 2 / 2))");
    assert_px(value.resolve_length(&context()), 2.0);
}

#[test]
fn test_number_grammar_chains_evaluate_left_to_right() {
    let difference = CalcNumberSum::new(Number::integer(10))
        .minus(Number::integer(3))
        .minus(Number::integer(2));
    assert_eq!(difference.resolve(), Number::integer(5));

    // 16px / ((8 / 2) / 2)
    let divisor = CalcNumberProduct::new(Number::integer(8))
        .divided_by(Number::integer(2))
        .divided_by(Number::integer(2));
    assert!((divisor.resolve().value() - 2.0).abs() < EPSILON);
    let divisor = CalcNumberSum::new(divisor);
    let value = calc(CalcSum::new(CalcProduct::new(px(16.0)).divided_by(divisor)));
    assert_px(value.resolve_length(&context()), 8.0);
}

#[test]
fn test_subtraction_is_not_commutative() {
    let forward = calc(CalcSum::new(px(10.0)).minus(px(5.0)));
    let backward = calc(CalcSum::new(px(5.0)).minus(px(10.0)));

    assert_px(forward.resolve_length(&context()), 5.0);
    assert_px(backward.resolve_length(&context()), -5.0);
    assert_ne!(forward, backward);
}

#[test]
fn test_integer_product() {
    let value = calc(CalcSum::new(
        CalcProduct::new(Number::integer(2)).times(Number::integer(3)),
    ));
    assert_eq!(value.resolved_type(), ResolvedType::Integer);
    assert_eq!(value.resolve_number(), Some(6.0));
    assert_eq!(value.resolve_integer(), Some(6));

    let result = value.resolve(None, &PercentageBasis::None);
    assert_eq!(result.number(), Some(Number::integer(6)));
}

#[test]
fn test_number_times_integer_is_number() {
    let value = calc(CalcSum::new(
        CalcProduct::new(Number::number(1.5)).times(Number::integer(2)),
    ));
    assert_eq!(value.resolved_type(), ResolvedType::Number);
    assert_eq!(value.resolve_number(), Some(3.0));
}

#[test]
fn test_integer_division_is_number_and_rounds() {
    let value = calc(CalcSum::new(
        CalcProduct::new(Number::integer(7)).divided_by(Number::integer(2)),
    ));
    assert_eq!(value.resolved_type(), ResolvedType::Number);
    assert_eq!(value.resolve_number(), Some(3.5));
    assert_eq!(value.resolve_integer(), Some(4));
}

#[test]
fn test_number_times_length() {
    let value = calc(CalcSum::new(
        CalcProduct::new(Number::integer(3)).times(Length::new(2.0, LengthUnit::Em)),
    ));
    assert_eq!(value.resolved_type(), ResolvedType::Length);
    assert_px(value.resolve_length(&context()), 96.0);
}

#[test]
fn test_invalid_type_combination() {
    let expression = CalcSum::new(px(1.0)).plus(Angle::make_degrees(1.0));
    assert_eq!(expression.resolved_type(), None);

    let error = CalculatedStyleValue::new(expression).unwrap_err();
    assert_eq!(
        error,
        CalcError::InvalidTypeCombination {
            expression: "calc(1px + 1deg)".to_string()
        }
    );
    assert!(has_warned(
        "CSS",
        "invalid type combination in calc(1px + 1deg)"
    ));
}

#[test]
fn test_length_times_length_is_invalid() {
    let expression = CalcSum::new(CalcProduct::new(px(1.0)).times(px(2.0)));
    assert!(matches!(
        CalculatedStyleValue::new(expression),
        Err(CalcError::InvalidTypeCombination { .. })
    ));
}

#[test]
fn test_number_plus_percentage_is_invalid() {
    let expression = CalcSum::new(Number::integer(1)).plus(Percentage::new(10.0));
    assert_eq!(expression.resolved_type(), None);
}

#[test]
fn test_divide_length() {
    let value = calc(CalcSum::new(
        CalcProduct::new(px(10.0)).divided_by(Number::integer(2)),
    ));
    assert_eq!(value.resolved_type(), ResolvedType::Length);
    assert_px(value.resolve_length(&context()), 5.0);
}

#[test]
fn test_divide_by_number_sum() {
    // 10px / (4 - 2)
    let divisor = CalcNumberSum::new(Number::integer(4)).minus(Number::integer(2));
    assert_eq!(divisor.resolved_type(), Some(ResolvedType::Integer));
    assert_eq!(divisor.resolve(), Number::integer(2));

    let value = calc(CalcSum::new(CalcProduct::new(px(10.0)).divided_by(divisor)));
    assert_px(value.resolve_length(&context()), 5.0);
}

#[test]
fn test_divide_by_zero_is_rejected() {
    let expression = CalcSum::new(CalcProduct::new(px(10.0)).divided_by(Number::integer(0)));
    assert_eq!(expression.resolved_type(), Some(ResolvedType::Length));
    assert_eq!(
        CalculatedStyleValue::new(expression),
        Err(CalcError::DivisionByZero {
            expression: "calc(10px / 0)".to_string()
        })
    );
}

#[test]
fn test_divide_by_nested_zero_is_rejected() {
    // 1 / (2 * 0)
    let divisor = CalcNumberSum::new(
        CalcNumberProduct::new(Number::integer(2)).times(Number::integer(0)),
    );
    let expression = CalcSum::new(CalcProduct::new(Number::integer(1)).divided_by(divisor));
    assert!(matches!(
        CalculatedStyleValue::new(expression),
        Err(CalcError::DivisionByZero { .. })
    ));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_divide_by_zero_at_runtime_panics() {
    let _ = CalculationResult::Length(px(10.0)).divide_by(
        CalculationResult::Number(Number::integer(0)),
        Some(&context()),
    );
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_unvalidated_tree_divide_by_zero_panics() {
    let expression = CalcSum::new(CalcProduct::new(px(10.0)).divided_by(Number::integer(0)));
    let _ = expression.resolve(Some(&context()), &PercentageBasis::None);
}

#[test]
#[should_panic(expected = "without a layout context")]
fn test_length_without_context_panics() {
    let expression = CalcSum::new(px(1.0)).plus(px(1.0));
    let _ = expression.resolve(None, &PercentageBasis::None);
}

#[test]
#[should_panic(expected = "percentage basis")]
fn test_percentage_without_matching_basis_panics() {
    let _ = CalculationResult::Length(px(1.0)).add(
        CalculationResult::Percentage(Percentage::new(50.0)),
        Some(&context()),
        &PercentageBasis::Angle(Angle::make_degrees(90.0)),
    );
}

#[test]
#[should_panic(expected = "neither side")]
fn test_multiply_two_dimensions_panics() {
    let _ = CalculationResult::Length(px(1.0))
        .multiply_by(CalculationResult::Length(px(2.0)), Some(&context()));
}

#[test]
fn test_percentage_subtract_swaps_operands() {
    let basis = PercentageBasis::Length(px(200.0));
    let result = CalculationResult::Percentage(Percentage::new(50.0)).subtract(
        CalculationResult::Length(px(10.0)),
        Some(&context()),
        &basis,
    );
    assert_eq!(result.length(), Some(px(90.0)));
}

#[test]
fn test_number_on_left_of_multiply_swaps() {
    let result = CalculationResult::Number(Number::integer(2)).multiply_by(
        CalculationResult::Angle(Angle::make_degrees(45.0)),
        None,
    );
    assert_eq!(result.angle(), Some(Angle::make_degrees(90.0)));
}

#[test]
fn test_angle_time_frequency() {
    let angle = calc(CalcSum::new(Angle::make_degrees(10.0)).plus(Angle::make_degrees(5.0)));
    assert_eq!(angle.resolve_angle(), Some(Angle::make_degrees(15.0)));
    assert_eq!(angle.resolve_length(&context()), None);
    assert_eq!(angle.resolve_number(), None);

    let time = calc(CalcSum::new(Time::make_seconds(1.0)).plus(Time::new(500.0, TimeUnit::Ms)));
    assert_eq!(time.resolve_time(), Some(Time::make_seconds(1.5)));

    let frequency = calc(
        CalcSum::new(Frequency::new(1.0, FrequencyUnit::Khz))
            .minus(Frequency::make_hertz(200.0)),
    );
    assert_eq!(frequency.resolve_frequency(), Some(Frequency::make_hertz(800.0)));
}

#[test]
fn test_dimension_percentage_accessors() {
    let angle = calc(CalcSum::new(Percentage::new(50.0)).plus(Angle::make_degrees(10.0)));
    assert_eq!(angle.resolve_angle(), None);
    assert_eq!(
        angle.resolve_angle_percentage(Angle::make_degrees(180.0)),
        Some(Angle::make_degrees(100.0))
    );

    let time = calc(CalcSum::new(Percentage::new(25.0)));
    assert_eq!(
        time.resolve_time_percentage(Time::make_seconds(4.0)),
        Some(Time::make_seconds(1.0))
    );

    let frequency = calc(CalcSum::new(Percentage::new(10.0)).plus(Frequency::make_hertz(5.0)));
    assert_eq!(
        frequency.resolve_frequency_percentage(Frequency::make_hertz(100.0)),
        Some(Frequency::make_hertz(15.0))
    );

    let length = calc(CalcSum::new(Percentage::new(25.0)));
    assert_eq!(
        length.resolve_length_percentage(&context(), px(200.0)),
        Some(px(50.0))
    );
}

#[test]
fn test_contains_percentage() {
    let nested = CalcSum::new(px(1.0)).plus(CalcSum::new(Percentage::new(5.0)).plus(px(2.0)));
    assert!(nested.contains_percentage());

    let scaled = CalcSum::new(CalcProduct::new(Number::integer(2)).times(Percentage::new(5.0)));
    assert!(scaled.contains_percentage());

    let plain =
        CalcSum::new(px(1.0)).plus(CalcProduct::new(px(4.0)).divided_by(Number::integer(2)));
    assert!(!plain.contains_percentage());
}

#[test]
fn test_serialization() {
    let value = calc(CalcSum::new(px(1.0)).plus(px(2.0)));
    assert_eq!(value.to_string(), "calc(1px + 2px)");

    let nested = calc(
        CalcSum::new(
            CalcProduct::new(CalcSum::new(px(1.0)).plus(Percentage::new(2.0)))
                .times(Number::integer(2)),
        )
        .minus(
            CalcProduct::new(Length::new(3.0, LengthUnit::Em))
                .divided_by(CalcNumberSum::new(Number::integer(1)).plus(Number::integer(1))),
        ),
    );
    assert_eq!(nested.to_string(), "calc((1px + 2%) * 2 - 3em / (1 + 1))");
    // (1px + 2px) * 2 - 48px / 2
    assert_px(
        nested.resolve_length_percentage(&LayoutContext::default(), px(100.0)),
        -18.0,
    );
}

#[test]
fn test_json_round_trip_resolves_the_same() {
    let value = calc(CalcSum::new(px(1.0)).plus(px(2.0)));
    let json = serde_json::to_string(&value).unwrap();
    let restored: CalculatedStyleValue = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, value);
    assert_eq!(restored.to_string(), value.to_string());
    assert_eq!(
        restored.resolve_length(&context()),
        value.resolve_length(&context())
    );
}

#[test]
fn test_json_rejects_invalid_tree() {
    let invalid = CalcSum::new(px(1.0)).plus(Time::make_seconds(1.0));
    let json = serde_json::to_string(&invalid).unwrap();
    let result: Result<CalculatedStyleValue, _> = serde_json::from_str(&json);
    assert!(result.is_err());
}

#[test]
fn test_equality_is_by_serialization() {
    let a = calc(CalcSum::new(px(1.0)).plus(px(2.0)));
    let b = calc(CalcSum::new(CalcProduct::new(px(1.0))).plus(CalcProduct::new(px(2.0))));
    let c = calc(CalcSum::new(px(2.0)).plus(px(1.0)));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_percentage_basis_from_str() {
    assert_eq!(
        "200px".parse::<PercentageBasis>(),
        Ok(PercentageBasis::Length(px(200.0)))
    );
    assert_eq!(
        "90deg".parse::<PercentageBasis>(),
        Ok(PercentageBasis::Angle(Angle::make_degrees(90.0)))
    );
    assert_eq!(
        "2s".parse::<PercentageBasis>(),
        Ok(PercentageBasis::Time(Time::make_seconds(2.0)))
    );
    assert_eq!(
        "1khz".parse::<PercentageBasis>(),
        Ok(PercentageBasis::Frequency(Frequency::new(1.0, FrequencyUnit::Khz)))
    );
    assert!("3foo".parse::<PercentageBasis>().is_err());
}
