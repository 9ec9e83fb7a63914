//! Integration tests for unit values, colors and the layout context.

use std::f64::consts::PI;

use wombat_css::{
    Angle, AngleUnit, Color, FontPixelMetrics, Frequency, FrequencyUnit, LayoutContext, Length,
    LengthUnit, Number, NumberType, Percentage, Time, TimeUnit, ValueParseError, Viewport,
};

const EPSILON: f64 = 1e-9;

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < EPSILON
}

// Lengths

#[test]
fn test_parse_length() {
    assert_eq!("10px".parse::<Length>(), Ok(Length::new(10.0, LengthUnit::Px)));
    assert_eq!("-1.5rem".parse::<Length>(), Ok(Length::new(-1.5, LengthUnit::Rem)));
    assert_eq!("2EM".parse::<Length>(), Ok(Length::new(2.0, LengthUnit::Em)));
    assert_eq!("3Q".parse::<Length>(), Ok(Length::new(3.0, LengthUnit::Q)));
    assert_eq!("auto".parse::<Length>(), Ok(Length::make_auto()));
    assert_eq!("0".parse::<Length>(), Ok(Length::make_px(0.0)));
}

#[test]
fn test_parse_length_errors() {
    assert_eq!(
        "10foo".parse::<Length>(),
        Err(ValueParseError::UnknownUnit {
            kind: "length",
            unit: "foo".to_string()
        })
    );
    assert_eq!(
        "px".parse::<Length>(),
        Err(ValueParseError::MissingNumber("px".to_string()))
    );
    // A non-zero length needs a unit.
    assert!("5".parse::<Length>().is_err());
    // 'auto' is a keyword, not a unit.
    assert!("5auto".parse::<Length>().is_err());
}

#[test]
fn test_length_display() {
    assert_eq!(Length::new(1.5, LengthUnit::Rem).to_string(), "1.5rem");
    assert_eq!(Length::new(1.0, LengthUnit::Q).to_string(), "1Q");
    assert_eq!(Length::new(-4.0, LengthUnit::Vmax).to_string(), "-4vmax");
    assert_eq!(Length::make_auto().to_string(), "auto");
}

#[test]
fn test_absolute_lengths_to_px() {
    for (value, unit) in [
        (1.0, LengthUnit::In),
        (2.54, LengthUnit::Cm),
        (25.4, LengthUnit::Mm),
        (101.6, LengthUnit::Q),
        (72.0, LengthUnit::Pt),
        (6.0, LengthUnit::Pc),
        (96.0, LengthUnit::Px),
    ] {
        let length = Length::new(value, unit);
        assert!(length.is_absolute());
        let px = length.absolute_length_to_px().unwrap();
        assert!(approx(px, 96.0), "{length} should be 96px, got {px}");
    }

    assert_eq!(Length::new(1.0, LengthUnit::Em).absolute_length_to_px(), None);
    assert_eq!(Length::make_auto().absolute_length_to_px(), None);
}

#[test]
fn test_relative_lengths_to_px() {
    let context = LayoutContext::with_font_sizes(
        20.0,
        10.0,
        Viewport {
            width: 800.0,
            height: 600.0,
        },
    );

    let cases = [
        (LengthUnit::Em, 40.0),
        (LengthUnit::Rem, 20.0),
        (LengthUnit::Ex, 20.0),
        (LengthUnit::Ch, 20.0),
        (LengthUnit::Lh, 48.0),
        (LengthUnit::Rlh, 24.0),
        (LengthUnit::Vw, 16.0),
        (LengthUnit::Vh, 12.0),
        (LengthUnit::Vmin, 12.0),
        (LengthUnit::Vmax, 16.0),
    ];
    for (unit, expected) in cases {
        let length = Length::new(2.0, unit);
        assert!(length.is_relative());
        let px = length.to_px(&context);
        assert!(approx(px, expected), "{length} should be {expected}px, got {px}");
    }

    assert!(approx(Length::make_auto().to_px(&context), 0.0));
}

#[test]
fn test_explicit_font_metrics() {
    let context = LayoutContext::new(
        16.0,
        16.0,
        FontPixelMetrics {
            x_height: 7.0,
            zero_advance: 9.0,
            line_height: 20.0,
        },
        19.0,
        Viewport::default(),
    );
    assert!(approx(Length::new(1.0, LengthUnit::Ex).to_px(&context), 7.0));
    assert!(approx(Length::new(1.0, LengthUnit::Ch).to_px(&context), 9.0));
    assert!(approx(Length::new(1.0, LengthUnit::Lh).to_px(&context), 20.0));
    assert!(approx(Length::new(1.0, LengthUnit::Rlh).to_px(&context), 19.0));
}

#[test]
fn test_length_percentage_of() {
    let half = Percentage::new(50.0);
    assert_eq!(Length::make_px(200.0).percentage_of(half), Length::make_px(100.0));
    assert_eq!(
        Length::new(4.0, LengthUnit::Em).percentage_of(half),
        Length::new(2.0, LengthUnit::Em)
    );
    assert!(Length::make_auto().percentage_of(half).is_auto());
}

// Other dimensions

#[test]
fn test_angle_to_degrees() {
    assert!(approx(Angle::new(200.0, AngleUnit::Grad).to_degrees(), 180.0));
    assert!(approx(Angle::new(PI, AngleUnit::Rad).to_degrees(), 180.0));
    assert!(approx(Angle::new(0.5, AngleUnit::Turn).to_degrees(), 180.0));
    assert!(approx(Angle::make_degrees(-45.0).to_degrees(), -45.0));
}

#[test]
fn test_angle_parse_and_display() {
    assert_eq!("90deg".parse::<Angle>(), Ok(Angle::make_degrees(90.0)));
    assert_eq!("0.25TURN".parse::<Angle>(), Ok(Angle::new(0.25, AngleUnit::Turn)));
    assert_eq!(Angle::new(1.5, AngleUnit::Rad).to_string(), "1.5rad");
    assert!("90px".parse::<Angle>().is_err());
}

#[test]
fn test_time_and_frequency() {
    assert!(approx(Time::new(1500.0, TimeUnit::Ms).to_seconds(), 1.5));
    assert_eq!("250ms".parse::<Time>(), Ok(Time::new(250.0, TimeUnit::Ms)));
    assert_eq!(Time::make_seconds(2.0).to_string(), "2s");

    assert!(approx(Frequency::new(2.0, FrequencyUnit::Khz).to_hertz(), 2000.0));
    assert_eq!("440Hz".parse::<Frequency>(), Ok(Frequency::make_hertz(440.0)));
    assert_eq!(Frequency::new(2.0, FrequencyUnit::Khz).to_string(), "2khz");
}

#[test]
fn test_dimension_percentage_of() {
    let quarter = Percentage::new(25.0);
    assert_eq!(
        Angle::make_degrees(360.0).percentage_of(quarter),
        Angle::make_degrees(90.0)
    );
    assert_eq!(
        Time::new(400.0, TimeUnit::Ms).percentage_of(quarter),
        Time::new(100.0, TimeUnit::Ms)
    );
    assert_eq!(
        Frequency::make_hertz(100.0).percentage_of(quarter),
        Frequency::make_hertz(25.0)
    );
}

#[test]
fn test_percentage() {
    let percentage: Percentage = "50%".parse().unwrap();
    assert!(approx(percentage.value(), 50.0));
    assert!(approx(percentage.as_fraction(), 0.5));
    assert_eq!(percentage.to_string(), "50%");
    assert!("50".parse::<Percentage>().is_err());
}

// Numbers

#[test]
fn test_parse_number_kind() {
    assert_eq!("3".parse::<Number>(), Ok(Number::integer(3)));
    assert_eq!("-7".parse::<Number>(), Ok(Number::integer(-7)));
    assert_eq!("3.0".parse::<Number>(), Ok(Number::number(3.0)));
    assert_eq!("1e3".parse::<Number>().map(Number::kind), Ok(NumberType::Number));
    assert_eq!(
        "3px".parse::<Number>(),
        Err(ValueParseError::InvalidNumber("3px".to_string()))
    );
}

#[test]
fn test_number_arithmetic_kinds() {
    let two = Number::integer(2);
    let half = Number::number(0.5);

    assert!((two + two).is_integer());
    assert!((two * two).is_integer());
    assert!(!(two + half).is_integer());
    assert!(!(two / two).is_integer());
    assert!((-two).is_integer());
    assert!(approx((two - half).value(), 1.5));
    assert_eq!(Number::number(2.5).integer_value(), 3);
    assert_eq!(Number::number(-2.4).integer_value(), -2);
}

// Colors

#[test]
fn test_color_from_hex() {
    assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(Color::from_hex("#f008"), Some(Color::rgba(255, 0, 0, 0x88)));
    assert_eq!(Color::from_hex("336699"), Some(Color::rgb(0x33, 0x66, 0x99)));
    assert_eq!(
        Color::from_hex("#11223344"),
        Some(Color::rgba(0x11, 0x22, 0x33, 0x44))
    );
    assert_eq!(Color::from_hex("#12345"), None);
    assert_eq!(Color::from_hex("#ggg"), None);
}

#[test]
fn test_color_from_named() {
    assert_eq!(Color::from_named("Red"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(Color::from_named("grey"), Color::from_named("gray"));
    assert_eq!(Color::from_named("teal"), Some(Color::rgb(0, 128, 128)));
    assert_eq!(Color::from_named("transparent"), Some(Color::transparent()));
    assert_eq!(Color::from_named("rebeccapurple"), None);
}

#[test]
fn test_color_serialization() {
    assert_eq!(Color::white().to_hex_string(), "#ffffff");
    assert_eq!(Color::rgba(0, 0, 0, 0x80).to_hex_string(), "#00000080");

    assert_eq!(Color::rgb(255, 0, 0).serialize_srgb(), "rgb(255, 0, 0)");
    assert_eq!(Color::rgba(0, 0, 0, 128).serialize_srgb(), "rgba(0, 0, 0, 0.5)");
    assert_eq!(Color::transparent().serialize_srgb(), "rgba(0, 0, 0, 0)");
    assert_eq!(Color::black().to_string(), "rgb(0, 0, 0)");
}

#[test]
fn test_color_from_str() {
    assert_eq!("#fff".parse::<Color>(), Ok(Color::white()));
    assert_eq!(" navy ".parse::<Color>(), Ok(Color::rgb(0, 0, 128)));
    assert!("notacolor".parse::<Color>().is_err());
}

#[test]
fn test_default_layout_context() {
    let context = LayoutContext::default();
    assert!(approx(context.font_size, 16.0));
    assert!(approx(context.root_font_size, 16.0));
    assert!(approx(context.font_metrics.x_height, 8.0));

    let viewport = LayoutContext::with_viewport(1024.0, 768.0).viewport;
    assert!(approx(viewport.width, 1024.0));
    assert!(approx(viewport.height, 768.0));
}
