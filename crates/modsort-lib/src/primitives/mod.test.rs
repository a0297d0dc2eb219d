use super::*;

// =============================================================================
// VALUE ENUM PARSING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            // Every variant has a primary name that parses back to itself
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");
                let primary_name = possible_value.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Round-trip should preserve variant '{}'",
                    primary_name
                );
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *expected,
                    "Wrong variant for input '{}', expected {:?}",
                    input,
                    expected
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(OutputFormat, test_output_format_completeness);
test_enum_completeness!(ColorChoice, test_color_choice_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("fatal", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("pretty", LogFormat::Pretty),
    ]
);

test_fromstr_aliases!(
    ColorChoice,
    test_color_choice_aliases,
    [
        ("auto", ColorChoice::Auto),
        ("detect", ColorChoice::Auto),
        ("always", ColorChoice::Always),
        ("force", ColorChoice::Always),
        ("never", ColorChoice::Never),
        ("off", ColorChoice::Never),
    ]
);

#[test]
fn test_unknown_value_is_parse_error() {
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "xml");
            assert_eq!(reason, "invalid output format");
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

// =============================================================================
// BEHAVIOR
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_log_level_filter_directives() {
    assert_eq!(LogLevel::Error.as_filter_directive(), "error");
    assert_eq!(LogLevel::Warning.as_filter_directive(), "warn");
    assert_eq!(LogLevel::Trace.as_filter_directive(), "trace");
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::Error < LogLevel::Warning);
    assert!(LogLevel::Warning < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Trace);
}

#[test]
fn test_color_choice_resolution() {
    assert!(ColorChoice::Auto.resolve(true));
    assert!(!ColorChoice::Auto.resolve(false));
    assert!(ColorChoice::Always.resolve(false));
    assert!(!ColorChoice::Never.resolve(true));
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::MissingManifest;
    assert_eq!(
        error.to_string(),
        "No manifest given; pass --manifest or set MODSORT_MANIFEST"
    );

    let error = ConfigError::ValidationFailed {
        reason: "synthetic prefix must not be empty".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation failed: synthetic prefix must not be empty"
    );
}
