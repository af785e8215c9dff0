use dbal_tests::{access_denied_errors, unclassified_errors};
use exception::{
    ERROR_CODES, ErrorCategory, ExceptionConverter, InformixExceptionConverter, NativeError, Query,
    categorize, classify,
};

#[test]
fn test_scenarios() {
    let cases = [
        ("-239", "unique constraint violated", ErrorCategory::UniqueConstraintViolation),
        ("-908", "whatever the client says", ErrorCategory::ConnectionFailure),
        ("999999", "Cannot connect to database server foo", ErrorCategory::ConnectionFailure),
        ("999999", "something else", ErrorCategory::Generic),
    ];

    for (code, message, expected) in cases {
        assert_eq!(categorize(code, message), expected, "{code} / {message}");
    }
}

#[test]
fn test_table_codes_win_over_messages() {
    for (code, expected) in ERROR_CODES {
        for denied in access_denied_errors() {
            let converted = classify(NativeError::new(*code, denied.message), None);
            assert_eq!(converted.category(), *expected);
        }
    }
}

#[test]
fn test_access_denied_without_known_code() {
    for native in access_denied_errors() {
        let converted = classify(native.clone(), None);
        assert_eq!(converted.category(), ErrorCategory::ConnectionFailure, "{native:?}");
        assert_eq!(converted.original(), &native);
    }
}

#[test]
fn test_everything_else_is_generic() {
    for native in unclassified_errors() {
        assert_eq!(classify(native, None).category(), ErrorCategory::Generic);
    }
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter: &'static dyn ExceptionConverter = &InformixExceptionConverter;

    let handles: Vec<_> = ["-206", "-310", "-201", "12345"]
        .into_iter()
        .map(|code| {
            std::thread::spawn(move || {
                converter
                    .convert(NativeError::new(code, "boom"), Some(Query::new("SELECT 1")))
                    .category()
            })
        })
        .collect();

    let categories: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        categories,
        vec![
            ErrorCategory::TableNotFound,
            ErrorCategory::TableExists,
            ErrorCategory::SyntaxError,
            ErrorCategory::Generic,
        ]
    );
}
