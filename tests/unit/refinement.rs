//! Defining refined types.

use calculus::refined::{is_integral, is_natural, is_non_negative, RefinedType};
use calculus::{BaseType, DefinitionError, NATURAL_NUMBER};

#[test]
fn test_natural_number_with_example_42_defines() {
    let natural = RefinedType::define(is_natural::<i64>, 42, "Natural number").unwrap();
    assert_eq!(natural.base(), BaseType::Int);
    assert_eq!(natural.to_string(), "Natural number");
}

#[test]
fn test_negative_example_is_a_definition_error() {
    let err = RefinedType::define(is_natural::<i64>, -1, "Natural number").unwrap_err();
    assert!(matches!(
        err,
        DefinitionError::ExampleRejected { base: BaseType::Int, .. }
    ));
}

#[test]
fn test_non_integral_example_is_a_definition_error() {
    let err = RefinedType::define(is_natural::<f64>, 2.5, "Natural number").unwrap_err();
    assert_eq!(
        err,
        DefinitionError::ExampleRejected {
            name: "Natural number".to_string(),
            base: BaseType::Float,
            example: "2.5".to_string(),
        }
    );
}

#[test]
fn test_float_natural_accepts_whole_numbers() {
    let natural = RefinedType::define(is_natural::<f64>, 42.0, "Natural number").unwrap();
    assert!(natural.check(&7.0));
    assert!(!natural.check(&7.5));
    assert!(!natural.check(&-7.0));
}

#[test]
fn test_owned_name() {
    let name = format!("{} number", "Natural");
    let natural = RefinedType::define(is_natural::<i64>, 0, name).unwrap();
    assert_eq!(natural.name(), "Natural number");
}

#[test]
fn test_predicates_compose_with_plain_boolean_logic() {
    for x in [-3.5f64, -2.0, 0.0, 1.5, 4.0] {
        assert_eq!(is_natural(&x), is_non_negative(&x) && is_integral(&x));
    }
}

#[test]
fn test_builtin_natural_number() {
    assert!(NATURAL_NUMBER.verify_example().is_ok());
    assert!(NATURAL_NUMBER.check(&0));
    assert!(!NATURAL_NUMBER.check(&-1));
}
