//! Operation contract tests for the calculator library.

use reckon::{Calculator, CalculatorError, OperationKind};

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_add_positive_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.add(5.0, 3.0), 8.0);
    assert_eq!(calc.add(10.0, 20.0), 30.0);
    assert_eq!(calc.add(0.0, 5.0), 5.0);
}

#[test]
fn test_add_negative_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.add(-5.0, 3.0), -2.0);
    assert_eq!(calc.add(-10.0, -20.0), -30.0);
    assert_eq!(calc.add(5.0, -3.0), 2.0);
}

#[test]
fn test_add_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.add(2.5, 3.7), 6.2);
    assert_approx(calc.add(-1.5, 2.5), 1.0);
}

#[test]
fn test_subtract_positive_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.subtract(10.0, 3.0), 7.0);
    assert_eq!(calc.subtract(20.0, 5.0), 15.0);
    assert_eq!(calc.subtract(5.0, 5.0), 0.0);
}

#[test]
fn test_subtract_negative_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.subtract(-5.0, 3.0), -8.0);
    assert_eq!(calc.subtract(5.0, -3.0), 8.0);
    assert_eq!(calc.subtract(-10.0, -5.0), -5.0);
}

#[test]
fn test_subtract_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.subtract(5.5, 2.3), 3.2);
    assert_approx(calc.subtract(-1.5, 2.5), -4.0);
}

#[test]
fn test_multiply_positive_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.multiply(5.0, 3.0), 15.0);
    assert_eq!(calc.multiply(10.0, 4.0), 40.0);
    assert_eq!(calc.multiply(1.0, 7.0), 7.0);
}

#[test]
fn test_multiply_with_zero() {
    let mut calc = Calculator::new();
    assert_eq!(calc.multiply(5.0, 0.0), 0.0);
    assert_eq!(calc.multiply(0.0, 10.0), 0.0);
    assert_eq!(calc.multiply(0.0, 0.0), 0.0);
}

#[test]
fn test_multiply_negative_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.multiply(-5.0, 3.0), -15.0);
    assert_eq!(calc.multiply(-4.0, -2.0), 8.0);
    assert_eq!(calc.multiply(6.0, -3.0), -18.0);
}

#[test]
fn test_multiply_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.multiply(2.5, 4.0), 10.0);
    assert_approx(calc.multiply(-1.5, 2.0), -3.0);
}

#[test]
fn test_divide_positive_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.divide(10.0, 2.0).unwrap(), 5.0);
    assert_eq!(calc.divide(15.0, 3.0).unwrap(), 5.0);
    assert_eq!(calc.divide(7.0, 2.0).unwrap(), 3.5);
}

#[test]
fn test_divide_negative_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.divide(-10.0, 2.0).unwrap(), -5.0);
    assert_eq!(calc.divide(10.0, -2.0).unwrap(), -5.0);
    assert_eq!(calc.divide(-10.0, -2.0).unwrap(), 5.0);
}

#[test]
fn test_divide_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.divide(7.5, 2.5).unwrap(), 3.0);
    assert_approx(calc.divide(-6.0, 3.0).unwrap(), -2.0);
}

#[test]
fn test_divide_by_zero() {
    let mut calc = Calculator::new();
    assert_eq!(calc.divide(10.0, 0.0), Err(CalculatorError::DivisionByZero));
    assert_eq!(calc.divide(-5.0, 0.0), Err(CalculatorError::DivisionByZero));
}

#[test]
fn test_power_positive_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.power(2.0, 3.0).unwrap(), 8.0);
    assert_eq!(calc.power(5.0, 2.0).unwrap(), 25.0);
    assert_eq!(calc.power(10.0, 0.0).unwrap(), 1.0);
    assert_eq!(calc.power(2.0, 10.0).unwrap(), 1024.0);
    assert_eq!(calc.power(5.0, 0.0).unwrap(), 1.0);
}

#[test]
fn test_power_negative_base() {
    let mut calc = Calculator::new();
    assert_eq!(calc.power(-2.0, 3.0).unwrap(), -8.0);
    assert_eq!(calc.power(-3.0, 2.0).unwrap(), 9.0);
    assert_eq!(calc.power(-5.0, 0.0).unwrap(), 1.0);
}

#[test]
fn test_power_negative_exponent() {
    let mut calc = Calculator::new();
    assert_approx(calc.power(2.0, -2.0).unwrap(), 0.25);
    assert_approx(calc.power(4.0, -1.0).unwrap(), 0.25);
    assert_approx(calc.power(10.0, -3.0).unwrap(), 0.001);
}

#[test]
fn test_power_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.power(2.5, 2.0).unwrap(), 6.25);
    assert_approx(calc.power(4.0, 0.5).unwrap(), 2.0);
}

#[test]
fn test_power_domain_errors() {
    let mut calc = Calculator::new();
    assert!(matches!(
        calc.power(-2.0, 0.5),
        Err(CalculatorError::InvalidOperation { .. })
    ));
    assert!(matches!(
        calc.power(0.0, -2.0),
        Err(CalculatorError::InvalidOperation { .. })
    ));
}

#[test]
fn test_power_non_finite_exponents() {
    // Domain validation is for finite inputs; inf/NaN keep IEEE results
    let mut calc = Calculator::new();
    assert_eq!(calc.power(-2.0, f64::INFINITY).unwrap(), f64::INFINITY);
    assert!(calc.power(-2.0, f64::NAN).unwrap().is_nan());
    assert_eq!(calc.power(0.0, f64::NEG_INFINITY).unwrap(), f64::INFINITY);
}

#[test]
fn test_square_root_positive_numbers() {
    let mut calc = Calculator::new();
    assert_approx(calc.square_root(4.0).unwrap(), 2.0);
    assert_approx(calc.square_root(9.0).unwrap(), 3.0);
    assert_approx(calc.square_root(25.0).unwrap(), 5.0);
    assert_approx(calc.square_root(0.0).unwrap(), 0.0);
}

#[test]
fn test_square_root_floats() {
    let mut calc = Calculator::new();
    assert_approx(calc.square_root(6.25).unwrap(), 2.5);
    assert_approx(calc.square_root(2.25).unwrap(), 1.5);
}

#[test]
fn test_square_root_negative_number() {
    let mut calc = Calculator::new();
    assert!(matches!(
        calc.square_root(-4.0),
        Err(CalculatorError::InvalidOperation { .. })
    ));
    assert!(matches!(
        calc.square_root(-1.0),
        Err(CalculatorError::InvalidOperation { .. })
    ));
}

#[test]
fn test_addition_is_commutative() {
    let mut calc = Calculator::new();
    for (a, b) in [(5.0, 3.0), (-2.5, 7.25), (0.0, 9.0)] {
        assert_eq!(calc.add(a, b), calc.add(b, a));
    }
}

#[test]
fn test_subtraction_is_antisymmetric() {
    let mut calc = Calculator::new();
    for (a, b) in [(10.0, 4.0), (-2.5, 7.25), (5.0, 5.0)] {
        assert_eq!(calc.subtract(a, b), -calc.subtract(b, a));
    }
}

#[test]
fn test_divide_multiply_roundtrip() {
    let mut calc = Calculator::new();
    for (a, b) in [(10.0, 3.0), (7.5, 2.5), (-9.0, 4.0)] {
        let quotient = calc.divide(a, b).unwrap();
        assert_approx(calc.multiply(quotient, b), a);
    }
}

#[test]
fn test_complex_calculation() {
    // (5 + 3) * 2 = 16
    let mut calc = Calculator::new();
    let sum = calc.add(5.0, 3.0);
    assert_eq!(calc.multiply(sum, 2.0), 16.0);
}

#[test]
fn test_calculation_chain() {
    // Start with 10, add 5, subtract 3, multiply by 2, divide by 4
    let mut calc = Calculator::new();
    let mut result = 10.0;
    result = calc.add(result, 5.0);
    result = calc.subtract(result, 3.0);
    result = calc.multiply(result, 2.0);
    result = calc.divide(result, 4.0).unwrap();
    assert_eq!(result, 6.0);
    assert_eq!(calc.history().len(), 4);
}

#[test]
fn test_power_and_square_root() {
    // 3^2 then square root brings us back to 3
    let mut calc = Calculator::new();
    let squared = calc.power(3.0, 2.0).unwrap();
    assert_approx(calc.square_root(squared).unwrap(), 3.0);
}

#[test]
fn test_history_grows_by_one_per_successful_call() {
    let mut calc = Calculator::new();

    calc.add(5.0, 3.0);
    assert_eq!(calc.history().len(), 1);
    calc.subtract(10.0, 4.0);
    assert_eq!(calc.history().len(), 2);
    calc.multiply(6.0, 7.0);
    assert_eq!(calc.history().len(), 3);
    calc.divide(15.0, 3.0).unwrap();
    assert_eq!(calc.history().len(), 4);
    calc.power(2.0, 8.0).unwrap();
    assert_eq!(calc.history().len(), 5);
    calc.square_root(25.0).unwrap();
    assert_eq!(calc.history().len(), 6);
}

#[test]
fn test_failed_calls_do_not_append() {
    let mut calc = Calculator::new();
    calc.add(1.0, 2.0);

    let _ = calc.divide(1.0, 0.0);
    let _ = calc.square_root(-1.0);
    let _ = calc.power(-2.0, 0.5);

    assert_eq!(calc.history().len(), 1);
}

#[test]
fn test_history_keeps_call_order() {
    let mut calc = Calculator::new();
    calc.add(5.0, 3.0);
    calc.divide(15.0, 3.0).unwrap();
    calc.square_root(25.0).unwrap();

    let kinds: Vec<OperationKind> = calc.history().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OperationKind::Add,
            OperationKind::Divide,
            OperationKind::SquareRoot
        ]
    );

    let expressions: Vec<String> = calc.history().iter().map(|r| r.expression()).collect();
    assert_eq!(expressions, vec!["5 + 3", "15 / 3", "√25"]);
}
