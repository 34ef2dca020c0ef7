use super::*;

fn js(v: f64) -> String {
    JsNumber(v).to_string()
}

#[test]
fn integral_values_have_no_fraction() {
    assert_eq!(js(255.0), "255");
    assert_eq!(js(1.0), "1");
    assert_eq!(js(-3.0), "-3");
}

#[test]
fn fractions_use_shortest_decimal() {
    assert_eq!(js(127.5), "127.5");
    assert_eq!(js(0.1 + 0.2), "0.30000000000000004");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(js(-0.0), "0");
}

#[test]
fn extreme_magnitudes_use_exponent_form() {
    assert_eq!(js(1e21), "1e+21");
    assert_eq!(js(1.5e-7), "1.5e-7");
    assert_eq!(js(f64::INFINITY), "Infinity");
    assert_eq!(js(f64::NAN), "NaN");
}
