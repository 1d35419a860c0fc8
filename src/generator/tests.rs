use crate::expression::{Value, ValueExpr};
use crate::generator::{build_expressions, combine_binary, wrap_unaries};
use crate::rules::Rules;

#[test]
fn test_single_digit_wraps_unaries() {
    let exprs = build_expressions(&[1], &Rules::default());
    let texts: Vec<&str> = exprs.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "|1|", "(1)!", "(|1|)!"]);
}

#[test]
fn test_single_digit_without_wrapping() {
    let rules = Rules {
        enable_unary_wrapping: false,
        ..Rules::default()
    };
    let exprs = build_expressions(&[7], &rules);
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].text, "7");
    assert_eq!(exprs[0].value, Value::Int(7));
}

#[test]
fn test_combine_binary_default_rules() {
    let one = ValueExpr::literal(1);
    let two = ValueExpr::literal(2);
    let combos = combine_binary(&one, &two, &Rules::default());
    let texts: Vec<&str> = combos.iter().map(|e| e.text.as_str()).collect();
    // mod is off by default; division never exists
    assert_eq!(texts, vec!["(1 + 2)", "(1 - 2)", "(1 × 2)", "(1 ^ 2)"]);
    assert_eq!(combos[0].value, Value::Int(3));
    assert_eq!(combos[1].value, Value::Int(-1));
    assert_eq!(combos[2].value, Value::Int(2));
    assert_eq!(combos[3].value, Value::Int(1));
}

#[test]
fn test_combine_binary_mod_skips_zero_divisor() {
    let rules = Rules {
        allow_mod: true,
        ..Rules::default()
    };
    let seven = ValueExpr::literal(7);
    let zero = ValueExpr::literal(0);
    let texts: Vec<String> = combine_binary(&seven, &zero, &rules)
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert!(!texts.iter().any(|t| t.contains('%')));

    let three = ValueExpr::literal(3);
    let texts: Vec<String> = combine_binary(&seven, &three, &rules)
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert!(texts.contains(&"(7 % 3)".to_string()));
}

#[test]
fn test_combine_binary_pow_respects_exponent_bounds() {
    // default bounds are [0, 6]
    let two = ValueExpr::literal(2);
    let nine = ValueExpr::literal(9);
    let texts: Vec<String> = combine_binary(&two, &nine, &Rules::default())
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert!(!texts.contains(&"(2 ^ 9)".to_string()));

    let six = ValueExpr::literal(6);
    let texts: Vec<String> = combine_binary(&two, &six, &Rules::default())
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert!(texts.contains(&"(2 ^ 6)".to_string()));
}

#[test]
fn test_wrap_respects_factorial_bound() {
    let rules = Rules {
        max_factorial_arg: 3,
        ..Rules::default()
    };
    let exprs = wrap_unaries(ValueExpr::literal(4), &rules);
    assert!(exprs.iter().all(|e| !e.text.contains('!')));
}

#[test]
fn test_wrap_applies_factorial_to_abs_results() {
    let rules = Rules::default();
    let negative = ValueExpr::new(Value::Int(-3), "(1 - 4)".to_string());
    let texts: Vec<String> = wrap_unaries(negative, &rules)
        .into_iter()
        .map(|e| e.text)
        .collect();
    // factorial of the bare value is pruned (negative), but the abs variant
    // is eligible
    assert!(texts.contains(&"(1 - 4)".to_string()));
    assert!(texts.contains(&"|(1 - 4)|".to_string()));
    assert!(texts.contains(&"(|(1 - 4)|)!".to_string()));
    assert!(!texts.contains(&"((1 - 4))!".to_string()));
}

#[test]
fn test_build_two_digits_contains_expected_forms() {
    let exprs = build_expressions(&[1, 2], &Rules::default());
    let texts: Vec<&str> = exprs.iter().map(|e| e.text.as_str()).collect();
    assert!(texts.contains(&"(1 + 2)"));
    assert!(texts.contains(&"(1 × 2)"));
    assert!(texts.contains(&"|(1 - 2)|"));
    assert!(texts.contains(&"((1 + 2))!"));
}

#[test]
fn test_build_never_produces_division() {
    let exprs = build_expressions(&[1, 2, 3], &Rules::default());
    assert!(
        exprs
            .iter()
            .all(|e| !e.text.contains('÷') && !e.text.contains('/'))
    );
}

#[test]
fn test_build_preserves_digit_order() {
    let exprs = build_expressions(&[1, 2, 3], &Rules::default());
    for e in &exprs {
        let leaves: String = e.text.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(leaves, "123", "digit leaves out of order in '{}'", e.text);
    }
}

#[test]
fn test_build_deduplicates() {
    let exprs = build_expressions(&[2, 2], &Rules::default());
    let mut keys: Vec<_> = exprs.iter().map(|e| e.dedup_key()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_build_single_operator_only() {
    let rules = Rules {
        allow_sub: false,
        allow_mul: false,
        allow_pow: false,
        allow_abs: false,
        allow_fact: false,
        enable_unary_wrapping: false,
        ..Rules::default()
    };
    let exprs = build_expressions(&[1, 2], &rules);
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].text, "(1 + 2)");
    assert_eq!(exprs[0].value, Value::Int(3));
}

#[test]
fn test_build_empty_input_is_empty() {
    assert!(build_expressions(&[], &Rules::default()).is_empty());
}
