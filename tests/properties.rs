use minicalc::{config::Config, run};
use proptest::prelude::*;

/// Expressions over literals and the variable `x`, which the generated
/// programs always bind first.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()), Just("x".to_string())];
    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(vec!["+", "-", "*"]), inner.clone())
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        (prop::sample::select(vec!["-", "+", "--"]), inner.clone())
                            .prop_map(|(sign, e)| format!("{sign}({e})")),
                        inner.prop_map(|e| format!("({e})"))]
        })
}

fn program() -> impl Strategy<Value = String> {
    (0u32..1000, prop::collection::vec(expression(), 1..5)).prop_map(|(seed, exprs)| {
        let mut src = format!("x = {seed};\n");
        for (i, e) in exprs.iter().enumerate() {
            src.push_str(&format!("v{i} = {e};\nx = x + v{i};\n"));
        }
        src
    })
}

proptest! {
    #[test]
    fn runs_are_a_pure_function_of_the_text(src in program()) {
        let config = Config::default();
        let first = run(&src, &config);
        let second = run(&src, &config);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn layout_does_not_change_bindings(src in program()) {
        let config = Config::default();
        let compact = src.replace(' ', "");
        let spread = src.replace(' ', " \t\n  ");
        prop_assert_eq!(run(&compact, &config), run(&src, &config));
        prop_assert_eq!(run(&spread, &config).ok(), run(&src, &config).ok());
    }

    #[test]
    fn only_the_count_of_minus_signs_matters(signs in prop::collection::vec(any::<bool>(), 0..12),
                                             n in 0i32..100_000) {
        let prefix: String = signs.iter().map(|&minus| if minus { '-' } else { '+' }).collect();
        let minuses = signs.iter().filter(|&&minus| minus).count();
        let expected = if minuses % 2 == 1 { -n } else { n };

        let symbols = run(&format!("y = {prefix}{n};"), &Config::default()).unwrap();
        prop_assert_eq!(symbols.get("y"), Some(expected));
    }

    #[test]
    fn subtraction_folds_to_the_left(a in 0i32..10_000, b in 0i32..10_000, c in 0i32..10_000) {
        let symbols = run(&format!("r = {a} - {b} - {c};"), &Config::default()).unwrap();
        prop_assert_eq!(symbols.get("r"), Some(a - b - c));
    }

    #[test]
    fn multiplication_binds_tighter(a in 0i32..1000, b in 0i32..1000, c in 0i32..1000) {
        let symbols = run(&format!("r = {a} + {b} * {c};"), &Config::default()).unwrap();
        prop_assert_eq!(symbols.get("r"), Some(a + b * c));
    }
}
