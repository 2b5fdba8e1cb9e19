//! Property tests for reflection and validation.

use proptest::prelude::*;

use param_engine::*;
use param_types::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

fn arb_choices() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 1..5).prop_map(|set| set.into_iter().collect())
}

/// A declaration that always carries a default of the right kind.
fn arb_defaulted_decl(name: String) -> impl Strategy<Value = ParameterDecl> {
    prop_oneof![
        any::<i64>().prop_map({
            let name = name.clone();
            move |v| ParameterDecl::integer(name.clone()).with_default(v)
        }),
        any::<f64>().prop_filter("finite", |v| v.is_finite()).prop_map({
            let name = name.clone();
            move |v| ParameterDecl::real(name.clone()).with_default(v)
        }),
        (arb_choices(), any::<prop::sample::Index>()).prop_map(move |(choices, idx)| {
            let default = idx.get(&choices).clone();
            ParameterDecl::choice(name.clone(), choices).with_default(default)
        }),
    ]
}

fn arb_defaulted_signature() -> impl Strategy<Value = Signature> {
    prop::collection::btree_set(arb_name(), 0..6).prop_flat_map(|names| {
        names
            .into_iter()
            .map(arb_defaulted_decl)
            .collect::<Vec<_>>()
            .prop_map(|decls| decls.into_iter().collect::<Signature>())
    })
}

// ---------------------------------------------------------------------------
// 1. Defaults round-trip through validation unchanged
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn defaults_round_trip(signature in arb_defaulted_signature()) {
        let params = reflect(&signature).unwrap();
        prop_assert_eq!(params.len(), signature.len());

        let args = validate(&params, &RawValues::from_defaults(&params)).unwrap();
        prop_assert_eq!(args.len(), params.len());

        for p in &params {
            let expected = match p {
                Parameter::Numeric(n) => match n.default.unwrap() {
                    Number::Integer(v) => Value::Integer(v),
                    Number::Real(v) => Value::Real(v),
                },
                Parameter::Choice(c) => Value::Choice(c.default.clone().unwrap()),
            };
            prop_assert_eq!(args.get(p.name()), Some(&expected));
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Reflection preserves declaration order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reflection_preserves_order(signature in arb_defaulted_signature()) {
        let params = reflect(&signature).unwrap();
        let declared: Vec<_> = signature.parameters.iter().map(|d| d.name.as_str()).collect();
        let reflected: Vec<_> = params.iter().map(|p| p.name()).collect();
        prop_assert_eq!(declared, reflected);
    }
}

// ---------------------------------------------------------------------------
// 3. Integer text parses back to the same integer
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn integer_text_round_trip(v in any::<i64>()) {
        let params = reflect(&Signature::new().with(ParameterDecl::integer("n"))).unwrap();
        let raw: RawValues = [("n", v.to_string())].into_iter().collect();
        let args = validate(&params, &raw).unwrap();
        prop_assert_eq!(args.integer("n"), Ok(v));
    }
}

// ---------------------------------------------------------------------------
// 4. Text with a fractional part never validates as an integer
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fractional_text_is_not_an_integer(whole in -1000i64..1000, frac in 1u32..1000) {
        let params = reflect(&Signature::new().with(ParameterDecl::integer("n"))).unwrap();
        let raw: RawValues = [("n", format!("{whole}.{frac}"))].into_iter().collect();
        let e = validate(&params, &raw).unwrap_err();
        prop_assert_eq!(e.parameter(), "n");
    }
}

// ---------------------------------------------------------------------------
// 5. Undeclared keys never change the outcome
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn extra_keys_are_ignored(extra in prop::collection::btree_map("[A-Z]{1,4}", ".{0,6}", 0..5)) {
        let params = reflect(
            &Signature::new()
                .with(ParameterDecl::integer("a").with_default(1))
                .with(ParameterDecl::choice("c", ["x", "y"]).with_default("y")),
        )
        .unwrap();
        let mut raw = RawValues::from_defaults(&params);
        let baseline = validate(&params, &raw).unwrap();
        for (k, v) in extra {
            raw.insert(k, v);
        }
        prop_assert_eq!(validate(&params, &raw).unwrap(), baseline);
    }
}
