use param_engine::*;
use param_types::*;

fn three_params() -> Signature {
    Signature::new()
        .with(ParameterDecl::integer("a"))
        .with(ParameterDecl::real("b"))
        .with(ParameterDecl::choice("c", ["c1", "c2"]))
}

fn assert_invalid(signature: Signature) -> DeclarationError {
    match reflect(&signature) {
        Ok(params) => panic!("expected declaration error, got {params:?}"),
        Err(e) => e,
    }
}

fn single(decl: ParameterDecl) -> Signature {
    Signature::new().with(decl)
}

// ── Successful reflection ────────────────────────────────────────────────

#[test]
fn no_params() {
    assert_eq!(reflect(&Signature::new()).unwrap(), Vec::<Parameter>::new());
}

#[test]
fn three_params_in_declaration_order() {
    let params = reflect(&three_params()).unwrap();
    assert_eq!(
        params,
        vec![
            Parameter::from(NumericParameter::integer("a")),
            Parameter::from(NumericParameter::real("b")),
            Parameter::from(ChoiceParameter::new("c", ["c1", "c2"])),
        ]
    );
    assert!(params.iter().all(|p| !p.has_default()));
}

#[test]
fn three_params_with_default() {
    let signature = Signature::new()
        .with(ParameterDecl::integer("a").with_default(3))
        .with(ParameterDecl::real("b").with_default(4.0))
        .with(ParameterDecl::choice("c", ["c1", "c2"]).with_default("c2"));

    assert_eq!(
        reflect(&signature).unwrap(),
        vec![
            Parameter::from(NumericParameter::integer("a").with_default(Number::Integer(3))),
            Parameter::from(NumericParameter::real("b").with_default(Number::Real(4.0))),
            Parameter::from(ChoiceParameter::new("c", ["c1", "c2"]).with_default("c2")),
        ]
    );
}

#[test]
fn choices_keep_declaration_order() {
    let params = reflect(&single(ParameterDecl::choice("m", ["z", "a", "m"]))).unwrap();
    match &params[0] {
        Parameter::Choice(c) => assert_eq!(c.choices, vec!["z", "a", "m"]),
        other => panic!("expected choice, got {other:?}"),
    }
}

#[test]
fn description_is_carried_over() {
    let params = reflect(&single(
        ParameterDecl::real("length").with_description("Bar length (mm)"),
    ))
    .unwrap();
    assert_eq!(params[0].description(), "Bar length (mm)");
    assert_eq!(params[0].name(), "length");
}

// ── Invalid defaults ─────────────────────────────────────────────────────

#[test]
fn invalid_default_int() {
    let e = assert_invalid(single(ParameterDecl::integer("a").with_default(3.0)));
    assert_eq!(
        e,
        DeclarationError::DefaultKindMismatch {
            parameter: "a".into(),
            expected: NumericKind::Integer,
            default: Literal::Real(3.0),
        }
    );
    assert_invalid(single(ParameterDecl::integer("a").with_default("bla")));
    assert_invalid(single(ParameterDecl::integer("a").with_default(true)));
}

#[test]
fn invalid_default_float() {
    let e = assert_invalid(single(ParameterDecl::real("a").with_default(3)));
    assert!(matches!(
        e,
        DeclarationError::DefaultKindMismatch {
            expected: NumericKind::Real,
            default: Literal::Integer(3),
            ..
        }
    ));
    assert_invalid(single(ParameterDecl::real("a").with_default("bla")));
}

#[test]
fn non_finite_default_float() {
    for default in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let e = assert_invalid(single(ParameterDecl::real("r").with_default(default)));
        assert!(
            matches!(&e, DeclarationError::NonFiniteDefault { parameter, .. } if parameter == "r"),
            "{e:?}"
        );
        assert!(e.to_string().contains("not a finite number"));
    }
}

#[test]
fn finite_real_default_validates_unchanged() {
    let params = reflect(&single(ParameterDecl::real("r").with_default(f64::MAX))).unwrap();
    let args = validate(&params, &RawValues::from_defaults(&params)).unwrap();
    assert_eq!(args.real("r"), Ok(f64::MAX));
}

#[test]
fn invalid_default_choice() {
    for default in [Literal::Integer(3), Literal::Real(3.0), Literal::from("a")] {
        let e = assert_invalid(single(
            ParameterDecl::choice("a", ["x", "y"]).with_default(default.clone()),
        ));
        assert_eq!(
            e,
            DeclarationError::DefaultNotAChoice {
                parameter: "a".into(),
                default,
                choices: vec!["x".into(), "y".into()],
            }
        );
    }
}

// ── Unsupported annotations ──────────────────────────────────────────────

#[test]
fn unrecognized_annotations() {
    let e = assert_invalid(single(ParameterDecl::new("flag", Annotation::Other("bool".into()))));
    assert_eq!(
        e,
        DeclarationError::UnrecognizedType {
            parameter: "flag".into(),
            annotation: "bool".into(),
        }
    );
    assert_eq!(e.to_string(), "flag: unknown parameter type: bool");

    assert!(matches!(
        assert_invalid(single(ParameterDecl::new("x", Annotation::Missing))),
        DeclarationError::UnrecognizedType { .. }
    ));
    assert!(matches!(
        assert_invalid(single(ParameterDecl::choice("x", Vec::<String>::new()))),
        DeclarationError::UnrecognizedType { .. }
    ));
    assert!(matches!(
        assert_invalid(single(ParameterDecl::choice("x", ["a", "a"]))),
        DeclarationError::UnrecognizedType { .. }
    ));
}

#[test]
fn names_must_be_unique_identifiers() {
    let e = assert_invalid(
        Signature::new()
            .with(ParameterDecl::integer("a"))
            .with(ParameterDecl::real("a")),
    );
    assert_eq!(e, DeclarationError::DuplicateName { parameter: "a".into() });

    let e = assert_invalid(single(ParameterDecl::integer("outer-diameter")));
    assert_eq!(e.parameter(), "outer-diameter");
}

#[test]
fn first_declared_invalid_parameter_is_reported() {
    let signature = Signature::new()
        .with(ParameterDecl::integer("ok"))
        .with(ParameterDecl::new("first", Annotation::Other("list[int]".into())))
        .with(ParameterDecl::real("second").with_default(1));
    assert_eq!(assert_invalid(signature).parameter(), "first");
}
