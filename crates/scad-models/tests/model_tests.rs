use param_engine::*;
use param_types::*;
use scad_models::*;

fn raw(pairs: &[(&str, &str)]) -> RawValues {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

fn artifact<'a>(artifacts: &'a [Artifact], name: &str) -> &'a Artifact {
    artifacts
        .iter()
        .find(|a| a.name == name)
        .unwrap_or_else(|| panic!("no artifact named {name}"))
}

// ── Registry ─────────────────────────────────────────────────────────────

#[test]
fn registry_lists_every_model() {
    assert_eq!(names(), vec!["cylinder-row".to_string(), "spacer".to_string()]);
    assert!(find(DEFAULT_MODEL).is_some());
    assert!(find("teapot").is_none());
}

#[test]
fn every_registered_signature_reflects() {
    for generator in registry() {
        let session = Session::from_shared(generator.clone());
        assert!(session.is_ok(), "{}: {:?}", generator.name(), session.err());
    }
}

// ── Cylinder row ─────────────────────────────────────────────────────────

#[test]
fn cylinder_row_descriptors() {
    let session = Session::new(CylinderRow).unwrap();
    assert_eq!(
        session.parameters(),
        &[
            Parameter::from(
                NumericParameter::real("length").with_description("Length of bar and cylinders")
            ),
            Parameter::from(
                NumericParameter::integer("count").with_description("Number of cylinders")
            ),
            Parameter::from(
                ChoiceParameter::new("mode", ["centered", "offset"]).with_description("Placement")
            ),
        ]
    );
    assert!(session.defaults().is_empty());
}

#[test]
fn cylinder_row_centered() {
    let session = Session::new(CylinderRow).unwrap();
    let artifacts = session
        .generate(&raw(&[("length", "30"), ("count", "2"), ("mode", "centered")]))
        .unwrap();

    let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["cube", "cylinder"]);

    assert_eq!(
        artifact(&artifacts, "cube").content,
        "cube([30, 10, 10], center = true);\n"
    );

    let cylinder = &artifact(&artifacts, "cylinder").content;
    assert!(cylinder.starts_with("union() {\n"));
    assert_eq!(cylinder.matches("cylinder(h = 30, d = 10, center = true);").count(), 2);
    assert!(cylinder.contains("translate([0, 1, 0])"));
}

#[test]
fn cylinder_row_offset_moves_both_solids() {
    let session = Session::new(CylinderRow).unwrap();
    let artifacts = session
        .generate(&raw(&[("length", "30"), ("count", "1"), ("mode", "offset")]))
        .unwrap();
    for a in &artifacts {
        assert!(a.content.starts_with("translate(["), "{}: {}", a.name, a.content);
    }
}

#[test]
fn cylinder_row_rejects_zero_count() {
    let session = Session::new(CylinderRow).unwrap();
    let e = session
        .generate(&raw(&[("length", "30"), ("count", "0"), ("mode", "centered")]))
        .unwrap_err();
    assert_eq!(
        e,
        GenerationError::Rejected(DomainRejection::new(["count"], "count must be at least 1"))
    );
}

#[test]
fn cylinder_row_rejects_huge_count() {
    use scad_models::models::cylinder_row::MAX_COUNT;

    let session = Session::new(CylinderRow).unwrap();
    let at_limit = MAX_COUNT.to_string();
    let artifacts = session
        .generate(&raw(&[("length", "30"), ("count", at_limit.as_str()), ("mode", "centered")]))
        .unwrap();
    assert_eq!(artifacts.len(), 2);

    let e = session
        .generate(&raw(&[("length", "30"), ("count", "1000000000"), ("mode", "centered")]))
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DomainRejection);
    assert_eq!(e.parameters(), vec!["count".to_string()]);
    assert!(e.to_string().contains("at most 1000"));
}

#[test]
fn cylinder_row_rejects_non_positive_length() {
    let session = Session::new(CylinderRow).unwrap();
    let e = session
        .generate(&raw(&[("length", "-1"), ("count", "1"), ("mode", "centered")]))
        .unwrap_err();
    assert_eq!(e.parameters(), vec!["length".to_string()]);
}

#[test]
fn cylinder_row_type_errors_come_before_domain_checks() {
    let session = Session::new(CylinderRow).unwrap();
    let e = session
        .generate(&raw(&[("length", "30"), ("count", "0.5"), ("mode", "centered")]))
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidInput);
    assert_eq!(e.parameters(), vec!["count".to_string()]);
}

// ── Spacer ───────────────────────────────────────────────────────────────

#[test]
fn spacer_runs_on_defaults_alone() {
    let session = Session::new(Spacer).unwrap();
    let artifacts = session.generate(&session.defaults()).unwrap();
    assert_eq!(artifacts.len(), 1);
    let content = &artifact(&artifacts, "spacer").content;
    assert!(content.starts_with("difference() {\n"));
    assert!(content.contains("cylinder(h = 5, d = 20, center = true);"));
    assert!(content.contains("cylinder(h = 7, d = 8, center = true);"));
}

#[test]
fn spacer_square_profile() {
    let session = Session::new(Spacer).unwrap();
    let mut input = session.defaults();
    input.insert("profile", "square");
    let artifacts = session.generate(&input).unwrap();
    assert!(artifacts[0].content.contains("cube([20, 20, 5], center = true);"));
}

#[test]
fn spacer_without_bore_is_a_plain_disc() {
    let session = Session::new(Spacer).unwrap();
    let mut input = session.defaults();
    input.insert("inner_diameter", 0_i64);
    let artifacts = session.generate(&input).unwrap();
    assert_eq!(artifacts[0].content, "cylinder(h = 5, d = 20, center = true);\n");
}

#[test]
fn spacer_rejection_names_both_diameters() {
    let session = Session::new(Spacer).unwrap();
    let mut input = session.defaults();
    input.insert("inner_diameter", "25");
    let e = session.generate(&input).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DomainRejection);
    assert_eq!(
        e.parameters(),
        vec!["inner_diameter".to_string(), "outer_diameter".to_string()]
    );
}
