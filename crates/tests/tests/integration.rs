//! End-to-end validation scenarios.
//!
//! Each test declares a schema through the harness, populates the record,
//! and asserts on the exact first diagnostic. First-failure identity is a
//! contract: these tests rely on mandatory-first visitation with
//! enumeration-order ties, and on declaration-order alternative and
//! requirement walks.

use vouch_tests::ValidationHarness;

use vouch::{Diagnostic, Directive, FieldName, Ignore};

fn name(s: &str) -> FieldName {
    FieldName::from(s)
}

/// Listing record with four mandatory fields, the shape the engine was
/// built around.
fn listing_harness() -> ValidationHarness {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "externalId",
            Directive::new().with_predicate("non-empty-text").mandatory(),
        )
        .directive(
            "description",
            Directive::new().with_predicate("non-empty-text").mandatory(),
        )
        .directive("rent", Directive::new().with_predicate("flag").mandatory())
        .directive(
            "priceRent",
            Directive::new().with_predicate("positive-number").mandatory(),
        );
    harness
}

#[test]
fn test_plain_success() {
    let mut harness = listing_harness();
    harness
        .set("externalId", "ext-ID")
        .set("description", "A valid description")
        .set("rent", true)
        .set("priceRent", 1.0);

    assert!(harness.evaluate().is_ok());
}

#[test]
fn test_plain_fail_reports_first_mandatory_field() {
    let harness = listing_harness();

    assert_eq!(
        harness.first_failure(),
        Diagnostic::missing_field(name("externalId"), Vec::new())
    );
}

#[test]
fn test_alternative_success() {
    let mut harness = ValidationHarness::new();
    harness.directive(
        "primary",
        Directive::new()
            .with_predicate("non-empty-text")
            .mandatory()
            .alternative("altProp"),
    );
    harness.set("altProp", "ok");

    assert!(harness.evaluate().is_ok());
}

#[test]
fn test_alternative_fail_lists_alternatives() {
    let mut harness = ValidationHarness::new();
    harness.directive(
        "primary",
        Directive::new()
            .with_predicate("non-empty-text")
            .mandatory()
            .alternative("altProp"),
    );

    assert_eq!(
        harness.first_failure(),
        Diagnostic::missing_field(name("primary"), vec![name("altProp")])
    );
}

#[test]
fn test_requirements_success() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("requiredProp"),
        )
        .directive(
            "requiredProp",
            Directive::new().with_predicate("positive-number"),
        );
    harness.set("prop", "x").set("requiredProp", 12.0);

    assert!(harness.evaluate().is_ok());
}

#[test]
fn test_requirements_fail() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("requiredProp"),
        )
        .directive(
            "requiredProp",
            Directive::new().with_predicate("positive-number"),
        );
    harness.set("prop", "x");

    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(name("prop"), name("requiredProp"), None)
    );
}

#[test]
fn test_cyclic_requirements() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("prop1"),
        )
        .directive(
            "prop1",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("prop"),
        );
    harness.set("prop", "require prop1").set("prop1", "require prop");

    assert_eq!(
        harness.first_failure(),
        Diagnostic::cyclic(vec![name("prop"), name("prop1"), name("prop")])
    );
}

#[test]
fn test_conflict_fail_on_first_visited_field() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("conflictProp"),
        )
        .directive(
            "conflictProp",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("prop"),
        );
    harness
        .set("prop", "this prop conflicts with conflictProp")
        .set("conflictProp", "this prop conflicts with prop");

    // Neither field is mandatory, so enumeration order decides: prop is
    // visited first and reports the conflict.
    assert_eq!(
        harness.first_failure(),
        Diagnostic::conflict(name("prop"), name("conflictProp"))
    );
}

#[test]
fn test_conflict_passes_when_other_side_absent() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("conflictProp"),
        )
        .directive(
            "conflictProp",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("prop"),
        );
    harness.set("conflictProp", "valid because prop is not set");

    assert!(harness.evaluate().is_ok());
}

/// Conflicts need not be declared symmetrically; the declaring side still
/// detects them.
#[test]
fn test_conflict_asymmetry() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("conflictProp"),
        )
        .directive(
            "conflictProp",
            Directive::new().with_predicate("non-empty-text"),
        );
    harness.set("prop", "x").set("conflictProp", "y");

    assert_eq!(
        harness.first_failure(),
        Diagnostic::conflict(name("prop"), name("conflictProp"))
    );
}

/// Requirement chains cascade mandatoriness: each newly satisfied link
/// shifts the failure one field further down the chain.
#[test]
fn test_cascade_chain_shifts_failure() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .mandatory()
                .requires("req1"),
        )
        .directive(
            "req1",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("req2"),
        )
        .directive(
            "req2",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("req3"),
        )
        .directive("req3", Directive::new().with_predicate("non-empty-text"));

    harness.set("prop", "this is a mandatory property");
    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(name("prop"), name("req1"), None)
    );

    harness.set("req1", "this is a field required from prop");
    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(
            name("prop"),
            name("req1"),
            Some(Diagnostic::requirements(name("req1"), name("req2"), None)),
        )
    );

    harness.set("req2", "this is a field required from req1");
    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(
            name("prop"),
            name("req1"),
            Some(Diagnostic::requirements(
                name("req1"),
                name("req2"),
                Some(Diagnostic::requirements(name("req2"), name("req3"), None)),
            )),
        )
    );

    harness.set("req3", "this is a field required from req2");
    assert!(harness.evaluate().is_ok());
}

/// A required child never recovers through its own alternatives.
#[test]
fn test_cascade_discards_alternatives() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "aProp1",
            Directive::new()
                .with_predicate("non-empty-text")
                .mandatory()
                .requires("req"),
        )
        .directive(
            "req",
            Directive::new()
                .with_predicate("non-empty-text")
                .alternative("reqAlt"),
        )
        .directive("reqAlt", Directive::new().with_predicate("non-empty-text"));

    harness
        .set("aProp1", "at least this must be set")
        .set("reqAlt", "present, but cascade must not consider me");

    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(name("aProp1"), name("req"), None)
    );
}

/// A requirement on a directive-less field is satisfied by mere presence.
#[test]
fn test_unannotated_requirement_presence() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("plain"),
        )
        .plain_field("plain");
    harness.set("prop", "x");

    assert_eq!(
        harness.first_failure(),
        Diagnostic::requirements(name("prop"), name("plain"), None)
    );

    harness.set("plain", "present");
    assert!(harness.evaluate().is_ok());
}

/* ignore-token behavior */

#[test]
fn test_ignore_requirements_is_monotone() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .requires("requiredProp"),
        )
        .directive(
            "requiredProp",
            Directive::new().with_predicate("positive-number"),
        );
    harness.set("prop", "x");

    assert!(harness.evaluate().is_err());
    assert!(harness.evaluate_ignoring([Ignore::Requirements]).is_ok());
}

#[test]
fn test_ignore_conflicts_is_monotone() {
    let mut harness = ValidationHarness::new();
    harness
        .directive(
            "prop",
            Directive::new()
                .with_predicate("non-empty-text")
                .conflicts_with("conflictProp"),
        )
        .directive(
            "conflictProp",
            Directive::new().with_predicate("non-empty-text"),
        );
    harness.set("prop", "x").set("conflictProp", "y");

    assert!(harness.evaluate().is_err());
    assert!(harness.evaluate_ignoring([Ignore::Conflicts]).is_ok());
}

#[test]
fn test_ignore_mandatory_excuses_absence() {
    let harness = listing_harness();

    assert!(harness.evaluate().is_err());
    assert!(harness.evaluate_ignoring([Ignore::Mandatory]).is_ok());
}

/// `ALTERNATIVES` disables the rescue path outright: a mandatory absent
/// field fails at once with its declared alternatives listed, even when
/// one of them would have validated.
#[test]
fn test_ignore_alternatives_fails_immediately() {
    let mut harness = ValidationHarness::new();
    harness.directive(
        "primary",
        Directive::new()
            .with_predicate("non-empty-text")
            .mandatory()
            .alternative("altProp"),
    );
    harness.set("altProp", "would have validated");

    assert!(harness.evaluate().is_ok());
    assert_eq!(
        harness
            .evaluate_ignoring([Ignore::Alternatives])
            .unwrap_err(),
        Diagnostic::missing_field(name("primary"), vec![name("altProp")])
    );

    // With MANDATORY also ignored, ALTERNATIVES still fires first.
    assert_eq!(
        harness
            .evaluate_ignoring([Ignore::Alternatives, Ignore::Mandatory])
            .unwrap_err(),
        Diagnostic::missing_field(name("primary"), vec![name("altProp")])
    );
}

/* determinism */

#[test]
fn test_failure_identity_is_deterministic() {
    let mut harness = listing_harness();
    harness.set("externalId", "ext-ID");

    let first = harness.first_failure();
    for _ in 0..10 {
        assert_eq!(harness.first_failure(), first);
    }
    assert_eq!(
        first,
        Diagnostic::missing_field(name("description"), Vec::new())
    );
}
