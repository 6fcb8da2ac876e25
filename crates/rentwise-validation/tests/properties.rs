use rentwise_validation::{
    ValidationIssue, sanitize_input, validate_display_name, validate_due_day, validate_email,
    validate_household_name, validate_rent_amount,
};

#[test]
fn rent_amount_validity_matches_open_closed_range() {
    let samples = [
        f64::NAN,
        f64::NEG_INFINITY,
        -1.0e9,
        -1.0,
        0.0,
        f64::MIN_POSITIVE,
        0.5,
        1.0,
        999_999.99,
        1_000_000.0,
        1_000_000.000_001,
        5.0e6,
        f64::INFINITY,
    ];
    for amount in samples {
        let expected = amount > 0.0 && amount <= 1_000_000.0;
        assert_eq!(
            validate_rent_amount(amount).is_valid(),
            expected,
            "amount {amount}"
        );
    }
}

#[test]
fn due_day_validity_matches_inclusive_range() {
    for day in -100..=100 {
        assert_eq!(validate_due_day(day).is_valid(), (1..=28).contains(&day));
    }
}

#[test]
fn sanitised_text_is_bracket_free_and_stable() {
    let inputs = [
        "",
        "plain",
        "  <img src=x onerror=alert(1)>  ",
        "<<<>>>",
        "a < b > c",
        " > leading",
        "trailing < ",
        "مرحبا <b>",
    ];
    for input in inputs {
        let once = sanitize_input(input);
        assert!(!once.contains('<') && !once.contains('>'), "{input:?}");
        assert_eq!(sanitize_input(&once), once, "{input:?}");
    }
}

#[test]
fn email_examples() {
    assert!(validate_email("a@b.com"));
    assert!(!validate_email("not-an-email"));
    assert!(validate_email("  a@b.com  "));
}

#[test]
fn household_name_examples() {
    assert!(!validate_household_name("").is_valid());
    assert!(!validate_household_name(&"x".repeat(101)).is_valid());
    assert!(validate_household_name(&"x".repeat(100)).is_valid());
}

#[test]
fn failures_always_carry_a_message() {
    let results = [
        validate_rent_amount(-5.0),
        validate_due_day(0),
        validate_household_name(" "),
        validate_display_name(&"y".repeat(60)),
    ];
    for result in results {
        assert!(!result.is_valid());
        let issue = result.issue().expect("failure carries an issue");
        assert_eq!(result.error(), Some(issue.to_string().as_str()));
        assert!(issue.i18n_key().starts_with("validation."));
    }
    assert_ne!(
        validate_due_day(0).issue(),
        Some(ValidationIssue::RentNotPositive)
    );
}
