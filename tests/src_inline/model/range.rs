use super::*;

#[test]
fn test_interval_bounds_inclusive() {
    assert!(is_abnormal("12", "13-17"));
    assert!(!is_abnormal("15", "13-17"));
    assert!(!is_abnormal("13", "13-17"));
    assert!(!is_abnormal("17", "13-17"));
    assert!(is_abnormal("17.01", "13-17"));
}

#[test]
fn test_upper_bound_boundary_is_abnormal() {
    assert!(is_abnormal("200", "<200"));
    assert!(!is_abnormal("199.9", "<200"));
    assert!(is_abnormal("250", "<200"));
}

#[test]
fn test_lower_bound_boundary_is_abnormal() {
    assert!(is_abnormal("40", ">40"));
    assert!(!is_abnormal("41", ">40"));
    assert!(is_abnormal("12", ">40"));
}

#[test]
fn test_unparsed_values_never_abnormal() {
    for value in ["", "   ", "abc", "12mg", "1,5", "-"] {
        for range in ["13-17", "<200", ">40", "weird"] {
            assert!(!is_abnormal(value, range), "{value:?} vs {range:?}");
        }
    }
    assert_eq!(
        ReferenceRange::parse("13-17").classify(""),
        Classification::Unparsed
    );
}

#[test]
fn test_value_whitespace_trimmed() {
    assert!(is_abnormal(" 12 ", "13-17"));
    assert_eq!(
        ReferenceRange::parse("13-17").classify("\t15\n"),
        Classification::Normal
    );
}

#[test]
fn test_digit_separators() {
    let hb = ReferenceRange::parse("13-17");
    assert_eq!(hb.classify("1_0"), Classification::Abnormal);
    assert_eq!(hb.classify("1_5.0_0"), Classification::Normal);
    assert!(is_abnormal("15_000", "4000-11000"));
    for bad in ["_10", "10_", "1__0", "1_.5", "1._5"] {
        assert_eq!(hb.classify(bad), Classification::Unparsed, "{bad:?}");
    }
}

#[test]
fn test_non_ascii_digits_unparsed() {
    assert_eq!(
        ReferenceRange::parse("13-17").classify("\u{661}\u{662}"),
        Classification::Unparsed
    );
}

#[test]
fn test_nan_compares_normal() {
    assert!(!is_abnormal("NaN", "13-17"));
    assert!(!is_abnormal("nan", "<200"));
    assert!(!is_abnormal("NaN", ">40"));
}

#[test]
fn test_parse_shapes() {
    assert_eq!(
        ReferenceRange::parse("4.5-5.5"),
        ReferenceRange::Interval {
            low: 4.5,
            high: 5.5
        }
    );
    assert_eq!(ReferenceRange::parse("<150"), ReferenceRange::UpperBound(150.0));
    assert_eq!(ReferenceRange::parse(">40"), ReferenceRange::LowerBound(40.0));
    assert_eq!(ReferenceRange::parse("negative"), ReferenceRange::Unrecognized);
    assert_eq!(ReferenceRange::parse(""), ReferenceRange::Unrecognized);
}

#[test]
fn test_malformed_ranges_unrecognized() {
    assert_eq!(ReferenceRange::parse("1-2-3"), ReferenceRange::Unrecognized);
    assert_eq!(ReferenceRange::parse("a-b"), ReferenceRange::Unrecognized);
    assert_eq!(ReferenceRange::parse("10-"), ReferenceRange::Unrecognized);
    assert_eq!(ReferenceRange::parse("<x"), ReferenceRange::Unrecognized);
    assert!(!is_abnormal("1000", "1-2-3"));
    assert!(!is_abnormal("1000", "normal"));
}

#[test]
fn test_dash_checked_before_prefix() {
    // "<-5" contains a separator, so it is treated as an interval and fails.
    assert_eq!(ReferenceRange::parse("<-5"), ReferenceRange::Unrecognized);
    assert!(!is_abnormal("100", "<-5"));
}

#[test]
fn test_classification_labels() {
    assert_eq!(Classification::Abnormal.as_str(), "abnormal");
    assert_eq!(Classification::Normal.as_str(), "normal");
    assert_eq!(Classification::Unparsed.as_str(), "unparsed");
    assert!(!Classification::Unparsed.is_abnormal());
}
