use unirange::{ErrorKind, MAX_CODE_POINT, UnicodeRangeSet};
use unirange_props::{IcuPropertyProvider, create_for_property};
use unirange_ranges::is_normalized;

fn set(name: &str, value: Option<&str>) -> UnicodeRangeSet {
    create_for_property(name, value).unwrap_or_else(|e| panic!("{name}={value:?}: {e}"))
}

fn error_kind(name: &str, value: Option<&str>) -> ErrorKind {
    create_for_property(name, value)
        .expect_err("resolution should fail")
        .into_kind()
}

fn bounds(set: &UnicodeRangeSet) -> Vec<(u32, u32)> {
    (0..set.range_count())
        .map(|i| (set.range_start(i).unwrap(), set.range_end(i).unwrap()))
        .collect()
}

#[test]
fn test_script_greek() {
    let greek = set("Script", Some("Greek"));
    assert!(greek.range_count() > 0);

    for cp in [0x0370, 0x0373, 0x03A3, 0x03B1, 0x03C9, 0x03FF, 0x1F00] {
        assert!(greek.contains(cp), "U+{cp:04X} is Greek");
    }
    // GREEK NUMERAL SIGN and GREEK QUESTION MARK are Common; U+03E2 is Coptic.
    for cp in [0x0041, 0x0374, 0x037E, 0x03E2, 0x0400] {
        assert!(!greek.contains(cp), "U+{cp:04X} is not Greek");
    }

    assert_eq!(greek, set("sc", Some("Grek")));
    assert!(is_normalized(greek.as_slice()));
}

#[test]
fn test_script_greek_double_complement() {
    let greek = set("Script", Some("Greek"));
    let twice = greek.complement().complement();
    assert_eq!(twice.range_count(), greek.range_count());
    assert_eq!(bounds(&twice), bounds(&greek));
}

#[test]
fn test_script_extensions_contain_script() {
    let greek = set("Script", Some("Greek"));
    let greek_ext = set("Script_Extensions", Some("Greek"));
    for range in &greek {
        assert!(greek_ext.contains(range.start()));
        assert!(greek_ext.contains(range.end()));
    }
    // COMBINING GREEK PERISPOMENI is Inherited, with Greek in its extensions.
    assert!(greek_ext.contains(0x0342));
    assert!(!greek.contains(0x0342));
    assert_eq!(greek_ext, set("scx", Some("Grek")));
}

#[test]
fn test_script_extensions_shared_code_points() {
    let syriac_ext = set("scx", Some("Syriac"));
    // ARABIC COMMA is Common, shared by Arabic, Syriac and others.
    assert!(syriac_ext.contains(0x060C));
    assert!(set("scx", Some("Arab")).contains(0x060C));
    assert!(!set("sc", Some("Syriac")).contains(0x060C));
    // COMBINING DOT ABOVE LEFT is Inherited, with Syriac in its extensions.
    assert!(syriac_ext.contains(0x1DF8));
    assert!(!syriac_ext.contains(0x1DFB));
    assert!(is_normalized(syriac_ext.as_slice()));
}

#[test]
fn test_binary_property_aliases() {
    let white_space = set("White_Space", None);
    assert_eq!(white_space, set("space", None));
    assert_eq!(bounds(&white_space)[..2], [(0x09, 0x0D), (0x20, 0x20)]);
    assert!(white_space.contains(0x3000));
    assert!(!white_space.contains(0x41));

    assert_eq!(set("Alphabetic", None), set("Alpha", None));
    assert_eq!(set("ID_Start", None), set("IDS", None));
}

#[test]
fn test_general_category_values() {
    let upper = set("General_Category", Some("Uppercase_Letter"));
    assert_eq!(upper, set("gc", Some("Lu")));
    assert!(upper.contains('A' as u32));
    assert!(!upper.contains('a' as u32));

    let digits = set("gc", Some("digit"));
    assert_eq!(digits, set("gc", Some("Nd")));
    assert_eq!(bounds(&digits)[0], (0x30, 0x39));

    assert_eq!(bounds(&set("gc", Some("Cs"))), vec![(0xD800, 0xDFFF)]);
}

#[test]
fn test_general_category_group_is_union_of_members() {
    let letters = set("gc", Some("L"));
    let members: Vec<_> = ["Lu", "Ll", "Lt", "Lm", "Lo"]
        .into_iter()
        .flat_map(|gc| set("gc", Some(gc)).iter().collect::<Vec<_>>())
        .collect();
    assert_eq!(letters, UnicodeRangeSet::from_ranges(members));
    assert!(is_normalized(letters.as_slice()));

    let cased = set("gc", Some("LC"));
    assert!(cased.contains(0x01C5)); // Lt
    assert!(!cased.contains(0x4E00)); // Lo
    assert!(letters.contains(0x4E00));
}

#[test]
fn test_lone_general_category_value() {
    assert_eq!(set("Lu", None), set("gc", Some("Lu")));
    assert_eq!(set("Punctuation", None), set("gc", Some("P")));
}

#[test]
fn test_special_properties() {
    assert_eq!(set("Any", None), UnicodeRangeSet::full());
    assert_eq!(bounds(&set("ASCII", None)), vec![(0, 0x7F)]);

    let assigned = set("Assigned", None);
    assert_eq!(assigned, set("gc", Some("Cn")).complement());
    assert!(assigned.contains('A' as u32));
    assert!(!assigned.contains(0x0378));
}

#[test]
fn test_unknown_property() {
    assert!(matches!(
        error_kind("NoSuchProperty", None),
        ErrorKind::UnknownProperty { name } if name == "NoSuchProperty"
    ));
    // A lone General_Category value never takes a value itself.
    for (name, value) in [("white_space", None), ("", None), ("Lu", Some("Yes"))] {
        let kind = error_kind(name, value);
        assert!(matches!(kind, ErrorKind::UnknownProperty { .. }), "{name}");
    }
}

#[test]
fn test_unknown_property_value() {
    let cases = [
        ("Script", Some("Klingon")),
        ("scx", Some("")),
        ("gc", Some("Letters")),
        ("General_Category", None),
        ("Script", None),
        ("White_Space", Some("Yes")),
        ("Any", Some("x")),
    ];
    for (name, value) in cases {
        match error_kind(name, value) {
            ErrorKind::UnknownPropertyValue { property, .. } => assert_eq!(property, name),
            other => panic!("{name}={value:?}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn test_invariants_and_complement_for_many_properties() {
    let cases = [
        ("Alphabetic", None),
        ("Emoji", None),
        ("Noncharacter_Code_Point", None),
        ("Any", None),
        ("Assigned", None),
        ("gc", Some("C")),
        ("gc", Some("Zs")),
        ("sc", Some("Latn")),
        ("sc", Some("Han")),
        ("scx", Some("Arab")),
    ];
    for (name, value) in cases {
        let s = set(name, value);
        let c = s.complement();
        assert!(is_normalized(s.as_slice()), "{name}");
        assert!(is_normalized(c.as_slice()), "{name}");
        let total = s.code_point_count() + c.code_point_count();
        assert_eq!(total, MAX_CODE_POINT + 1);
        assert_eq!(c.complement(), s, "{name}");
        for cp in [0, 0x41, 0x3000, 0x1F525, MAX_CODE_POINT] {
            assert_ne!(s.contains(cp), c.contains(cp), "{name} U+{cp:04X}");
        }
    }
}

#[test]
fn test_explicit_provider() {
    let provider = IcuPropertyProvider::new();
    let emoji = UnicodeRangeSet::create_for_property(&provider, "Emoji", None).unwrap();
    assert!(emoji.contains(0x1F525)); // FIRE
    assert!(!emoji.contains('V' as u32));
}

#[test]
fn test_random_code_points_have_exactly_one_category() {
    use rand::Rng;

    let categories: Vec<_> = [
        "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc", "Pd", "Ps", "Pe",
        "Pi", "Pf", "Po", "Sm", "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co", "Cn",
    ]
    .into_iter()
    .map(|gc| set("gc", Some(gc)))
    .collect();

    let mut rng = rand::rng();
    for _ in 0..2000 {
        let cp = rng.random_range(0..=MAX_CODE_POINT);
        let hits = categories.iter().filter(|s| s.contains(cp)).count();
        assert_eq!(hits, 1, "U+{cp:04X}");
    }
}
