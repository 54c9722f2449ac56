use pretty_assertions::assert_eq;
use refl_core::prelude::FieldNames;
use refl_derive::{Extend, ExtendNoDefault};

#[derive(Extend)]
struct Credentials {
    username: String,
    #[refl(redact)]
    password: String,
    #[refl(rename = "auth_token")]
    token: String,
    #[refl(suppress)]
    internal_retry_count: u32,
}

#[test]
fn redact_hides_the_value_behind_a_placeholder() {
    let c = Credentials {
        username: "ada".into(),
        password: "hunter2".into(),
        token: "abc123".into(),
        internal_retry_count: 3,
    };
    assert_eq!(
        c.to_reflected_string(),
        "{.username: \"ada\", .password: \"<redacted>\", .auth_token: \"abc123\"}"
    );
}

#[derive(Extend)]
#[refl(no_names)]
struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

#[test]
fn no_names_empties_the_field_name_table() {
    assert!(Vector3::field_names().is_empty());
}

#[test]
fn no_names_drops_keys_from_stringify() {
    let v = Vector3 { x: 1.0, y: 2.0, z: 3.0 };
    assert_eq!(v.to_reflected_string(), "{1, 2, 3}");
}

#[derive(Extend, Debug)]
#[refl(extend(NoPrint))]
struct Secret {
    value: i32,
}

#[test]
fn no_print_bundle_still_derives_stringify_and_comparable() {
    let a = Secret { value: 1 };
    let b = Secret { value: 1 };
    assert_eq!(a, b);
    let opts = refl_core::prelude::default_mode();
    assert_eq!(a.to_reflected_string_with(&opts), "{.value: 1}");
}
// `Secret` has no inherent `to_reflected_string()` and no `Display`: the
// `NoPrint` bundle deliberately leaves both out.

#[derive(ExtendNoDefault, Debug)]
#[refl(extend(Comparable, Hashable))]
struct Id(u64);

#[test]
fn extend_no_default_only_derives_the_named_tags() {
    assert_eq!(Id(5), Id(5));
    assert!(Id(4) < Id(5));
}

#[derive(Extend, Debug)]
struct WideRecord {
    f0: i32,
    f1: i32,
    f2: i32,
    f3: i32,
    f4: i32,
    f5: i32,
    f6: i32,
    f7: i32,
    f8: i32,
    f9: i32,
    f10: i32,
    f11: i32,
    f12: i32,
    f13: i32,
}

#[test]
fn arity_above_twelve_still_compares_and_stringifies_field_by_field() {
    let a = WideRecord {
        f0: 0, f1: 1, f2: 2, f3: 3, f4: 4, f5: 5, f6: 6, f7: 7, f8: 8, f9: 9, f10: 10, f11: 11,
        f12: 12, f13: 13,
    };
    let b = WideRecord {
        f0: 0, f1: 1, f2: 2, f3: 3, f4: 4, f5: 5, f6: 6, f7: 7, f8: 8, f9: 9, f10: 10, f11: 11,
        f12: 12, f13: 13,
    };
    let mut c = WideRecord {
        f0: 0, f1: 1, f2: 2, f3: 3, f4: 4, f5: 5, f6: 6, f7: 7, f8: 8, f9: 9, f10: 10, f11: 11,
        f12: 12, f13: 14,
    };
    assert_eq!(a, b);
    assert!(a < c);
    c.f13 = 13;
    assert_eq!(a, c);
    assert_eq!(WideRecord::field_names().len(), 14);
}
