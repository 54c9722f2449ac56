use refl_tstring::{tstring, tstring_concat, TString};

#[test]
fn scenario_concat_literals() {
    assert_eq!(tstring_concat!("abc", "def").as_str(), "abcdef");
}

#[test]
fn scenario_find_and_rfind_on_repeated_pattern() {
    let s = tstring!("abcd");
    let cd = tstring!("cd");
    assert_eq!(s.find(&cd), 2);
    assert_eq!(s.rfind(&TString::<0>::empty()), 4);
}

#[test]
fn scenario_ordering_is_lexicographic_on_bytes() {
    let mut values = vec![tstring!("banana"), tstring!("apples"), tstring!("cherry")];
    values.sort();
    let as_strs: Vec<_> = values.iter().map(|v| v.as_str()).collect();
    assert_eq!(as_strs, vec!["apples", "banana", "cherry"]);
}
