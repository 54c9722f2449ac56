//! Extender tag table and chain validation (spec §4.7). This is deliberately
//! plain string/Vec logic with no `syn`/`proc-macro2` involved, so the
//! validation rules (duplicate tag, missing required predecessor, unknown
//! tag) can be unit-tested directly without going through macro expansion.
//! `lib.rs` calls `resolve` and turns its `Err` into a `compile_error!` at
//! the call site that named the bad tag, satisfying spec §7's "Extender
//! chain invalid" diagnostic contract.

/// One entry in the fixed extender table. `requires` names the tag that
/// must appear earlier in the list, mirroring the spec's
/// `RequiredExtender` template parameter.
pub struct ExtenderSpec {
    pub name: &'static str,
    pub requires: Option<&'static str>,
}

/// The full extender table (spec §4.7/§4.9, renamed away from the
/// Abseil-specific `AbslStringify`/`AbslHashable` names since there is no
/// Abseil dependency in this port): `Stringify` is the foundational
/// formatting capability; `Printable` and `Streamable` both require it;
/// `Comparable` and `Hashable` stand alone.
pub const EXTENDERS: &[ExtenderSpec] = &[
    ExtenderSpec { name: "Stringify", requires: None },
    ExtenderSpec { name: "Printable", requires: Some("Stringify") },
    ExtenderSpec { name: "Streamable", requires: Some("Stringify") },
    ExtenderSpec { name: "Comparable", requires: None },
    ExtenderSpec { name: "Hashable", requires: None },
];

/// The `Default` bundle (spec §4.7): everything, in dependency order.
pub const DEFAULT_BUNDLE: &[&str] = &["Stringify", "Printable", "Streamable", "Comparable", "Hashable"];

/// The `NoPrint` bundle (spec §4.7): no `Printable`/`Streamable`.
pub const NO_PRINT_BUNDLE: &[&str] = &["Stringify", "Comparable", "Hashable"];

fn spec_for(name: &str) -> Option<&'static ExtenderSpec> {
    EXTENDERS.iter().find(|e| e.name == name)
}

/// Expands `"Default"`/`"NoPrint"` bundle tokens into their member tags in
/// place, preserving order, then deduplicates the result (spec: "deduplicated
/// if listed alongside any of its members").
pub fn expand_bundles(names: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();
    for name in names {
        match name.as_str() {
            "Default" => expanded.extend(DEFAULT_BUNDLE.iter().map(|s| s.to_string())),
            "NoPrint" => expanded.extend(NO_PRINT_BUNDLE.iter().map(|s| s.to_string())),
            other => expanded.push(other.to_string()),
        }
    }
    let mut seen = Vec::new();
    expanded.retain(|name| {
        if seen.contains(name) {
            false
        } else {
            seen.push(name.clone());
            true
        }
    });
    expanded
}

/// Validates a (bundle-expanded) extender list: no duplicates, no unknown
/// tags, and every tag's required predecessor appears earlier. Returns the
/// validated list unchanged on success, or an error message naming the
/// offending tag on failure (spec §7).
pub fn resolve(names: &[String]) -> Result<Vec<String>, String> {
    let expanded = expand_bundles(names);

    let mut seen: Vec<&str> = Vec::new();
    for name in &expanded {
        if seen.contains(&name.as_str()) {
            return Err(format!("duplicate extender tag `{name}`"));
        }
        if spec_for(name).is_none() {
            return Err(format!(
                "unknown extender tag `{name}` (known tags: {})",
                EXTENDERS.iter().map(|e| e.name).collect::<Vec<_>>().join(", ")
            ));
        }
        seen.push(name);
    }

    for (i, name) in expanded.iter().enumerate() {
        let spec = spec_for(name).expect("validated above");
        if let Some(required) = spec.requires {
            let required_index = expanded.iter().position(|n| n == required);
            match required_index {
                Some(idx) if idx < i => {}
                Some(_) => {
                    return Err(format!(
                        "extender `{name}` requires `{required}` to appear earlier in the extender list"
                    ))
                }
                None => {
                    return Err(format!("extender `{name}` requires `{required}`, which is not in the extender list"))
                }
            }
        }
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_bundle_expands_in_dependency_order() {
        let resolved = resolve(&v(&["Default"])).unwrap();
        assert_eq!(resolved, DEFAULT_BUNDLE.to_vec());
    }

    #[test]
    fn no_print_bundle_excludes_printable_and_streamable() {
        let resolved = resolve(&v(&["NoPrint"])).unwrap();
        assert_eq!(resolved, NO_PRINT_BUNDLE.to_vec());
    }

    #[test]
    fn bundle_plus_member_is_deduplicated() {
        let resolved = resolve(&v(&["Default", "Comparable"])).unwrap();
        assert_eq!(resolved, DEFAULT_BUNDLE.to_vec());
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let err = resolve(&v(&["Comparable", "Comparable"])).unwrap_err();
        assert!(err.contains("duplicate extender tag `Comparable`"), "{err}");
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = resolve(&v(&["Bogus"])).unwrap_err();
        assert!(err.contains("unknown extender tag `Bogus`"), "{err}");
    }

    #[test]
    fn missing_required_predecessor_is_rejected() {
        let err = resolve(&v(&["Printable"])).unwrap_err();
        assert!(err.contains("requires `Stringify`"), "{err}");
    }

    #[test]
    fn required_predecessor_out_of_order_is_rejected() {
        let err = resolve(&v(&["Printable", "Stringify"])).unwrap_err();
        assert!(
            err.contains("extender `Printable` requires `Stringify` to appear earlier"),
            "{err}"
        );
    }

    #[test]
    fn custom_order_satisfying_requirements_is_accepted() {
        let resolved = resolve(&v(&["Stringify", "Printable", "Comparable"])).unwrap();
        assert_eq!(resolved, v(&["Stringify", "Printable", "Comparable"]));
    }
}
