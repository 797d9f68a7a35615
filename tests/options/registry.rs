use optreg::{CliError, OptValue, OptionRegistry};

#[test]
fn built_ins_exist_before_any_registration() {
    let registry = OptionRegistry::new();

    assert_eq!(registry.get("debug"), Some(&OptValue::Flag(false)));
    assert_eq!(registry.get("help"), Some(&OptValue::Flag(false)));
    assert!(!registry.persists("debug"));
    assert!(!registry.persists("help"));
}

#[test]
fn names_iterate_in_registration_order() {
    let mut registry = OptionRegistry::new();
    registry.register("zeta", "z", false);
    registry.register("alpha", "a", false);

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["debug", "help", "zeta", "alpha"]);
}

#[test]
fn re_registration_overwrites_without_duplicating() {
    let mut registry = OptionRegistry::new();
    registry.register("mode", "fast", false);
    registry.register("mode", "slow", true);

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["debug", "help", "mode"]);
    assert_eq!(registry.get("mode"), Some(&OptValue::Text("slow".into())));
    assert!(registry.persists("mode"));
}

#[test]
fn set_rejects_unknown_names() {
    let mut registry = OptionRegistry::new();
    let err = registry.set("missing", true).unwrap_err();

    assert_eq!(err, CliError::UnknownFlag("missing".to_string()));
    assert_eq!(registry.get("missing"), None);
}

#[test]
fn assign_introduces_missing_names_as_persistable() {
    let mut registry = OptionRegistry::new();
    registry.assign("fresh", "value");

    assert_eq!(registry.get("fresh"), Some(&OptValue::Text("value".into())));
    assert!(registry.persists("fresh"));
    assert_eq!(registry.names().last(), Some("fresh"));
}

#[test]
fn truthiness_treats_false_and_empty_string_as_unset() {
    assert!(!OptValue::Flag(false).is_truthy());
    assert!(!OptValue::Text(String::new()).is_truthy());
    assert!(OptValue::Flag(true).is_truthy());
    assert!(OptValue::Text("0".into()).is_truthy());
}

#[test]
fn falsy_values_display_as_off() {
    assert_eq!(OptValue::Flag(false).display(), "off");
    assert_eq!(OptValue::Text(String::new()).display(), "off");
    assert_eq!(OptValue::Flag(true).display(), "on");
    assert_eq!(OptValue::Text("loud".into()).display(), "loud");
}
