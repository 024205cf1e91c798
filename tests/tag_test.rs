use c4gen::tag::{to_class_name, validate_tag_name, TAG_PREFIX};

#[test]
fn test_class_name_derivation() {
    assert_eq!(to_class_name("c4-alert"), "C4Alert");
    assert_eq!(to_class_name("c4-toast"), "C4Toast");
    assert_eq!(to_class_name("c4-notification-banner"), "C4NotificationBanner");
}

#[test]
fn test_class_name_shape() {
    for tag in ["c4-alert", "c4-notification-banner", "c4-btn2", "c4-a"] {
        let class_name = to_class_name(tag);
        assert!(!class_name.contains('-'), "derived name has a hyphen: {}", class_name);
        assert!(
            class_name.chars().next().unwrap().is_uppercase(),
            "derived name starts lowercase: {}",
            class_name
        );
        assert!(
            !class_name.contains(TAG_PREFIX),
            "derived name carries the vendor prefix: {}",
            class_name
        );
    }
}

#[test]
fn test_class_name_is_deterministic() {
    assert_eq!(to_class_name("c4-alert"), to_class_name("c4-alert"));
}

#[test]
fn test_class_name_is_idempotent_on_derived_names() {
    assert_eq!(to_class_name("C4Alert"), "C4Alert");
    assert_eq!(to_class_name("C4NotificationBanner"), "C4NotificationBanner");
}

#[test]
fn test_validate_accepts_well_formed_tags() {
    for tag in ["c4-alert", "c4-a", "c4-notification-banner", "c4-btn2"] {
        assert!(validate_tag_name(tag).is_ok(), "rejected valid tag: {}", tag);
    }
}

#[test]
fn test_validate_rejects_missing_prefix() {
    for tag in ["alert", "x4-alert", "C4-alert", ""] {
        let message = validate_tag_name(tag).unwrap_err();
        assert!(
            message.contains("start with"),
            "unexpected message for '{}': {}",
            tag,
            message
        );
    }
}

#[test]
fn test_validate_rejects_invalid_characters() {
    for tag in ["c4-Alert", "c4-al_ert", "c4-al ert", "c4-alért"] {
        let message = validate_tag_name(tag).unwrap_err();
        assert!(
            message.contains("lowercase letters"),
            "unexpected message for '{}': {}",
            tag,
            message
        );
    }
}

#[test]
fn test_validate_rejects_bare_prefix() {
    assert!(validate_tag_name("c4-").is_err());
}
