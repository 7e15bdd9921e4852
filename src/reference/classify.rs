use std::sync::LazyLock;

use regex::Regex;

use crate::reference::tag::TagKind;

static INSTANCE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:::)?[A-Z]\w*(?:::[A-Z]\w*)*)?#[a-z_]\w*[=?!]?\.?$")
        .expect("instance method pattern is valid")
});

static CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:::)?(?:[A-Z]\w*::)*[A-Z][A-Z0-9_]*\.?$").expect("constant pattern is valid")
});

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:::)?[A-Z]\w*(?:::[A-Z]\w*)*\.?$").expect("definition pattern is valid")
});

static CLASS_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:::)?(?:[A-Z]\w*(?:::[A-Z]\w*)*)?\.[a-z_]\w*[=?!]?\.?$")
        .expect("class method pattern is valid")
});

static LEGACY_CLASS_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:::)?[A-Z]\w*(?:::[A-Z]\w*)*)?::[a-z_]\w*[=?!]?\.?$")
        .expect("legacy class method pattern is valid")
});

/// One entry of the classification table.
struct ClassifierRule {
    kind: TagKind,
    matches: fn(&str) -> bool,
}

/// Checked top to bottom. Some forms are textual subsets of others
/// (`FOO` is also a valid `Definition` shape), so the order is significant.
/// The last rule always matches.
static RULES: [ClassifierRule; 5] = [
    ClassifierRule {
        kind: TagKind::InstanceMethod,
        matches: is_instance_method,
    },
    ClassifierRule {
        kind: TagKind::Constant,
        matches: is_constant,
    },
    ClassifierRule {
        kind: TagKind::Definition,
        matches: is_definition,
    },
    ClassifierRule {
        kind: TagKind::ClassMethod,
        matches: is_class_method,
    },
    ClassifierRule {
        kind: TagKind::Unstructured,
        matches: always,
    },
];

fn is_instance_method(text: &str) -> bool {
    INSTANCE_METHOD.is_match(text)
}

fn is_constant(text: &str) -> bool {
    CONSTANT.is_match(text)
}

fn is_definition(text: &str) -> bool {
    DEFINITION.is_match(text)
}

fn is_class_method(text: &str) -> bool {
    CLASS_METHOD.is_match(text) || is_legacy_class_method(text)
}

fn always(_: &str) -> bool {
    true
}

/// Picks the tag kind for a reference body.
pub fn classify(text: &str) -> TagKind {
    let text = text.trim();
    RULES
        .iter()
        .find(|rule| (rule.matches)(text))
        .map_or(TagKind::Unstructured, |rule| rule.kind)
}

/// `Foo::bar` / `::bar`: a class method written with `::` before the method
/// name instead of `.`.
pub fn is_legacy_class_method(text: &str) -> bool {
    LEGACY_CLASS_METHOD.is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_rule_always_matches() {
        let last = RULES.last().expect("rules");
        assert_eq!(last.kind, TagKind::Unstructured);
        assert!((last.matches)(""));
        assert!((last.matches)("anything at all"));
    }

    #[test]
    fn test_constant_wins_over_definition() {
        assert_eq!(classify("Foo::BAR"), TagKind::Constant);
        assert_eq!(classify("Foo::Bar"), TagKind::Definition);
    }

    #[test]
    fn test_legacy_form_detection() {
        assert!(is_legacy_class_method("Foo::bar"));
        assert!(is_legacy_class_method("::bar"));
        assert!(!is_legacy_class_method("Foo.bar"));
        assert!(!is_legacy_class_method("Foo::Bar"));
    }
}
