use tracing::debug;

use crate::reference::classify::{classify, is_legacy_class_method};
use crate::reference::slug::namespace_path;
use crate::reference::tag::{ReferenceTag, Resolution, TagKind, TagText};
use crate::registry::RegistryQuery;

/// Classifies a reference body and resolves it against the registry.
///
/// Never fails: text that is not a recognizable reference comes back as
/// [`ReferenceTag::Unstructured`], and references that do not resolve have
/// `exists == false`.
pub fn classify_and_resolve(
    native_text: &str,
    parent_namespace: &str,
    query: &RegistryQuery<'_>,
) -> ReferenceTag {
    resolve_with_display_text(native_text, parent_namespace, None, query)
}

/// Like [`classify_and_resolve`], keeping explicit display text written
/// after the reference.
pub fn resolve_with_display_text(
    native_text: &str,
    parent_namespace: &str,
    display_text: Option<&str>,
    query: &RegistryQuery<'_>,
) -> ReferenceTag {
    let text = TagText {
        native_text: native_text.to_string(),
        parent_namespace: parent_namespace.to_string(),
        display_text: display_text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
    };

    let kind = classify(native_text);
    if kind == TagKind::Unstructured {
        debug!(text = native_text, "unstructured reference");
        return ReferenceTag::Unstructured(text);
    }

    let resolution = resolve(kind, native_text, parent_namespace, query);
    debug!(
        text = native_text,
        parent = parent_namespace,
        kind = kind.as_str(),
        exists = resolution.exists,
        relative = resolution.relative,
        "resolved reference"
    );
    ReferenceTag::structured(kind, text, resolution)
}

/// Splits a raw see-tag body into its reference and optional display text:
/// `Foo::Bar the bar class` gives (`Foo::Bar`, `Some("the bar class")`).
pub fn split_see_body(body: &str) -> (&str, Option<&str>) {
    let body = body.trim();
    match body.split_once(char::is_whitespace) {
        Some((reference, rest)) => {
            let rest = rest.trim();
            (reference, (!rest.is_empty()).then_some(rest))
        }
        None => (body, None),
    }
}

fn resolve(
    kind: TagKind,
    native_text: &str,
    parent_namespace: &str,
    query: &RegistryQuery<'_>,
) -> Resolution {
    let trimmed = native_text.trim();
    let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let reference = clean_reference(kind, body);
    let name = lookup_name(&reference);
    let absolute = body.starts_with("::") || parent_namespace.is_empty();

    let (scoped, relative, exists) = if absolute {
        let exists = exists_as(kind, query, name);
        (name.to_string(), false, exists)
    } else {
        let qualified = qualify(parent_namespace, name);
        if exists_as(kind, query, &qualified) {
            (qualified, true, true)
        } else {
            let exists = exists_as(kind, query, name);
            (name.to_string(), false, exists)
        }
    };

    let (namespace, reference_name) = split_scoped(kind, &scoped);
    let path = if exists {
        link_path(kind, &scoped, &namespace)
    } else {
        None
    };
    let category = category(kind, query, &scoped, exists);

    Resolution {
        reference,
        namespace,
        reference_name,
        relative,
        exists,
        path,
        category,
    }
}

/// Drops the leading top-level `::`. Legacy class methods (`::Foo::bar`,
/// `::bar`) keep it as written.
fn clean_reference(kind: TagKind, body: &str) -> String {
    match body.strip_prefix("::") {
        Some(_) if kind == TagKind::ClassMethod && is_legacy_class_method(body) => {
            body.to_string()
        }
        Some(rest) => rest.to_string(),
        None => body.to_string(),
    }
}

/// Name looked up in the registry. A leading `::` is kept only when it is
/// the sole separator, since the top-level class method `::bar` is stored
/// under that title.
fn lookup_name(reference: &str) -> &str {
    match reference.strip_prefix("::") {
        Some(rest) if rest.contains("::") => rest,
        _ => reference,
    }
}

/// Joins a reference onto its parent namespace. Method references that start
/// with their own separator (`#bar`, `.bar`) attach directly.
fn qualify(parent_namespace: &str, reference: &str) -> String {
    if reference.starts_with('#') || reference.starts_with('.') {
        format!("{parent_namespace}{reference}")
    } else {
        format!("{parent_namespace}::{reference}")
    }
}

fn exists_as(kind: TagKind, query: &RegistryQuery<'_>, name: &str) -> bool {
    match kind {
        TagKind::Constant => query.constant_exists(name),
        TagKind::Definition => query.definition_exists(name),
        TagKind::InstanceMethod => query.instance_method_exists(name),
        TagKind::ClassMethod => query.class_method_exists(name),
        TagKind::Unstructured => false,
    }
}

fn split_scoped(kind: TagKind, scoped: &str) -> (String, String) {
    let split = match kind.separator() {
        Some(".") => scoped
            .rsplit_once('.')
            .or_else(|| scoped.rsplit_once("::")),
        Some(separator) => scoped.rsplit_once(separator),
        None => None,
    };
    match split {
        Some((namespace, name)) => (namespace.to_string(), name.to_string()),
        None => (String::new(), scoped.to_string()),
    }
}

/// Definitions link to their own page; members link to the page of the
/// namespace that holds them, and top-level members have none.
fn link_path(kind: TagKind, scoped: &str, namespace: &str) -> Option<String> {
    let target = if kind == TagKind::Definition {
        scoped
    } else {
        namespace
    };
    let path = namespace_path(target);
    (!path.is_empty()).then_some(path)
}

fn category(kind: TagKind, query: &RegistryQuery<'_>, scoped: &str, exists: bool) -> String {
    let label = match kind {
        TagKind::Constant => "constant",
        TagKind::Definition => match query.find_definition(scoped) {
            Some(symbol) if exists => symbol.kind.as_str(),
            _ => "definition",
        },
        TagKind::InstanceMethod if exists && query.is_instance_attribute(scoped) => {
            "instance-attribute"
        }
        TagKind::InstanceMethod => "instance-method",
        TagKind::ClassMethod => "class-method",
        TagKind::Unstructured => "unstructured",
    };
    label.to_string()
}
