use serde::Serialize;

/// The kinds of "see also" references, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    InstanceMethod,
    Constant,
    Definition,
    ClassMethod,
    Unstructured,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::InstanceMethod => "instance_method",
            TagKind::Constant => "constant",
            TagKind::Definition => "definition",
            TagKind::ClassMethod => "class_method",
            TagKind::Unstructured => "unstructured",
        }
    }

    /// Separator between the namespace and the referenced name.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            TagKind::Constant | TagKind::Definition => Some("::"),
            TagKind::InstanceMethod => Some("#"),
            TagKind::ClassMethod => Some("."),
            TagKind::Unstructured => None,
        }
    }
}

/// The tag body as the comment parser supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagText {
    /// Reference text exactly as written.
    pub native_text: String,
    /// Fully-qualified path of the documented entity the tag belongs to;
    /// empty at top level.
    pub parent_namespace: String,
    /// Explicit text written after the reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

/// Outcome of resolving a structured reference against the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Cleaned label: no trailing `.`, no leading top-level `::`.
    pub reference: String,
    /// Everything before the final separator of the resolved path.
    pub namespace: String,
    /// The final segment of the resolved path.
    pub reference_name: String,
    /// Resolved against the parent namespace rather than the top level.
    pub relative: bool,
    pub exists: bool,
    /// Link path; only set when the target exists and has a page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Fine-grained kind label such as `instance-attribute` or `module`.
    pub category: String,
}

/// A structured reference with its resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTag {
    #[serde(flatten)]
    pub text: TagText,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// A classified and resolved "see also" reference.
///
/// Built once by [`crate::reference::classify_and_resolve`] and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceTag {
    InstanceMethod(ResolvedTag),
    Constant(ResolvedTag),
    Definition(ResolvedTag),
    ClassMethod(ResolvedTag),
    Unstructured(TagText),
}

impl ReferenceTag {
    /// Wraps a resolution in the variant for `kind`.
    pub(crate) fn structured(kind: TagKind, text: TagText, resolution: Resolution) -> Self {
        let tag = ResolvedTag { text, resolution };
        match kind {
            TagKind::InstanceMethod => ReferenceTag::InstanceMethod(tag),
            TagKind::Constant => ReferenceTag::Constant(tag),
            TagKind::Definition => ReferenceTag::Definition(tag),
            TagKind::ClassMethod => ReferenceTag::ClassMethod(tag),
            TagKind::Unstructured => ReferenceTag::Unstructured(tag.text),
        }
    }

    pub fn kind(&self) -> TagKind {
        match self {
            ReferenceTag::InstanceMethod(_) => TagKind::InstanceMethod,
            ReferenceTag::Constant(_) => TagKind::Constant,
            ReferenceTag::Definition(_) => TagKind::Definition,
            ReferenceTag::ClassMethod(_) => TagKind::ClassMethod,
            ReferenceTag::Unstructured(_) => TagKind::Unstructured,
        }
    }

    pub fn text(&self) -> &TagText {
        match self {
            ReferenceTag::InstanceMethod(tag)
            | ReferenceTag::Constant(tag)
            | ReferenceTag::Definition(tag)
            | ReferenceTag::ClassMethod(tag) => &tag.text,
            ReferenceTag::Unstructured(text) => text,
        }
    }

    /// The resolution, absent for unstructured text.
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            ReferenceTag::InstanceMethod(tag)
            | ReferenceTag::Constant(tag)
            | ReferenceTag::Definition(tag)
            | ReferenceTag::ClassMethod(tag) => Some(&tag.resolution),
            ReferenceTag::Unstructured(_) => None,
        }
    }

    pub fn native_text(&self) -> &str {
        &self.text().native_text
    }

    pub fn parent_namespace(&self) -> &str {
        &self.text().parent_namespace
    }

    pub fn display_text(&self) -> Option<&str> {
        self.text().display_text.as_deref()
    }

    /// Cleaned reference label; the raw text for unstructured tags.
    pub fn reference(&self) -> &str {
        match self.resolution() {
            Some(resolution) => &resolution.reference,
            None => self.native_text(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.resolution().map(|r| r.namespace.as_str())
    }

    pub fn reference_name(&self) -> Option<&str> {
        self.resolution().map(|r| r.reference_name.as_str())
    }

    pub fn exists(&self) -> bool {
        self.resolution().is_some_and(|r| r.exists)
    }

    pub fn is_relative(&self) -> bool {
        self.resolution().is_some_and(|r| r.relative)
    }

    pub fn path(&self) -> Option<&str> {
        self.resolution().and_then(|r| r.path.as_deref())
    }

    pub fn category(&self) -> &str {
        match self.resolution() {
            Some(resolution) => &resolution.category,
            None => "unstructured",
        }
    }

    /// Text a renderer should show: the explicit display text if there is
    /// one, otherwise the cleaned reference.
    pub fn label(&self) -> &str {
        self.display_text().unwrap_or_else(|| self.reference())
    }
}
