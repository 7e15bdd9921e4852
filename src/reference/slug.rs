/// Lower-cases a single namespace segment and hyphenates it at internal
/// capitalization boundaries: `PhysicalConstants` becomes
/// `physical-constants`, `HTTPServer` becomes `http-server`.
pub fn slugify_segment(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut slug = String::with_capacity(segment.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 && !slug.ends_with('-') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                slug.push('-');
            }
        }
        slug.extend(c.to_lowercase());
    }

    slug.trim_end_matches('-').to_string()
}

/// Turns a `::`-separated namespace into a link path: `Cosmos::PhysicalConstants`
/// becomes `cosmos/physical-constants`.
pub fn namespace_path(namespace: &str) -> String {
    namespace
        .split("::")
        .filter(|segment| !segment.is_empty())
        .map(slugify_segment)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_segments() {
        assert_eq!(slugify_segment("PhysicalConstants"), "physical-constants");
        assert_eq!(slugify_segment("Cosmos"), "cosmos");
        assert_eq!(slugify_segment("HTTPServer"), "http-server");
        assert_eq!(slugify_segment("Base64Encoder"), "base64-encoder");
        assert_eq!(slugify_segment("URI"), "uri");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(slugify_segment("Snake_Case"), "snake-case");
    }

    #[test]
    fn test_namespace_path() {
        assert_eq!(
            namespace_path("Cosmos::PhysicalConstants"),
            "cosmos/physical-constants"
        );
        assert_eq!(namespace_path("::TopLevel"), "top-level");
        assert_eq!(namespace_path(""), "");
    }
}
