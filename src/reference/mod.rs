/// "See also" reference classification and resolution.
///
/// A reference body is matched against an ordered list of patterns to pick
/// its [`TagKind`], then resolved against the symbol table, first relative to
/// the enclosing namespace and then from the top level.
mod classify;
mod resolve;
pub mod slug;
mod tag;

pub use classify::classify;
pub use resolve::{classify_and_resolve, resolve_with_display_text, split_see_body};
pub use tag::{ReferenceTag, Resolution, ResolvedTag, TagKind, TagText};
