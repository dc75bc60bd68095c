//! Entity id and field-code generation.
//!
//! Ids are random 128-bit uuids: codes derived from content would break
//! when labels change, and sequential counters collide across editing
//! sessions. Field codes are human-readable slugs instead, made unique
//! against the caller-supplied code set.

use std::collections::HashSet;
use uuid::Uuid;

/// Fallback token when a label slugifies to nothing
pub const DEFAULT_CODE: &str = "field";

/// Maximum length of a generated code before collision suffixing
pub const MAX_CODE_LEN: usize = 40;

/// Generate a fresh entity id
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Derive a template-unique field code from a label.
///
/// Pure: the caller owns `existing` and decides whether to commit the
/// returned candidate (duplication probes codes speculatively).
pub fn code_for(label: &str, existing: &HashSet<String>) -> String {
    let base = slugify(label);
    let base = if base.is_empty() {
        DEFAULT_CODE.to_string()
    } else {
        base
    };

    if !existing.contains(&base) {
        return base;
    }

    let mut n = 1;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Lowercase, collapse non-alphanumeric runs to a single `_`, trim
/// separators, cap length.
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_sep = false;

    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug.truncate(MAX_CODE_LEN);
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}
