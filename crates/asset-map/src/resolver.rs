//! Header resolution.

use crate::synonyms::SynonymTable;

/// Maps arbitrary vendor column headers onto canonical field names.
///
/// Resolution is pure and total: a header either matches a synonym exactly
/// (after lowercasing and trimming) or falls back to a slug of itself, so
/// unmapped columns are preserved instead of dropped.
pub struct HeaderResolver {
    table: SynonymTable,
}

impl HeaderResolver {
    pub fn new(table: SynonymTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Resolves a header to its canonical field name, or to a slug of the
    /// original header when no synonym matches.
    pub fn resolve(&self, header: &str) -> String {
        let normalized = normalize_header(header);
        match self.table.lookup(&normalized) {
            Some(field) => field.to_string(),
            None => slugify(header),
        }
    }
}

impl Default for HeaderResolver {
    fn default() -> Self {
        Self::new(SynonymTable::builtin())
    }
}

/// Lowercases and trims a header, collapsing internal whitespace runs, for
/// synonym lookup.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slug fallback: lowercase, then each whitespace run becomes one `_`, then
/// everything outside `[a-z0-9_]` is stripped. The two steps run in that
/// order, so punctuation set off by spaces leaves a doubled underscore
/// (`"Site / Location"` becomes `site__location`).
pub fn slugify(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            slug.push('_');
            in_whitespace = false;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }
    slug
}
