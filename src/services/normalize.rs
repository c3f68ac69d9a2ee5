//! Tag normalization.
//!
//! Canonicalizes free-form technology tags ("ts", " next.js ", "TailwindCSS") to a
//! stable display name. Normalization is idempotent: every canonical alias target
//! normalizes to itself.

use regex::Regex;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lower-cased alias → canonical display form.
const BUILTIN_ALIASES: [(&str, &str); 20] = [
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("next", "Next.js"),
    ("next.js", "Next.js"),
    ("react", "React"),
    ("tailwind", "Tailwind CSS"),
    ("tailwindcss", "Tailwind CSS"),
    ("erc4337", "ERC-4337"),
    ("erc-4337", "ERC-4337"),
    ("aa(erc-4337)", "ERC-4337"),
    ("viem", "Viem"),
    ("wagmi", "Wagmi"),
    ("solidity", "Solidity"),
    ("hardhat", "Hardhat"),
    ("postgres", "PostgreSQL"),
    ("postgresql", "PostgreSQL"),
    ("okx dex sdk", "OKX DEX SDK"),
    ("ethers", "Ethers.js"),
    ("ethers.js", "Ethers.js"),
    ("js", "JavaScript"),
];

/// Maps raw tag strings to canonical display names.
#[derive(Debug, Clone)]
pub struct TagNormalizer {
    aliases: HashMap<String, String>,
}

impl TagNormalizer {
    /// Creates a normalizer with the built-in alias table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
                .collect(),
        }
    }

    /// Normalizes a raw tag.
    ///
    /// Trims, collapses internal whitespace to single spaces, then resolves the
    /// lower-cased result through the alias table. Unknown tags keep their casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillradar::services::TagNormalizer;
    ///
    /// let normalizer = TagNormalizer::new();
    /// assert_eq!(normalizer.normalize("  ts "), "TypeScript");
    /// assert_eq!(normalizer.normalize("Google   OAuth"), "Google OAuth");
    /// ```
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let collapsed = collapse(raw);
        match self.aliases.get(&collapsed.to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => collapsed,
        }
    }

    /// Normalizes an arbitrary value, coercing non-strings to text first.
    #[must_use]
    pub fn normalize_value(&self, raw: &JsonValue) -> String {
        self.normalize(&coerce(raw))
    }
}

impl Default for TagNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerces any value to the string a tag would display as.
///
/// `null` becomes the empty string; numbers and booleans use their textual form.
#[must_use]
pub fn coerce(raw: &JsonValue) -> String {
    match raw {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn collapse(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
