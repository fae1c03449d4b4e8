//! Context key resolver.
//!
//! Maps vocabulary IRIs to the key form used by a document whose `@context`
//! declares prefixes (`"doc": "http://a.ml/vocabularies/document#"`) or
//! whole-term aliases. Results are memoized per resolver; a resolver lives
//! exactly as long as the document it was built from.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::node::{unwrap_root, CONTEXT, ID};

/// Compacts vocabulary IRIs against a JSON-LD `@context`.
#[derive(Debug, Default)]
pub struct KeyResolver {
    /// `(alias, iri)` pairs in context order. Keywords (`@base`, `@vocab`)
    /// are not aliases and are left out.
    aliases: Vec<(String, String)>,
    /// Original IRI -> compacted key.
    cache: RwLock<HashMap<String, String>>,
}

impl Clone for KeyResolver {
    fn clone(&self) -> Self {
        Self {
            aliases: self.aliases.clone(),
            cache: RwLock::new(self.cache.read().clone()),
        }
    }
}

impl KeyResolver {
    /// A resolver without a context. Every IRI resolves to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from a `@context` object.
    ///
    /// Term definitions may be plain IRIs or expanded definitions carrying
    /// an `@id`; anything else is ignored.
    pub fn from_context(context: &Map<String, Value>) -> Self {
        let aliases = context
            .iter()
            .filter(|(alias, _)| !alias.starts_with('@'))
            .filter_map(|(alias, definition)| {
                let iri = match definition {
                    Value::String(s) => s.as_str(),
                    Value::Object(obj) => obj.get(ID)?.as_str()?,
                    _ => return None,
                };
                if iri.is_empty() {
                    return None;
                }
                Some((alias.clone(), iri.to_string()))
            })
            .collect();

        Self {
            aliases,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Build a resolver from the `@context` of a document root.
    ///
    /// The root may be wrapped in a one-element array. A missing or
    /// malformed context yields a pass-through resolver.
    pub fn from_document(root: &Value) -> Self {
        unwrap_root(root)
            .and_then(|doc| doc.get(CONTEXT))
            .and_then(Value::as_object)
            .map(Self::from_context)
            .unwrap_or_default()
    }

    /// Whether the resolver has any aliases to compact with.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolve a vocabulary IRI to its compacted key.
    ///
    /// Lookup order: a term aliasing the exact IRI, then a prefix naming the
    /// IRI's `#` namespace, then (for IRIs without a fragment) the longest
    /// prefix the IRI starts with. Unmatched IRIs resolve to themselves.
    pub fn resolve(&self, iri: &str) -> String {
        if self.aliases.is_empty() {
            return iri.to_string();
        }
        if let Some(hit) = self.cache.read().get(iri) {
            return hit.clone();
        }

        let compacted = self.compact(iri);
        self.cache.write().insert(iri.to_string(), compacted.clone());
        compacted
    }

    /// Expand a compacted key back into the full IRI.
    ///
    /// Accepts whole-term aliases and `prefix:local` keys. Keys that do not
    /// use a known alias are returned unchanged.
    pub fn expand(&self, key: &str) -> String {
        if let Some((_, iri)) = self.aliases.iter().find(|(alias, _)| alias == key) {
            return iri.clone();
        }
        if let Some((prefix, local)) = key.split_once(':') {
            if let Some((_, iri)) = self.aliases.iter().find(|(alias, _)| alias == prefix) {
                return format!("{}{}", iri, local);
            }
        }
        key.to_string()
    }

    /// Whether the IRI has already been resolved and memoized.
    pub fn is_cached(&self, iri: &str) -> bool {
        self.cache.read().contains_key(iri)
    }

    /// Number of memoized IRIs.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop all memoized results.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    fn compact(&self, iri: &str) -> String {
        // 1. Whole-term alias
        if let Some((alias, _)) = self.aliases.iter().find(|(_, value)| value == iri) {
            return alias.clone();
        }

        // 2. Fragment namespace: "http://ns#local" -> "prefix:local"
        if let Some(hash) = iri.find('#') {
            let namespace = &iri[..=hash];
            if let Some((alias, _)) = self.aliases.iter().find(|(_, value)| value == namespace) {
                return format!("{}:{}", alias, &iri[hash + 1..]);
            }
            return iri.to_string();
        }

        // 3. Longest matching prefix
        self.aliases
            .iter()
            .filter(|(_, value)| iri.starts_with(value.as_str()))
            .max_by_key(|(_, value)| value.len())
            .map(|(alias, value)| format!("{}:{}", alias, &iri[value.len()..]))
            .unwrap_or_else(|| iri.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> KeyResolver {
        let ctx = json!({
            "@base": "amf://id",
            "doc": "http://a.ml/vocabularies/document#",
            "shacl": "http://www.w3.org/ns/shacl#",
            "schema-org": "http://schema.org/",
            "schema-people": "http://schema.org/people/",
            "label": { "@id": "http://www.w3.org/2000/01/rdf-schema#label" }
        });
        KeyResolver::from_context(ctx.as_object().unwrap())
    }

    #[test]
    fn compacts_fragment_namespaces() {
        let keys = resolver();
        assert_eq!(keys.resolve("http://a.ml/vocabularies/document#declares"), "doc:declares");
        assert_eq!(keys.resolve("http://www.w3.org/ns/shacl#in"), "shacl:in");
    }

    #[test]
    fn exact_alias_wins() {
        let keys = resolver();
        assert_eq!(keys.resolve("http://www.w3.org/2000/01/rdf-schema#label"), "label");
    }

    #[test]
    fn path_iris_use_longest_prefix() {
        let keys = resolver();
        assert_eq!(keys.resolve("http://schema.org/name"), "schema-org:name");
        assert_eq!(keys.resolve("http://schema.org/people/age"), "schema-people:age");
    }

    #[test]
    fn unmatched_iris_pass_through() {
        let keys = resolver();
        assert_eq!(keys.resolve("http://example.org/x#y"), "http://example.org/x#y");
        assert_eq!(keys.resolve("urn:thing"), "urn:thing");
    }

    #[test]
    fn no_context_means_verbatim_keys() {
        let keys = KeyResolver::from_document(&json!({"@id": "doc"}));
        assert!(keys.is_empty());
        assert_eq!(keys.resolve("http://a.ml/vocabularies/document#encodes"), "http://a.ml/vocabularies/document#encodes");
        assert_eq!(keys.cached_len(), 0);
    }

    #[test]
    fn context_is_read_from_wrapped_document() {
        let keys = KeyResolver::from_document(&json!([{
            "@context": { "core": "http://a.ml/vocabularies/core#" }
        }]));
        assert_eq!(keys.resolve("http://a.ml/vocabularies/core#name"), "core:name");
    }

    #[test]
    fn second_resolution_is_served_from_cache() {
        let keys = resolver();
        let iri = "http://a.ml/vocabularies/document#encodes";
        assert!(!keys.is_cached(iri));
        let first = keys.resolve(iri);
        assert!(keys.is_cached(iri));
        assert_eq!(keys.cached_len(), 1);
        let second = keys.resolve(iri);
        assert_eq!(first, second);
        assert_eq!(keys.cached_len(), 1);

        keys.clear();
        assert!(!keys.is_cached(iri));
    }

    #[test]
    fn expand_reverses_compaction() {
        let keys = resolver();
        assert_eq!(keys.expand("doc:encodes"), "http://a.ml/vocabularies/document#encodes");
        assert_eq!(keys.expand("label"), "http://www.w3.org/2000/01/rdf-schema#label");
        assert_eq!(keys.expand("unknown:x"), "unknown:x");
    }
}
