use super::KnowledgeError;

/// Immutable, insertion-ordered mapping from a string key to a record.
///
/// Lookups are linear; registries hold a handful of entries and iteration
/// order is part of every rendered listing.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    /// Build a registry from `(key, value)` pairs, keeping their order.
    ///
    /// Fails on the first repeated key.
    pub fn from_entries<I, K>(kind: &'static str, entries: I) -> Result<Self, KnowledgeError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut out: Vec<(String, T)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            if out.iter().any(|(existing, _)| *existing == key) {
                return Err(KnowledgeError::DuplicateKey { kind, key });
            }
            out.push((key, value));
        }
        Ok(Self { entries: out })
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys joined with `", "`, as used in not-found messages.
    pub fn key_list(&self) -> String {
        self.keys().collect::<Vec<_>>().join(", ")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let reg = Registry::from_entries("letter", vec![("c", 3), ("a", 1), ("b", 2)]).unwrap();
        let keys: Vec<&str> = reg.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(reg.key_list(), "c, a, b");
    }

    #[test]
    fn lookup_is_exact() {
        let reg = Registry::from_entries("letter", vec![("alpha", 1)]).unwrap();
        assert_eq!(reg.get("alpha"), Some(&1));
        assert_eq!(reg.get("Alpha"), None);
        assert_eq!(reg.get("alph"), None);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = Registry::from_entries("letter", vec![("a", 1), ("a", 2)]).unwrap_err();
        match err {
            KnowledgeError::DuplicateKey { kind, key } => {
                assert_eq!(kind, "letter");
                assert_eq!(key, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_registry() {
        let reg: Registry<u8> = Registry::from_entries("none", Vec::<(String, u8)>::new()).unwrap();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.key_list(), "");
    }
}
