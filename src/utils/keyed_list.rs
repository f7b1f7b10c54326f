use std::collections::HashMap;

/// A string-keyed map that iterates in insertion order.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// the position of its first insertion while the last value wins.
#[derive(Debug, Clone)]
pub struct KeyedList<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> KeyedList<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace a value, returning the previous one if any
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for KeyedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for KeyedList<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (key, value) in iter {
            list.insert(key, value);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_insertion_order() {
        let mut list = KeyedList::new();
        list.insert("zeta".to_string(), 1);
        list.insert("alpha".to_string(), 2);
        list.insert("mid".to_string(), 3);

        let keys: Vec<&str> = list.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let mut list = KeyedList::new();
        assert!(list.insert("a".to_string(), 1).is_none());
        list.insert("b".to_string(), 2);
        assert_eq!(list.insert("a".to_string(), 3), Some(1));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("a"), Some(&3));
        // Replaced key keeps its original position
        let keys: Vec<&str> = list.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_key() {
        let list: KeyedList<u32> = KeyedList::default();
        assert!(list.is_empty());
        assert!(!list.contains_key("nope"));
        assert!(list.get("nope").is_none());
    }
}
