use std::collections::BTreeMap;

/// The plain key/value result of a completed form.
///
/// Keys are variable names; values are strings (checkboxes as `"true"` /
/// `"false"`, dropdowns as the selected option's name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: BTreeMap<String, String>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set a property. `None` removes any previous value.
    pub fn set_property_value(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match value {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a property as a boolean (`"true"` is true, everything else false).
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all key/value pairs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Model {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_remove() {
        let mut model = Model::new();
        model.set_property_value("name", Some("sql2019".to_string()));
        model.set_property_value("eula", Some("true".to_string()));
        assert_eq!(model.get("name"), Some("sql2019"));
        assert!(model.get_bool("eula"));

        model.set_property_value("name", None);
        assert!(!model.contains("name"));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn collect_from_pairs() {
        let model: Model = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<_> = model.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
