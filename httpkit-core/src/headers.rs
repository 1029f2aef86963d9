/// Ordered multimap of HTTP header names to values.
///
/// Names compare case-insensitively (ASCII), per HTTP convention. The overall
/// insertion order of (name, value) pairs is preserved, and the outbound
/// request replays it identically, including repeated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `name`, keeping any values already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values for `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of (name, value) pairs, repeated names counted once per value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.append("Content-Type", "text/plain");
        assert_eq!(headers.get("content-type"), Some("text/plain"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/plain"));
        assert!(headers.contains("Content-type"));
        assert!(!headers.contains("Accept"));
    }

    #[test]
    fn get_returns_first_value() {
        let mut headers = HeaderMap::new();
        headers.append("X-Test", "1");
        headers.append("X-Test", "2");
        assert_eq!(headers.get("x-test"), Some("1"));
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.append("X-Test", "1");
        headers.append("Accept", "*/*");
        headers.append("x-test", "2");
        let values: Vec<&str> = headers.get_all("X-Test").collect();
        assert_eq!(values, ["1", "2"]);
    }

    #[test]
    fn iter_preserves_overall_order() {
        let headers: HeaderMap = [("B", "2"), ("A", "1"), ("B", "3")].into_iter().collect();
        let pairs: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(pairs, [("B", "2"), ("A", "1"), ("B", "3")]);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn empty_map() {
        let headers = HeaderMap::new();
        assert!(headers.is_empty());
        assert_eq!(headers.get_all("anything").count(), 0);
    }
}
