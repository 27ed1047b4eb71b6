//! ClassList (DOMTokenList for `class`)
//!
//! Ordered, duplicate-free list of class tokens.

/// Ordered set of space-separated class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a `class` attribute value
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|s| s.as_str())
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; returns `false` if it was empty or already present
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || token.contains(char::is_whitespace) || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns whether it was present
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        before != self.tokens.len()
    }

    /// Serialised attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Iterate over tokens in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let list = ClassList::from_string("  lcsColor_red   card  ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.item(0), Some("lcsColor_red"));
        assert_eq!(list.item(1), Some("card"));
    }

    #[test]
    fn test_from_string_drops_duplicates() {
        let list = ClassList::from_string("a b a");
        assert_eq!(list.value(), "a b");
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        assert!(list.add("_Color_red"));
        assert!(!list.add("_Color_red"));
        assert!(!list.add(""));
        assert!(!list.add("two words"));
        assert_eq!(list.len(), 1);

        assert!(list.remove("_Color_red"));
        assert!(!list.remove("_Color_red"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_display() {
        let list = ClassList::from_string("x y");
        assert_eq!(list.to_string(), "x y");
    }
}
