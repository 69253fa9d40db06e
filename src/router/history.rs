/// Navigation entries with push/replace semantics.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Add an entry after the current one.
    pub fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    /// Overwrite the current entry, or record the first one.
    pub fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(entry) => *entry = path.to_string(),
            None => self.push(path),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends() {
        let mut history = History::default();
        assert_eq!(history.current(), None);
        history.push("/a");
        history.push("/b");
        assert_eq!(history.current(), Some("/b"));
        assert_eq!(history.entries(), ["/a", "/b"]);
    }

    #[test]
    fn test_replace_overwrites_current() {
        let mut history = History::default();
        history.replace("/");
        assert_eq!(history.entries(), ["/"]);

        history.push("/a");
        history.replace("/b");
        assert_eq!(history.entries(), ["/", "/b"]);
    }
}
