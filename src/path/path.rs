//! The path type.

use serde::Serialize;

/// Path identifies a location within a nested document as an ordered
/// sequence of map keys, root-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates a new empty path (the document root).
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Creates a path from a vector of segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Path { segments }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the segment at the given depth, if any.
    pub fn segment(&self, i: usize) -> Option<&str> {
        self.segments.get(i).map(String::as_str)
    }

    /// Returns the last path segment.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: impl Into<String>) -> Self {
        let mut new_path = self.clone();
        new_path.push(segment);
        new_path
    }

    /// Returns true if every component of `prefix` matches this path
    /// component-wise from the root. A prefix longer than the path never
    /// matches.
    pub fn starts_with<S: AsRef<str>>(&self, prefix: &[S]) -> bool {
        if prefix.len() > self.segments.len() {
            return false;
        }
        prefix
            .iter()
            .zip(self.segments.iter())
            .all(|(p, s)| p.as_ref() == s)
    }

    /// Returns a slice of the path segments.
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }
}

impl FromIterator<String> for Path {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Path {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().map(String::from).collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_operations() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push("services");
        path.push("web");
        assert_eq!(path.len(), 2);
        assert_eq!(path.segment(1), Some("web"));
        assert_eq!(path.last(), Some("web"));

        let child = path.with("image");
        assert_eq!(child.len(), 3);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_path_starts_with() {
        let path: Path = ["services", "web", "image"].into_iter().collect();

        assert!(path.starts_with::<&str>(&[]));
        assert!(path.starts_with(&["services"]));
        assert!(path.starts_with(&["services", "web"]));
        assert!(path.starts_with(&["services", "web", "image"]));
        assert!(!path.starts_with(&["services", "db"]));
        // A prefix longer than the path is skipped, not an error.
        assert!(!path.starts_with(&["services", "web", "image", "tag"]));
    }

    #[test]
    fn test_path_display() {
        let path: Path = ["services", "web"].into_iter().collect();
        assert_eq!(format!("{}", path), ".services.web");
        assert_eq!(format!("{}", Path::new()), "");
    }
}
