//! Mapping entity binding a short alias to its target URL.

/// A persisted alias mapping.
///
/// `id` is assigned by the storage engine and never reused, even after the
/// mapping is deleted. The alias is immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping.
///
/// The alias must already be final (caller-chosen or generated); the store
/// never invents one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub alias: String,
    pub url: String,
}

impl NewMapping {
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
        }
    }

    /// Attaches the engine-assigned id, producing the stored entity.
    pub fn into_mapping(self, id: i64) -> Mapping {
        Mapping::new(id, self.alias, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_into_mapping() {
        let new_mapping = NewMapping::new("ex1", "https://example.com/a/b");
        let mapping = new_mapping.into_mapping(7);

        assert_eq!(mapping.id, 7);
        assert_eq!(mapping.alias, "ex1");
        assert_eq!(mapping.url, "https://example.com/a/b");
    }
}
