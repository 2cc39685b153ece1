use std::collections::HashSet;

/// One crawled page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
}

impl LinkRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Append-only, insertion-ordered set of [`LinkRecord`]s keyed by URL.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    records: Vec<LinkRecord>,
    index: HashSet<String>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains(url)
    }

    /// Adds the record unless its URL is already present. Returns whether it
    /// was added.
    pub fn append(&mut self, record: LinkRecord) -> bool {
        if !self.index.insert(record.url.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<LinkRecord> {
        self.records
    }
}
