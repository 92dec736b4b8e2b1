use std::fmt;

pub const MAX_HISTORY_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub a: i32,
    pub symbol: String,
    pub b: i32,
    pub result: i32,
}

impl HistoryEntry {
    pub fn new(a: i32, symbol: &str, b: i32, result: i32) -> Self {
        Self {
            a,
            symbol: symbol.to_string(),
            b,
            result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.a, self.symbol, self.b, self.result)
    }
}

/// Most-recent-first log, capped at `MAX_HISTORY_SIZE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_SIZE);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
