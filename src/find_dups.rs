use crate::config::FindDupsConfig;
use crate::error::{CodesError, Result};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;

/// Unordered set of distinct tokens. Iteration order is whatever the
/// underlying hash set yields and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctWords {
    words: HashSet<String>,
}

impl DistinctWords {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns `false` when `word` was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn to_set(&self) -> HashSet<String> {
        self.words.clone()
    }

    /// `[a, b, c]` with `separator` between elements.
    pub fn render(&self, separator: &str) -> String {
        let joined = self.iter().collect::<Vec<_>>().join(separator);
        format!("[{}]", joined)
    }
}

impl<S: Into<String>> FromIterator<S> for DistinctWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for DistinctWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DupsReport {
    pub count: usize,
    pub distinct: HashSet<String>,
    pub removed: String,
    pub remaining: HashSet<String>,
}

/// Tokens that appear more than once in `args`.
pub fn duplicates(args: &[String]) -> HashSet<String> {
    let mut seen = HashSet::new();
    args.iter()
        .filter(|arg| !seen.insert(arg.as_str()))
        .cloned()
        .collect()
}

/// Prints the distinct set of `args`, removes `args[0]` from it, then
/// prints each remaining word on its own line.
pub fn find_dups<W: Write>(
    args: &[String],
    config: &FindDupsConfig,
    out: &mut W,
) -> Result<DupsReport> {
    let first = args.first().ok_or(CodesError::MissingArgument)?;

    let mut words: DistinctWords = args.iter().map(String::as_str).collect();
    let distinct = words.to_set();
    writeln!(out, "{} distinct words: {}", words.len(), words.render(&config.separator))?;

    if !words.remove(first) {
        log::warn!("'{}' was not in the distinct set", first);
    }
    for word in words.iter() {
        writeln!(out, "{}", word)?;
    }

    Ok(DupsReport {
        count: distinct.len(),
        distinct,
        removed: first.clone(),
        remaining: words.to_set(),
    })
}
