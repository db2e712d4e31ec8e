//! Indentation folding
//!
//! The format nests exactly one level per fold: a non-indented line opens a
//! new fold and every indented line after it joins that fold's body with one
//! indentation unit removed. Deeper nesting stays in the body text and is
//! folded again by the next pass, so the same routine splits a document into
//! sections and a section body into attributes.

/// A header line and the lines nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub header: String,
    pub body: Vec<String>,
}

impl Fold {
    pub fn new(header: impl Into<String>) -> Self {
        Fold {
            header: header.into(),
            body: Vec::new(),
        }
    }
}

/// Indentation predicate used by bandplan documents: two spaces or one tab.
///
/// Returns the line with one unit removed, or `None` when it is not indented.
pub fn dedent_once(line: &str) -> Option<&str> {
    line.strip_prefix("  ").or_else(|| line.strip_prefix('\t'))
}

/// Fold `lines` by indentation.
///
/// Indented lines that appear before any header have nowhere to go and are
/// dropped; [`global_attributes`] collects them separately.
pub fn fold_by_indentation<S: AsRef<str>>(
    lines: &[S],
    dedent: fn(&str) -> Option<&str>,
) -> Vec<Fold> {
    lines.iter().fold(Vec::new(), |mut folds: Vec<Fold>, line| {
        let line = line.as_ref();
        match dedent(line) {
            Some(nested) => {
                if let Some(current) = folds.last_mut() {
                    current.body.push(nested.to_string());
                }
            }
            None => folds.push(Fold::new(line)),
        }
        folds
    })
}

/// Indented lines preceding the first header, dedented once.
///
/// These are inherited by every section of the document.
pub fn global_attributes<S: AsRef<str>>(
    lines: &[S],
    dedent: fn(&str) -> Option<&str>,
) -> Vec<String> {
    lines
        .iter()
        .map_while(|line| dedent(line.as_ref()))
        .map(str::to_string)
        .collect()
}
