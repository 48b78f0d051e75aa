//! Case-insensitive keyword search with positional context extraction.
//!
//! A document is considered only if its whole body contains the query. Each
//! matching line then contributes a window of surrounding lines. There is no
//! ranking: output follows registry order and line order.

use std::fmt;

use super::documents::DocumentRegistry;

/// Lines of context kept on each side of a matching line.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Windows kept per document.
pub const DEFAULT_MAX_WINDOWS: usize = 3;

const WINDOW_SEPARATOR: &str = "\n...\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub context_lines: usize,
    pub max_windows: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            max_windows: DEFAULT_MAX_WINDOWS,
        }
    }
}

/// Context windows extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHits<'a> {
    pub document: &'a str,
    pub windows: Vec<String>,
}

/// Result of a search; `Display` produces the text returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    pub query: &'a str,
    pub hits: Vec<DocumentHits<'a>>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl fmt::Display for SearchOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return write!(
                f,
                "No documentation found matching '{}'. Try different keywords.",
                self.query
            );
        }

        f.write_str("# Search Results\n\n")?;
        for (i, hit) in self.hits.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(
                f,
                "## From {}:\n{}",
                hit.document,
                hit.windows.join(WINDOW_SEPARATOR)
            )?;
        }
        Ok(())
    }
}

/// Scan every document for `query`.
///
/// The whole-body check runs before the per-line scan. A query that only
/// occurs across a line break passes the first check and then yields no
/// windows, so that document is left out of the results.
pub fn search<'a>(
    documents: &'a DocumentRegistry,
    query: &'a str,
    options: &SearchOptions,
) -> SearchOutcome<'a> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for (name, doc) in documents.iter() {
        if !doc.body.to_lowercase().contains(&needle) {
            continue;
        }

        let lines: Vec<&str> = doc.body.split('\n').collect();
        let windows: Vec<String> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&needle))
            .take(options.max_windows)
            .map(|(index, _)| context_window(&lines, index, options.context_lines))
            .collect();

        if windows.is_empty() {
            tracing::debug!(document = name, "query only matches across a line break; skipped");
            continue;
        }

        hits.push(DocumentHits {
            document: name,
            windows,
        });
    }

    tracing::debug!(query, documents = hits.len(), "keyword search finished");
    SearchOutcome { query, hits }
}

/// Lines `index - radius ..= index + radius`, clipped to the document.
fn context_window(lines: &[&str], index: usize, radius: usize) -> String {
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).saturating_add(1).min(lines.len());
    lines[start..end].join("\n")
}
