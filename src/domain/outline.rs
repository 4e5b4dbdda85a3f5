//! Parser for indented outline documents.
//!
//! An outline document holds one title per line; nesting is expressed with
//! two spaces of indentation per level:
//!
//! ```text
//! Data Science: The Hard Parts
//!   Metrics Design
//!     Desirable Properties of Metrics
//! ```
//!
//! Blank lines are ignored. The content comes in as a string; file loading
//! belongs to the application layer.

use tracing::instrument;

use crate::domain::arena::TocTree;
use crate::domain::error::{DomainError, DomainResult};

const INDENT_WIDTH: usize = 2;

/// Parses an indented outline document into a [`TocTree`].
///
/// # Errors
/// - indentation that is not a multiple of two spaces
/// - a level deeper than one below its predecessor
/// - a second top-level title (trees have a single root)
/// - an empty document
#[instrument(level = "debug", skip(content))]
pub fn parse_outline(content: &str) -> DomainResult<TocTree> {
    let mut tree = TocTree::new();
    // Stack of (level, node) from the root down to the last inserted node.
    let mut lineage = Vec::new();

    for (line_no, raw_line) in content.lines().enumerate() {
        let line = line_no + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        let indent = raw_line.len() - raw_line.trim_start_matches(' ').len();
        if indent % INDENT_WIDTH != 0 {
            return Err(DomainError::InvalidOutline {
                line,
                message: format!("indentation of {indent} spaces is not a multiple of {INDENT_WIDTH}"),
            });
        }
        let level = indent / INDENT_WIDTH;
        let title = raw_line.trim();

        if level == 0 {
            if tree.root().is_some() {
                return Err(DomainError::InvalidOutline {
                    line,
                    message: format!("second top-level title {title:?}; an outline has a single root"),
                });
            }
            let idx = tree.insert_node(title, None)?;
            lineage.push((level, idx));
            continue;
        }

        // Pop back to this line's parent level.
        while lineage.last().is_some_and(|&(l, _)| l >= level) {
            lineage.pop();
        }
        match lineage.last() {
            Some(&(parent_level, parent_idx)) if parent_level == level - 1 => {
                let idx = tree.insert_node(title, Some(parent_idx))?;
                lineage.push((level, idx));
            }
            _ => {
                return Err(DomainError::InvalidOutline {
                    line,
                    message: format!("level {level} has no parent at level {}", level - 1),
                });
            }
        }
    }

    if tree.is_empty() {
        return Err(DomainError::EmptyOutline);
    }
    Ok(tree)
}
