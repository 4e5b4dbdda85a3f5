//! Built-in sample table of contents.

use crate::domain::arena::TocTree;
use crate::domain::outline::parse_outline;

const SAMPLE_OUTLINE: &str = "\
Data Science: The Hard Parts
  So What? Creating Value with Data Science
    What Is Value?
    Understanding the Business
    Measuring Value
  Metrics Design
    Desirable Properties of Metrics
      Measurable
      Actionable
      Relevant
  Growth Decompositions
    Additive Decomposition
    Multiplicative Decomposition
";

/// Sample TOC for "Data Science: The Hard Parts", used as the default tree
/// when no outline file is given and as a fixture in tests.
///
/// The tree has height 3; "Metrics Design" sits at depth 1.
pub fn sample_toc() -> TocTree {
    parse_outline(SAMPLE_OUTLINE).expect("built-in outline is well formed")
}
