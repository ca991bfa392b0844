/*!
# IO

Utilities for reading graphs from text and writing results back as text.

## Input Format

- **EdgeList**: A single line of comma-separated edge tokens such as `ab5` or `(from_to_weight)`,
  see [`edge_list`] for the exact grammar. [`EdgeListParser`] reports problems per token instead
  of failing, and [`stringify_edges`] writes edges back in a form the parser reads unchanged.

## Output Formats

- **Report**: [`ReportWriter`] renders the result of any algorithm as plain text: orderings,
  distance tables, components.
*/

pub mod edge_list;
pub mod report;

use crate::prelude::*;

pub use edge_list::*;
pub use report::*;
