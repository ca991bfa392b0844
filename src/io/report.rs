//! # Report
//!
//! Plain-text rendering of [`AlgorithmOutput`]s. For example, the shortest paths computed by
//! Dijkstra's algorithm from `a` on `(a_b_1), (b_c_2)` with an isolated vertex `d` are written as
//! ```text
//! Dijkstra's with a as source node:
//! Vertex | Distance | Path
//! a | 0 | a
//! b | 1 | a → b
//! c | 3 | a → b → c
//! d | ∞ | unreachable
//! ```
//! Orderings are written on one line, components one per line.
use std::io::{Result, Write};

use itertools::Itertools;

use super::*;
use crate::algo::{Algorithm, AlgorithmOutput, PathEntry};

/// A writer for algorithm results
#[derive(Debug, Clone)]
pub struct ReportWriter {
    /// Separator between consecutive vertices of a path (default: ` → `)
    path_separator: String,
    /// Distance of unreachable vertices (default: `∞`)
    infinity_symbol: String,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            path_separator: " → ".to_string(),
            infinity_symbol: "∞".to_string(),
        }
    }
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator written between the vertices of a path
    pub fn path_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Sets the symbol written as distance of unreachable vertices
    pub fn infinity_symbol<S: Into<String>>(mut self, symbol: S) -> Self {
        self.infinity_symbol = symbol.into();
        self
    }

    /// Writes a heading line naming the algorithm and the start vertex if there is one
    pub fn write_heading<W>(
        &self,
        writer: &mut W,
        algorithm: Algorithm,
        start: Option<&str>,
    ) -> Result<()>
    where
        W: Write,
    {
        match start {
            Some(start) => writeln!(writer, "{} with {start} as source node:", algorithm.text()),
            None => writeln!(writer, "{}:", algorithm.text()),
        }
    }

    /// Writes the result of an algorithm
    pub fn write_output<W>(&self, writer: &mut W, output: &AlgorithmOutput) -> Result<()>
    where
        W: Write,
    {
        match output {
            AlgorithmOutput::Order(order) => writeln!(writer, "{}", order.iter().join(", ")),
            AlgorithmOutput::Distances(paths) => self.write_table(writer, paths.entries()),
            AlgorithmOutput::AllPairs(table) => {
                for source in table.vertices() {
                    writeln!(writer, "From: {source}")?;
                    self.write_table(writer, table.entries_from(source).into_iter().flatten())?;
                }
                Ok(())
            }
            AlgorithmOutput::SpanningTree(None) => writeln!(writer, "Graph is empty."),
            AlgorithmOutput::SpanningTree(Some(tree)) => {
                if tree.weights_ignored {
                    writeln!(
                        writer,
                        "Graph is unweighted; all weights are treated as {DEFAULT_WEIGHT}."
                    )?;
                }
                writeln!(writer, "{}", stringify_edges(&tree.edges))?;
                writeln!(writer, "Total weight: {}", tree.total_weight)
            }
            AlgorithmOutput::Components(components) => {
                for comp in components {
                    writeln!(writer, "{{{}}}", comp.iter().join(", "))?;
                }
                Ok(())
            }
            AlgorithmOutput::Blocks(blocks) => {
                for comp in &blocks.components {
                    writeln!(writer, "{}", stringify_edges(comp))?;
                }
                if blocks.articulation_points.is_empty() {
                    writeln!(writer, "Articulation points: none")
                } else {
                    writeln!(
                        writer,
                        "Articulation points: {}",
                        blocks.articulation_points.iter().join(", ")
                    )
                }
            }
        }
    }

    /// Writes heading and result
    pub fn write_report<W>(
        &self,
        writer: &mut W,
        algorithm: Algorithm,
        start: Option<&str>,
        output: &AlgorithmOutput,
    ) -> Result<()>
    where
        W: Write,
    {
        self.write_heading(writer, algorithm, start)?;
        self.write_output(writer, output)
    }

    fn write_table<'a, W, I>(&self, writer: &mut W, entries: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = PathEntry<'a>>,
    {
        writeln!(writer, "Vertex | Distance | Path")?;
        for entry in entries {
            match (entry.distance, entry.path) {
                (Some(d), Some(path)) => writeln!(
                    writer,
                    "{} | {d} | {}",
                    entry.vertex,
                    path.join(self.path_separator.as_str())
                )?,
                _ => writeln!(
                    writer,
                    "{} | {} | unreachable",
                    entry.vertex, self.infinity_symbol
                )?,
            }
        }
        Ok(())
    }
}
