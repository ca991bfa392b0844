//! # EdgeList
//!
//! The EdgeList-Format is a single line of comma-separated tokens. Each token (after trimming
//! whitespace) is one of
//! - `ab5` : an edge `a -> b` of weight `5` between two single-character vertices; the weight
//!   digits are optional (`ab` has weight `1`),
//! - `(from_to)` or `(from_to_weight)` : an edge between arbitrary labels; the weight may be
//!   any (also negative or fractional) number,
//! - `a` : a single character declaring an isolated vertex.
//!
//! Tokens of any other shape are dropped and reported as [`ParseIssue::MalformedEdgeToken`].
//! A weight that is not a finite number is replaced by [`DEFAULT_WEIGHT`] and reported as
//! [`ParseIssue::InvalidWeight`]; the rest of the input is still parsed.
//!
//! Edges are de-duplicated per `(source, target)` with the last declaration winning. For
//! undirected input, declaring `b -> a` also removes an earlier `a -> b`.

use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;

use super::*;

/// Result of parsing an edge list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedEdgeList {
    /// De-duplicated edges in order of their first declaration
    pub edges: Vec<WeightedEdge>,
    /// Vertices declared by single-character tokens, in declaration order
    pub vertices: Vec<Label>,
    /// Problems found in individual tokens
    pub issues: Vec<ParseIssue>,
}

impl ParsedEdgeList {
    /// Returns *true* if every token was understood as written
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A configurable parser for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListParser {
    /// Orientation used during de-duplication
    directed: bool,
    /// Convert all labels to uppercase
    uppercase_labels: bool,
}

impl Default for EdgeListParser {
    fn default() -> Self {
        Self {
            directed: true,
            uppercase_labels: false,
        }
    }
}

/// Outcome of parsing a single token
enum Token {
    Edge(WeightedEdge),
    Vertex(Label),
}

impl EdgeListParser {
    /// Creates a new (default) parser for directed input
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, `(u, v)` and `(v, u)` denote the same edge during de-duplication
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// If *true*, all labels are converted to uppercase
    pub fn uppercase_labels(mut self, uppercase: bool) -> Self {
        self.uppercase_labels = uppercase;
        self
    }

    /// Parses a complete edge list.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let parsed = EdgeListParser::new().parse("ab5, (b_c_2), ab7, d, x?");
    ///
    /// assert_eq!(
    ///     parsed.edges,
    ///     vec![WeightedEdge::new("a", "b", 7.0), WeightedEdge::new("b", "c", 2.0)]
    /// );
    /// assert_eq!(parsed.vertices, vec!["d".to_string()]);
    /// assert_eq!(parsed.issues.len(), 1);
    /// ```
    pub fn parse(&self, text: &str) -> ParsedEdgeList {
        let mut issues = Vec::new();
        let mut vertices: Vec<Label> = Vec::new();
        let mut unique: IndexMap<(Label, Label), WeightedEdge> = IndexMap::new();

        for raw in text.split(',') {
            let token = raw.trim();
            if token.is_empty() {
                continue;
            }

            match self.parse_token(token, &mut issues) {
                Some(Token::Edge(edge)) => {
                    let key = (edge.source.clone(), edge.target.clone());
                    let reverse_key = (edge.target.clone(), edge.source.clone());
                    let is_loop = edge.is_loop();

                    // an existing key keeps its position but takes the new value
                    unique.insert(key, edge);
                    if !self.directed && !is_loop {
                        unique.shift_remove(&reverse_key);
                    }
                }
                Some(Token::Vertex(label)) => {
                    if !vertices.contains(&label) {
                        vertices.push(label);
                    }
                }
                None => {}
            }
        }

        ParsedEdgeList {
            edges: unique.into_values().collect(),
            vertices,
            issues,
        }
    }

    /// Parses a comma-separated list of vertex labels (the explicit vertex superset).
    /// Empty entries and repeated labels are skipped.
    pub fn parse_vertices(&self, text: &str) -> Vec<Label> {
        text.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| self.label(t))
            .unique()
            .collect()
    }

    fn label(&self, raw: &str) -> Label {
        if self.uppercase_labels {
            raw.to_uppercase()
        } else {
            raw.to_string()
        }
    }

    /// Tries to parse a single trimmed, non-empty token and records issues
    fn parse_token(&self, token: &str, issues: &mut Vec<ParseIssue>) -> Option<Token> {
        if let Some((source, target, weight)) = split_shorthand(token) {
            let weight = self.weight(token, weight, issues);
            return Some(Token::Edge(WeightedEdge::new(
                self.label(source),
                self.label(target),
                weight,
            )));
        }

        if let Some((source, target, weight)) = split_parenthesized(token) {
            let weight = self.weight(token, weight, issues);
            return Some(Token::Edge(WeightedEdge::new(
                self.label(source),
                self.label(target),
                weight,
            )));
        }

        if token.chars().count() == 1 {
            return Some(Token::Vertex(self.label(token)));
        }

        let issue = ParseIssue::MalformedEdgeToken {
            token: token.to_string(),
        };
        warn!("{issue}");
        issues.push(issue);
        None
    }

    /// Interprets an optional weight string; unusable weights become [`DEFAULT_WEIGHT`]
    fn weight(&self, token: &str, weight: Option<&str>, issues: &mut Vec<ParseIssue>) -> Weight {
        let Some(raw) = weight else {
            return DEFAULT_WEIGHT;
        };

        match raw.parse::<Weight>() {
            Ok(w) if w.is_finite() => w,
            _ => {
                let issue = ParseIssue::InvalidWeight {
                    token: token.to_string(),
                    weight: DEFAULT_WEIGHT,
                };
                warn!("{issue}");
                issues.push(issue);
                DEFAULT_WEIGHT
            }
        }
    }
}

/// Splits `ab5` into `("a", "b", Some("5"))` and `ab` into `("a", "b", None)`
fn split_shorthand(token: &str) -> Option<(&str, &str, Option<&str>)> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphanumeric() || !bytes[1].is_ascii_alphanumeric() {
        return None;
    }

    let digits = &token[2..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((
        &token[0..1],
        &token[1..2],
        (!digits.is_empty()).then_some(digits),
    ))
}

/// Splits `(from_to_weight)` / `(from_to)` into its parts
fn split_parenthesized(token: &str) -> Option<(&str, &str, Option<&str>)> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let parts = inner.split('_').collect_vec();

    match parts.as_slice() {
        &[s, t] if is_label(s) && is_label(t) => Some((s, t, None)),
        &[s, t, w] if is_label(s) && is_label(t) => Some((s, t, Some(w))),
        _ => None,
    }
}

fn is_label(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '(' || c == ')')
}

/// Parses an edge list with default settings and returns only the edges.
///
/// Issues are logged and otherwise dropped; use [`EdgeListParser::parse`] to inspect them.
pub fn parse_edges(text: &str, directed: bool) -> Vec<WeightedEdge> {
    EdgeListParser::new().directed(directed).parse(text).edges
}

/// Parses a comma-separated vertex list with default settings
pub fn parse_vertices(text: &str) -> Vec<Label> {
    EdgeListParser::new().parse_vertices(text)
}

/// Inverse of [`parse_edges`]: renders each edge as `(source_target_weight)` joined by `", "`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let edges = vec![WeightedEdge::new("a", "b", 5.0), WeightedEdge::new("b", "c", 2.5)];
/// assert_eq!(stringify_edges(&edges), "(a_b_5), (b_c_2.5)");
/// assert_eq!(parse_edges(&stringify_edges(&edges), true), edges);
/// ```
pub fn stringify_edges(edges: &[WeightedEdge]) -> String {
    edges.iter().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn shorthand_and_parenthesized() {
        let parsed = EdgeListParser::new().parse(" ab5 ,(b_c), (city_town_12) , cd");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.edges,
            edges(&[
                ("a", "b", 5.0),
                ("b", "c", 1.0),
                ("city", "town", 12.0),
                ("c", "d", 1.0)
            ])
        );
    }

    #[test]
    fn last_declaration_wins() {
        assert_eq!(parse_edges("ab5, ab7", true), edges(&[("a", "b", 7.0)]));
        assert_eq!(
            parse_edges("ab5, bc1, ab7", true),
            edges(&[("a", "b", 7.0), ("b", "c", 1.0)])
        );
    }

    #[test]
    fn undirected_reverse_overwrites() {
        assert_eq!(parse_edges("ab5, ba3", false), edges(&[("b", "a", 3.0)]));
        assert_eq!(
            parse_edges("ab5, ba3", true),
            edges(&[("a", "b", 5.0), ("b", "a", 3.0)])
        );
    }

    #[test]
    fn self_loops_are_preserved() {
        for directed in [false, true] {
            assert_eq!(
                parse_edges("aa2, ab", directed),
                edges(&[("a", "a", 2.0), ("a", "b", 1.0)])
            );
        }
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let parsed = EdgeListParser::new().parse("ab1, a-b, (a_b_c_d), (x_), bc2");
        assert_eq!(parsed.edges, edges(&[("a", "b", 1.0), ("b", "c", 2.0)]));
        assert_eq!(
            parsed.issues.iter().map(|i| i.token()).collect_vec(),
            vec!["a-b", "(a_b_c_d)", "(x_)"]
        );
        assert!(
            parsed
                .issues
                .iter()
                .all(|i| matches!(i, ParseIssue::MalformedEdgeToken { .. }))
        );
    }

    #[test]
    fn invalid_weights_are_coerced() {
        let parsed = EdgeListParser::new().parse("(a_b_x), (b_c_), (c_d_-2.5), (d_e_NaN)");
        assert_eq!(
            parsed.edges,
            edges(&[("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", -2.5), ("d", "e", 1.0)])
        );
        assert_eq!(
            parsed.issues,
            vec![
                ParseIssue::InvalidWeight {
                    token: "(a_b_x)".to_string(),
                    weight: 1.0
                },
                ParseIssue::InvalidWeight {
                    token: "(b_c_)".to_string(),
                    weight: 1.0
                },
                ParseIssue::InvalidWeight {
                    token: "(d_e_NaN)".to_string(),
                    weight: 1.0
                },
            ]
        );
    }

    #[test]
    fn isolated_vertices() {
        let parsed = EdgeListParser::new().parse("a, bc, d, a,");
        assert_eq!(parsed.edges, edges(&[("b", "c", 1.0)]));
        assert_eq!(parsed.vertices, vec!["a", "d"]);
        assert!(parsed.is_clean());
    }

    #[test]
    fn uppercase_labels() {
        let parser = EdgeListParser::new().uppercase_labels(true);
        let parsed = parser.parse("ab3, (x_yz), q");
        assert_eq!(parsed.edges, edges(&[("A", "B", 3.0), ("X", "YZ", 1.0)]));
        assert_eq!(parsed.vertices, vec!["Q"]);
        assert_eq!(parser.parse_vertices("a, b ,, a"), vec!["A", "B"]);
    }

    #[test]
    fn empty_input() {
        let parsed = EdgeListParser::new().parse("   ");
        assert_eq!(parsed, ParsedEdgeList::default());
        assert!(parse_vertices("").is_empty());
    }

    #[test]
    fn round_trip() {
        let input = edges(&[
            ("a", "b", 5.0),
            ("b", "c", 2.5),
            ("c", "a", -2.0),
            ("long", "name", 1.0),
            ("a", "a", 3.0),
        ]);
        for directed in [false, true] {
            let text = stringify_edges(&input);
            assert_eq!(parse_edges(&text, directed), input);
            // idempotent on already de-duplicated input
            assert_eq!(stringify_edges(&parse_edges(&text, directed)), text);
        }
    }
}
