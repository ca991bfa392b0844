//! Helpers to write compact edge lists in unit tests

use crate::*;

/// Builds a list of weighted edges from `(source, target, weight)` triples
pub fn edges(list: &[(&str, &str, Weight)]) -> Vec<WeightedEdge> {
    list.iter()
        .map(|&(s, t, w)| WeightedEdge::new(s, t, w))
        .collect()
}

/// Builds a list of edges with [`DEFAULT_WEIGHT`] from `(source, target)` pairs
pub fn unweighted(list: &[(&str, &str)]) -> Vec<WeightedEdge> {
    list.iter()
        .map(|&(s, t)| WeightedEdge::unweighted(s, t))
        .collect()
}

/// Sorts the labels of each component and then the components themselves, so that results
/// can be compared independently of visitation order.
pub fn sorted_components(mut components: Vec<Vec<Label>>) -> Vec<Vec<Label>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort();
    components
}
