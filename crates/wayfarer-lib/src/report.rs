//! Rendering of a shortest-path run as a per-place report.

use std::fmt;

use serde::Serialize;

use crate::graph::{Cost, Graph};
use crate::routing::ShortestPathTree;

/// One place's line in the report: its cost from the start (absent when
/// unreached) and the route to it in source-to-destination order. An
/// unreached place reports just its own name.
#[derive(Debug, Clone, Serialize)]
pub struct PathEntry {
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    pub path: Vec<String>,
}

/// Full cost/route report for every place in the graph, from one start.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub start: String,
    pub entries: Vec<PathEntry>,
}

impl PathReport {
    /// Build the report for `tree` by reconstructing every place's route.
    pub fn new<P>(graph: &Graph<P>, tree: &ShortestPathTree) -> Self {
        let entries = (0..graph.len())
            .map(|v| PathEntry {
                place: graph.name(v).to_string(),
                cost: tree.is_reachable(v).then(|| tree.cost(v)),
                path: tree
                    .path_to(v)
                    .into_iter()
                    .map(|id| graph.name(id).to_string())
                    .collect(),
            })
            .collect();
        Self {
            start: graph.name(tree.source()).to_string(),
            entries,
        }
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "From {} to...", self.start)?;
        for entry in &self.entries {
            let cost = match entry.cost {
                Some(cost) => cost.to_string(),
                None => "unreachable".to_string(),
            };
            writeln!(
                f,
                "   {:<20} is {:>11}  ({})",
                entry.place,
                cost,
                entry.path.join("->")
            )?;
        }
        Ok(())
    }
}
