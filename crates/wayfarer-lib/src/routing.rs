//! Single-source shortest paths over a map graph.
//!
//! This module provides:
//! - [`shortest_paths`] - Dijkstra's algorithm with an indexed decrease-key heap
//! - [`ShortestPathTree`] - Per-run cost/parent result with path reconstruction
//!
//! Weights are resolved from each edge's payload by the injected cost
//! function at the start of every run, never at build time and never cached
//! across runs, so the same graph can be evaluated under different criteria.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, VertexId, INFINITY};
use crate::heap::CostHeap;

/// Result of one shortest-path run: the tree of least-cost routes from the
/// source to every reachable vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    cost: Vec<Cost>,
    parent: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Accumulated cost to reach `vertex`; [`INFINITY`] when unreached.
    pub fn cost(&self, vertex: VertexId) -> Cost {
        self.cost[vertex]
    }

    /// Predecessor of `vertex` on its least-cost route; `None` for the
    /// source and for unreached vertices.
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent[vertex]
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.cost[vertex] != INFINITY
    }

    /// Reconstruct the route to `vertex` in source-to-destination order by
    /// walking parent links and reversing. For an unreached vertex the
    /// result is just the vertex itself.
    pub fn path_to(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Compute least-cost routes from the place named `start` to every other
/// place in the graph.
///
/// `weight` maps an edge's payload to its cost for this run and is invoked
/// exactly once per edge. Fails only with [`Error::UnknownStart`] when
/// `start` does not name a vertex.
pub fn shortest_paths<P>(
    graph: &Graph<P>,
    start: &str,
    weight: impl Fn(&P) -> Cost,
) -> Result<ShortestPathTree> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::UnknownStart {
            name: start.to_string(),
        })?;

    // Resolve every edge's weight for this run up front.
    let weights: Vec<Vec<Cost>> = graph
        .vertices()
        .map(|vertex| vertex.edges().iter().map(|e| weight(&e.payload)).collect())
        .collect();

    let mut cost = vec![INFINITY; graph.len()];
    let mut parent: Vec<Option<VertexId>> = vec![None; graph.len()];
    cost[source] = 0;

    let mut heap = CostHeap::with_source(graph.len(), source);
    let mut settled = 0usize;

    while let Some(u) = heap.peek() {
        // The cheapest active vertex is unreached, so everything still in
        // the heap is unreachable from the source.
        if cost[u] == INFINITY {
            break;
        }
        heap.pop(&cost);
        settled += 1;

        for (edge, &edge_cost) in graph.vertex(u).edges().iter().zip(&weights[u]) {
            let through = cost[u].saturating_add(edge_cost);
            if through < cost[edge.target] {
                cost[edge.target] = through;
                parent[edge.target] = Some(u);
                heap.decrease(edge.target, &cost);
            }
        }
    }

    debug!(
        "shortest paths from {}: settled {} of {} places",
        start,
        settled,
        graph.len()
    );

    Ok(ShortestPathTree {
        source,
        cost,
        parent,
    })
}
