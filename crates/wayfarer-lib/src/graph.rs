/// Stable index of a vertex in the graph's arena. Indices are assigned in
/// database header order and never change for the lifetime of the graph.
pub type VertexId = usize;

/// Accumulated route cost. Weight arithmetic saturates at [`INFINITY`].
pub type Cost = u64;

/// Sentinel cost for "no known path"; strictly larger than any realizable
/// path cost, so plain `<` comparisons against it do the right thing.
pub const INFINITY: Cost = Cost::MAX;

/// Maximum number of places a map database may declare.
pub const MAX_VERTICES: usize = 50;

/// Maximum length of a place name in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Directed road from an implicit owner vertex to `target`, carrying the
/// opaque per-road payload read from the database. Weights are not stored
/// here; they are resolved from the payload at the start of each route
/// computation, so one graph can be evaluated under different cost criteria
/// without rebuilding.
#[derive(Debug, Clone)]
pub struct Edge<P> {
    pub target: VertexId,
    pub payload: P,
}

/// A named place and its outgoing roads, kept ascending by destination name.
#[derive(Debug, Clone)]
pub struct Vertex<P> {
    name: String,
    edges: Vec<Edge<P>>,
}

impl<P> Vertex<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing roads in ascending order of destination name.
    pub fn edges(&self) -> &[Edge<P>] {
        &self.edges
    }
}

/// Routing graph: an arena of named vertices owning their edge lists.
/// Immutable once the builder has populated it.
#[derive(Debug, Clone)]
pub struct Graph<P> {
    vertices: Vec<Vertex<P>>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<P> Graph<P> {
    /// Number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex<P> {
        &self.vertices[id]
    }

    pub fn name(&self, id: VertexId) -> &str {
        &self.vertices[id].name
    }

    /// Resolve a place name to its index by linear scan. The graph is small
    /// and bounded, so a lookup table would not pay for itself.
    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.name == name)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<P>> {
        self.vertices.iter()
    }

    pub(crate) fn push_vertex(&mut self, name: String) {
        self.vertices.push(Vertex {
            name,
            edges: Vec::new(),
        });
    }

    /// Insert a road at the position that keeps the owner's list ascending
    /// by destination name. Ordering is an insertion-time invariant, never a
    /// query-time sort.
    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId, payload: P) {
        let insert_at = {
            let to_name = self.vertices[to].name.as_str();
            self.vertices[from]
                .edges
                .iter()
                .position(|e| self.vertices[e.target].name.as_str() > to_name)
                .unwrap_or(self.vertices[from].edges.len())
        };
        self.vertices[from]
            .edges
            .insert(insert_at, Edge { target: to, payload });
    }
}
