use crate::sketch::{EXEC_IN, Edge, EdgeKind, Node, SketchGraph};
use ahash::AHashMap;

/// Lookup tables over a graph snapshot, built once per compilation.
///
/// Edges naming a node that does not exist are kept but never resolve, so
/// they behave as if they were absent.
pub(super) struct GraphIndex<'g> {
    nodes: AHashMap<&'g str, &'g Node>,
    /// `(target, target_handle)` to the first edge feeding it.
    inbound: AHashMap<(&'g str, &'g str), &'g Edge>,
    /// Execution successors of each node, in edge order.
    exec_targets: AHashMap<&'g str, Vec<&'g str>>,
    /// Producers feeding each node's non-execution inputs, in edge order.
    data_sources: AHashMap<&'g str, Vec<&'g str>>,
    /// `(source, source_handle)` pairs that have at least one outgoing data edge.
    data_outputs: AHashMap<(&'g str, &'g str), usize>,
}

impl<'g> GraphIndex<'g> {
    pub(super) fn new(graph: &'g SketchGraph) -> Self {
        let mut nodes: AHashMap<&str, &Node> = AHashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            nodes.entry(node.id.as_str()).or_insert(node);
        }

        let mut inbound = AHashMap::new();
        let mut exec_targets: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut data_sources: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut data_outputs = AHashMap::new();

        for edge in &graph.edges {
            inbound
                .entry((edge.target.as_str(), edge.target_handle.as_str()))
                .or_insert(edge);

            if edge.target_handle != EXEC_IN {
                data_sources
                    .entry(edge.target.as_str())
                    .or_default()
                    .push(edge.source.as_str());
            }

            match edge.kind() {
                EdgeKind::Execution => exec_targets
                    .entry(edge.source.as_str())
                    .or_default()
                    .push(edge.target.as_str()),
                EdgeKind::Data => {
                    *data_outputs
                        .entry((edge.source.as_str(), edge.source_handle.as_str()))
                        .or_insert(0) += 1;
                }
            }
        }

        Self {
            nodes,
            inbound,
            exec_targets,
            data_sources,
            data_outputs,
        }
    }

    pub(super) fn node(&self, id: &str) -> Option<&'g Node> {
        self.nodes.get(id).copied()
    }

    pub(super) fn inbound(&self, node_id: &str, port_id: &str) -> Option<&'g Edge> {
        self.inbound.get(&(node_id, port_id)).copied()
    }

    pub(super) fn exec_targets(&self, node_id: &str) -> &[&'g str] {
        self.exec_targets.get(node_id).map_or(&[], Vec::as_slice)
    }

    pub(super) fn data_sources(&self, node_id: &str) -> &[&'g str] {
        self.data_sources.get(node_id).map_or(&[], Vec::as_slice)
    }

    /// Whether the output `port_id` of `node_id` feeds at least one data edge.
    pub(super) fn has_consumer(&self, node_id: &str, port_id: &str) -> bool {
        self.data_outputs.contains_key(&(node_id, port_id))
    }

    /// Whether any output of `node_id` feeds a data edge.
    pub(super) fn feeds_data(&self, node_id: &str) -> bool {
        self.data_outputs.keys().any(|(source, _)| *source == node_id)
    }
}
