use super::index::GraphIndex;
use crate::sketch::{FUNCTION_OUTPUT_PORT, FunctionCall, Node, NodeKind, Port};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Builds call expressions for function nodes and resolves their arguments.
///
/// Holds the state shared across one compilation: the expressions already
/// computed for `(node, output port)` pairs and the include directives seen
/// so far, in first-seen order.
pub(super) struct ExpressionBuilder<'i, 'g> {
    index: &'i GraphIndex<'g>,
    cache: AHashMap<(String, String), String>,
    includes: Vec<String>,
}

impl<'i, 'g> ExpressionBuilder<'i, 'g> {
    pub(super) fn new(index: &'i GraphIndex<'g>) -> Self {
        Self {
            index,
            cache: AHashMap::new(),
            includes: Vec::new(),
        }
    }

    /// Makes reads of `(node_id, port_id)` resolve to `expression`.
    pub(super) fn bind(&mut self, node_id: &str, port_id: &str, expression: String) {
        self.cache
            .insert((node_id.to_string(), port_id.to_string()), expression);
    }

    fn cached(&self, node_id: &str, port_id: &str) -> Option<&String> {
        self.cache.get(&(node_id.to_string(), port_id.to_string()))
    }

    fn require_include(&mut self, call: &FunctionCall) {
        if let Some(include) = call.include.as_deref().map(str::trim).filter(|i| !i.is_empty()) {
            if !self.includes.iter().any(|i| i == include) {
                self.includes.push(include.to_string());
            }
        }
    }

    /// Emits the call statement for a function node reached by control flow.
    ///
    /// When one of the node's non-void outputs feeds a data edge, the call
    /// expression is cached so consumers reuse it instead of calling again.
    pub(super) fn emit_call(&mut self, node: &'g Node, call: &FunctionCall) -> String {
        let mut path = AHashSet::new();
        path.insert(node.id.as_str());

        let expression = self.call_expression(node, call, &mut path);

        for port in &node.outputs {
            if !port.value_type.is_void() && self.index.has_consumer(&node.id, &port.id) {
                self.bind(&node.id, &port.id, expression.clone());
            }
        }

        format!("{};", expression)
    }

    /// Computes and caches the expression of a function node that no procedure reaches.
    pub(super) fn precompute(&mut self, node: &'g Node, call: &FunctionCall) {
        let mut path = AHashSet::new();
        path.insert(node.id.as_str());

        let expression = self.call_expression(node, call, &mut path);
        let port_id = node
            .outputs
            .first()
            .map_or(FUNCTION_OUTPUT_PORT, |p| p.id.as_str());
        self.bind(&node.id, port_id, expression);
    }

    fn call_expression(
        &mut self,
        node: &'g Node,
        call: &FunctionCall,
        path: &mut AHashSet<&'g str>,
    ) -> String {
        self.require_include(call);
        let args = node
            .inputs
            .iter()
            .map(|port| self.resolve_input(node, port, path))
            .collect_vec();
        format!("{}({})", call.call_name, args.join(", "))
    }

    /// Resolves the argument expression for one input port.
    ///
    /// Order: cached upstream expression, expression rebuilt from the upstream
    /// node, the port literal, the type's zero value. A connection that cannot
    /// be resolved (missing node, entry point, cycle) falls through to the
    /// literal and zero value.
    fn resolve_input(
        &mut self,
        node: &'g Node,
        port: &'g Port,
        path: &mut AHashSet<&'g str>,
    ) -> String {
        if let Some(edge) = self.index.inbound(&node.id, &port.id) {
            if let Some(cached) = self.cached(&edge.source, &edge.source_handle) {
                return cached.clone();
            }
            if let Some(expression) = self
                .index
                .node(&edge.source)
                .and_then(|source| self.build_expression(source, path))
            {
                return expression;
            }
            log::trace!(
                "Input '{}' of '{}' is connected but unresolved; using fallback",
                port.id,
                node.id
            );
        }

        port.literal()
            .unwrap_or_else(|| port.value_type.zero_value())
            .to_string()
    }

    /// Rebuilds the value expression of an upstream node.
    ///
    /// `path` holds the nodes currently being expanded for this root, so a data
    /// cycle is cut at the first repeated node.
    fn build_expression(&mut self, node: &'g Node, path: &mut AHashSet<&'g str>) -> Option<String> {
        match &node.kind {
            NodeKind::Variable(decl) if !decl.name.is_empty() => Some(decl.name.clone()),
            NodeKind::Function(call) => {
                if !path.insert(node.id.as_str()) {
                    return None;
                }
                let expression = self.call_expression(node, call, path);
                path.remove(node.id.as_str());
                Some(expression)
            }
            _ => None,
        }
    }

    pub(super) fn into_parts(self) -> (Vec<String>, AHashMap<(String, String), String>) {
        (self.includes, self.cache)
    }
}
