use super::definition::{Edge, EdgeKind, Node, SketchGraph};
use crate::error::ConnectionError;
use crate::types::is_compatible;

impl SketchGraph {
    /// Checks whether `edge` may be added to this graph.
    ///
    /// Execution edges only need both nodes to exist. Data edges also need the
    /// named ports and a source type that is compatible with the target type.
    pub fn check_connection(&self, edge: &Edge) -> Result<EdgeKind, ConnectionError> {
        let source = self.require_node(&edge.source)?;
        let target = self.require_node(&edge.target)?;

        if edge.is_execution() {
            return Ok(EdgeKind::Execution);
        }

        let source_port =
            source
                .output(&edge.source_handle)
                .ok_or_else(|| ConnectionError::PortNotFound {
                    node_id: source.id.clone(),
                    port_id: edge.source_handle.clone(),
                    direction: "output",
                })?;
        let target_port =
            target
                .input(&edge.target_handle)
                .ok_or_else(|| ConnectionError::PortNotFound {
                    node_id: target.id.clone(),
                    port_id: edge.target_handle.clone(),
                    direction: "input",
                })?;

        if !is_compatible(source_port.value_type, target_port.value_type) {
            log::warn!(
                "Type mismatch: {} cannot connect to {}",
                source_port.value_type,
                target_port.value_type
            );
            return Err(ConnectionError::TypeMismatch {
                source_type: source_port.value_type,
                target_type: target_port.value_type,
            });
        }

        Ok(EdgeKind::Data)
    }

    fn require_node(&self, id: &str) -> Result<&Node, ConnectionError> {
        self.node(id)
            .ok_or_else(|| ConnectionError::NodeNotFound(id.to_string()))
    }
}
