use crate::error::SketchConversionError;
use crate::sketch::{
    Edge, FunctionCall, IntoSketch, LOOP_NODE_ID, Node, NodeKind, Port, SETUP_NODE_ID, SketchGraph,
    VariableDecl,
};
use crate::types::ValueType;
use serde::{Deserialize, Serialize};

/// Port as saved by the editor
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiPort {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default = "any_type")]
    pub value_type: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub connected: bool,
}

fn any_type() -> String {
    ValueType::Any.as_str().to_string()
}

/// Editor node data
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiNodeData {
    #[serde(alias = "nodeType")]
    pub node_type: String,
    #[serde(default, alias = "functionName")]
    pub function_name: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub inputs: Vec<UiPort>,
    #[serde(default)]
    pub outputs: Vec<UiPort>,
    #[serde(default, alias = "includeStatement")]
    pub include_statement: Option<String>,
    #[serde(default, alias = "variableName")]
    pub variable_name: Option<String>,
    #[serde(default, alias = "variableType")]
    pub variable_type: Option<String>,
    #[serde(default, alias = "initialValue")]
    pub initial_value: Option<serde_json::Value>,
    /// Missing means global.
    #[serde(default, alias = "isGlobal")]
    pub is_global: Option<bool>,
}

/// Editor node with ID and data
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiNode {
    pub id: String,
    pub data: UiNodeData,
}

/// Editor edge connecting two handles
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiEdge {
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete sketch as exported by the visual editor
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UiSketch {
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiSketch {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Renders a JSON literal the way it is written in source: strings unquoted.
fn literal_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_type(node_id: &str, name: &str) -> Result<ValueType, SketchConversionError> {
    name.parse()
        .map_err(|_| SketchConversionError::UnknownValueType {
            node_id: node_id.to_string(),
            type_name: name.to_string(),
        })
}

fn convert_ports(node_id: &str, ports: Vec<UiPort>) -> Result<Vec<Port>, SketchConversionError> {
    ports
        .into_iter()
        .map(|p| {
            Ok(Port {
                value_type: parse_type(node_id, &p.value_type)?,
                literal: p.value.as_ref().and_then(literal_text),
                label: p.label,
                id: p.id,
                connected: p.connected,
            })
        })
        .collect()
}

impl UiNode {
    fn into_node(self) -> Result<Node, SketchConversionError> {
        let UiNode { id, data } = self;

        let kind = match data.node_type.as_str() {
            "setup" => NodeKind::Setup,
            "loop" => NodeKind::Loop,
            "function" => {
                let call_name = data.function_name.clone().ok_or_else(|| {
                    SketchConversionError::ValidationError(format!(
                        "Function node '{}' has no function name",
                        id
                    ))
                })?;
                NodeKind::Function(FunctionCall {
                    call_name,
                    library: data.library.clone().unwrap_or_default(),
                    include: data
                        .include_statement
                        .clone()
                        .filter(|i| !i.trim().is_empty()),
                })
            }
            "variable" => {
                let type_name = data
                    .variable_type
                    .clone()
                    .unwrap_or_else(|| ValueType::Int.as_str().to_string());
                NodeKind::Variable(VariableDecl {
                    name: data.variable_name.clone().unwrap_or_default(),
                    value_type: parse_type(&id, &type_name)?,
                    initial_value: data.initial_value.as_ref().and_then(literal_text),
                    is_global: data.is_global.unwrap_or(true),
                })
            }
            other => {
                return Err(SketchConversionError::UnknownNodeType {
                    node_id: id,
                    node_type: other.to_string(),
                });
            }
        };

        Ok(Node {
            inputs: convert_ports(&id, data.inputs)?,
            outputs: convert_ports(&id, data.outputs)?,
            id,
            kind,
        })
    }
}

impl IntoSketch for UiSketch {
    fn into_sketch(self) -> Result<SketchGraph, SketchConversionError> {
        let mut nodes = self
            .nodes
            .into_iter()
            .map(UiNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        // Editor exports may leave out the entry points they never touched.
        if !nodes.iter().any(|n| n.kind == NodeKind::Setup) {
            log::debug!("Export has no '{}' node; adding one", SETUP_NODE_ID);
            nodes.push(Node::setup());
        }
        if !nodes.iter().any(|n| n.kind == NodeKind::Loop) {
            log::debug!("Export has no '{}' node; adding one", LOOP_NODE_ID);
            nodes.push(Node::loop_entry());
        }

        let edges = self
            .edges
            .into_iter()
            .map(|e| Edge {
                source: e.source,
                source_handle: e.source_handle.unwrap_or_default(),
                target: e.target,
                target_handle: e.target_handle.unwrap_or_default(),
            })
            .collect();

        Ok(SketchGraph { nodes, edges })
    }
}
