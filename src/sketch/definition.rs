use crate::types::ValueType;

/// Handle on a node that starts its outgoing execution edge.
pub const EXEC_OUT: &str = "exec-out";
/// Handle on a node that receives an incoming execution edge.
pub const EXEC_IN: &str = "exec-in";

/// Fixed id of the initialization entry point.
pub const SETUP_NODE_ID: &str = "setup";
/// Fixed id of the repeating entry point.
pub const LOOP_NODE_ID: &str = "loop";

/// The complete, immutable snapshot of a node graph, ready for compilation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// A typed attachment point on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub id: String,
    pub label: String,
    pub value_type: ValueType,
    /// Literal typed in by the user, used when nothing is connected.
    pub literal: Option<String>,
    pub connected: bool,
}

/// A single node of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    pub kind: NodeKind,
}

/// What a node does. Each kind carries only the fields that make sense for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Setup,
    Loop,
    Function(FunctionCall),
    Variable(VariableDecl),
}

/// A call to a library function or class method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Name as written in the generated call, e.g. `digitalWrite` or `Serial.println`.
    pub call_name: String,
    /// Name of the library the function came from.
    pub library: String,
    /// Include directive needed by the call, e.g. `#include <Servo.h>`.
    pub include: Option<String>,
}

/// A user-declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub name: String,
    pub value_type: ValueType,
    pub initial_value: Option<String>,
    pub is_global: bool,
}

/// A connection between an output handle and an input handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub source_handle: String,
    pub target: String,
    pub target_handle: String,
}

/// Whether an edge carries control flow or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Execution,
    Data,
}

impl SketchGraph {
    /// Creates a graph holding only the `setup` and `loop` entry points.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::setup(), Node::loop_entry()],
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }
}

impl Port {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value_type,
            literal: None,
            connected: false,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    /// The literal, if one was entered. Empty literals count as absent.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref().filter(|l| !l.is_empty())
    }
}

impl Node {
    pub fn input(&self, port_id: &str) -> Option<&Port> {
        self.inputs.iter().find(|p| p.id == port_id)
    }

    pub fn output(&self, port_id: &str) -> Option<&Port> {
        self.outputs.iter().find(|p| p.id == port_id)
    }

    pub fn is_entry_point(&self) -> bool {
        matches!(self.kind, NodeKind::Setup | NodeKind::Loop)
    }

    pub fn as_function(&self) -> Option<&FunctionCall> {
        match &self.kind {
            NodeKind::Function(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDecl> {
        match &self.kind {
            NodeKind::Variable(decl) => Some(decl),
            _ => None,
        }
    }
}

impl VariableDecl {
    /// Renders `TYPE NAME = INITIAL;`, or `TYPE NAME;` without an initial value.
    pub fn declaration(&self) -> String {
        match self.initial_value.as_deref().filter(|v| !v.is_empty()) {
            Some(initial) => format!("{} {} = {};", self.value_type, self.name, initial),
            None => format!("{} {};", self.value_type, self.name),
        }
    }
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_handle: source_handle.into(),
            target: target.into(),
            target_handle: target_handle.into(),
        }
    }

    /// An execution edge from `source` to `target`.
    pub fn exec(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, EXEC_OUT, target, EXEC_IN)
    }

    pub fn kind(&self) -> EdgeKind {
        if self.source_handle == EXEC_OUT && self.target_handle == EXEC_IN {
            EdgeKind::Execution
        } else {
            EdgeKind::Data
        }
    }

    pub fn is_execution(&self) -> bool {
        self.kind() == EdgeKind::Execution
    }
}
