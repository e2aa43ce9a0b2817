use super::definition::{
    FunctionCall, LOOP_NODE_ID, Node, NodeKind, Port, SETUP_NODE_ID, VariableDecl,
};
use crate::library::{FunctionDef, Library};
use crate::types::ValueType;

/// Port id of a function node's return value.
pub const FUNCTION_OUTPUT_PORT: &str = "output";
/// Port id of a variable node's value.
pub const VARIABLE_OUTPUT_PORT: &str = "value";

/// Port id of the `index`-th input of a function node.
pub fn input_port_id(index: usize) -> String {
    format!("input-{}", index)
}

impl Node {
    /// The `setup` entry point.
    pub fn setup() -> Self {
        Self {
            id: SETUP_NODE_ID.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            kind: NodeKind::Setup,
        }
    }

    /// The `loop` entry point.
    pub fn loop_entry() -> Self {
        Self {
            id: LOOP_NODE_ID.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            kind: NodeKind::Loop,
        }
    }

    /// Instantiates a call node for `function` from `library`.
    ///
    /// Each parameter becomes an `input-N` port seeded with its default value.
    /// A non-void return type adds an `output` port.
    pub fn from_function(id: impl Into<String>, function: &FunctionDef, library: &Library) -> Self {
        let inputs = function
            .parameters
            .iter()
            .enumerate()
            .map(|(index, param)| Port {
                id: input_port_id(index),
                label: param.name.clone(),
                value_type: param.value_type,
                literal: param.default_value.clone(),
                connected: false,
            })
            .collect();

        let outputs = if function.return_type.is_void() {
            Vec::new()
        } else {
            vec![Port::new(FUNCTION_OUTPUT_PORT, "result", function.return_type)]
        };

        Self {
            id: id.into(),
            inputs,
            outputs,
            kind: NodeKind::Function(FunctionCall {
                call_name: function.call_name(),
                library: library.name.clone(),
                include: library.include().map(str::to_string),
            }),
        }
    }

    /// A variable node with a single `value` output mirroring the declared type.
    pub fn variable(
        id: impl Into<String>,
        name: impl Into<String>,
        value_type: ValueType,
        initial_value: Option<&str>,
        is_global: bool,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            inputs: Vec::new(),
            outputs: vec![Port::new(VARIABLE_OUTPUT_PORT, name.clone(), value_type)],
            kind: NodeKind::Variable(VariableDecl {
                name,
                value_type,
                initial_value: initial_value.map(str::to_string),
                is_global,
            }),
        }
    }
}
