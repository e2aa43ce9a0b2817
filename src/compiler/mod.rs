use crate::sketch::{LOOP_NODE_ID, Node, NodeKind, SETUP_NODE_ID, SketchGraph, VARIABLE_OUTPUT_PORT};
use ahash::AHashMap;
use itertools::Itertools;

mod assembly;
mod builder;
mod flow;
mod index;

use builder::ExpressionBuilder;
use flow::{discover_procedure, order_by_dependencies};
use index::GraphIndex;

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Comment lines at the top of the sketch, without the `// ` prefix.
    pub header_comment: Vec<String>,
    /// Indentation of statements inside `setup` and `loop`.
    pub indent: String,
    pub setup_placeholder: String,
    pub loop_placeholder: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            header_comment: vec!["Generated by sketchflow".to_string()],
            indent: "  ".to_string(),
            setup_placeholder: "// Add setup code here".to_string(),
            loop_placeholder: "// Add loop code here".to_string(),
        }
    }
}

/// Everything a compilation produced. `Display` renders the sketch source.
#[derive(Debug, Clone)]
pub struct CompiledSketch {
    /// Include directives, de-duplicated, in first-seen order.
    pub includes: Vec<String>,
    pub globals: Vec<String>,
    pub setup_statements: Vec<String>,
    pub loop_statements: Vec<String>,
    expressions: AHashMap<(String, String), String>,
    options: CompilerOptions,
}

impl CompiledSketch {
    /// The expression a read of `(node_id, port_id)` resolves to, if one was computed.
    pub fn expression(&self, node_id: &str, port_id: &str) -> Option<&str> {
        self.expressions
            .get(&(node_id.to_string(), port_id.to_string()))
            .map(String::as_str)
    }

    /// The rendered sketch source.
    pub fn source(&self) -> String {
        self.to_string()
    }
}

/// Compiles sketch graphs into Arduino source text.
///
/// A `Compiler` holds only formatting options; every call to [`Compiler::compile`]
/// works on the snapshot it is given and keeps nothing afterwards.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

pub struct CompilerBuilder {
    options: CompilerOptions,
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            options: CompilerOptions::default(),
        }
    }

    /// Replaces the header comment. Each line of `text` becomes one `// ` line;
    /// an empty text removes the header.
    pub fn with_header_comment(mut self, text: &str) -> Self {
        self.options.header_comment = text.lines().map(str::to_string).collect();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.options.indent = indent.into();
        self
    }

    pub fn with_placeholders(
        mut self,
        setup: impl Into<String>,
        loop_body: impl Into<String>,
    ) -> Self {
        self.options.setup_placeholder = setup.into();
        self.options.loop_placeholder = loop_body.into();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            options: self.options,
        }
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles one graph snapshot.
    ///
    /// Never fails: dangling edges are ignored, unresolvable inputs fall back to
    /// their literal or zero value, and cycles are cut.
    pub fn compile(&self, graph: &SketchGraph) -> CompiledSketch {
        let index = GraphIndex::new(graph);
        let mut builder = ExpressionBuilder::new(&index);

        let globals = declare_variables(graph, &mut builder);

        let setup = entry_point(graph, NodeKind::Setup, SETUP_NODE_ID);
        let loop_entry = entry_point(graph, NodeKind::Loop, LOOP_NODE_ID);

        let setup_nodes = setup.map(|id| procedure_nodes(&index, id)).unwrap_or_default();
        let loop_nodes = loop_entry.map(|id| procedure_nodes(&index, id)).unwrap_or_default();

        let setup_statements = emit_statements(&index, &mut builder, &setup_nodes);
        let loop_statements = emit_statements(&index, &mut builder, &loop_nodes);

        // Producers outside both procedures still need an expression for their consumers.
        for node in graph.nodes.iter().sorted_by(|a, b| a.id.cmp(&b.id)) {
            let NodeKind::Function(call) = &node.kind else {
                continue;
            };
            let covered = setup_nodes.contains(&node.id.as_str())
                || loop_nodes.contains(&node.id.as_str());
            if !covered && index.feeds_data(&node.id) {
                log::trace!("Pre-computing orphan producer '{}'", node.id);
                builder.precompute(node, call);
            }
        }

        let (includes, expressions) = builder.into_parts();

        log::debug!(
            "Compiled sketch: {} includes, {} globals, {} setup statements, {} loop statements",
            includes.len(),
            globals.len(),
            setup_statements.len(),
            loop_statements.len()
        );

        CompiledSketch {
            includes,
            globals,
            setup_statements,
            loop_statements,
            expressions,
            options: self.options.clone(),
        }
    }
}

/// Compiles `graph` with default options and renders the source.
pub fn compile_sketch(graph: &SketchGraph) -> String {
    Compiler::default().compile(graph).source()
}

/// Declares every named variable and binds its output to its name.
///
/// Returns the global declarations, in node id order. Local variables are
/// declared where their procedure reaches them instead.
fn declare_variables(graph: &SketchGraph, builder: &mut ExpressionBuilder) -> Vec<String> {
    let mut globals = Vec::new();

    for node in graph.nodes.iter().sorted_by(|a, b| a.id.cmp(&b.id)) {
        let Some(decl) = node.as_variable() else {
            continue;
        };
        if decl.name.is_empty() {
            continue;
        }
        if decl.is_global {
            globals.push(decl.declaration());
        }
        let port_id = node
            .outputs
            .first()
            .map_or(VARIABLE_OUTPUT_PORT, |p| p.id.as_str());
        builder.bind(&node.id, port_id, decl.name.clone());
    }

    globals
}

/// Id of the entry node of the given kind, preferring the conventional id.
fn entry_point<'g>(
    graph: &'g SketchGraph,
    kind: NodeKind,
    conventional_id: &str,
) -> Option<&'g str> {
    graph
        .nodes
        .iter()
        .filter(|n| n.kind == kind)
        .min_by_key(|n| n.id != conventional_id)
        .map(|n| n.id.as_str())
}

fn procedure_nodes<'g>(index: &GraphIndex<'g>, entry_id: &str) -> Vec<&'g str> {
    let reachable = discover_procedure(index, entry_id);
    let ordered = order_by_dependencies(index, &reachable);
    log::debug!("Procedure '{}' runs {:?}", entry_id, ordered);
    ordered
}

fn emit_statements<'g>(
    index: &GraphIndex<'g>,
    builder: &mut ExpressionBuilder<'_, 'g>,
    ordered: &[&'g str],
) -> Vec<String> {
    ordered
        .iter()
        .filter_map(|id| index.node(id))
        .filter_map(|node: &'g Node| match &node.kind {
            NodeKind::Function(call) => Some(builder.emit_call(node, call)),
            NodeKind::Variable(decl) if !decl.is_global && !decl.name.is_empty() => {
                Some(decl.declaration())
            }
            _ => None,
        })
        .collect()
}
