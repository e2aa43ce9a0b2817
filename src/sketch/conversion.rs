use super::definition::SketchGraph;
use crate::error::SketchConversionError;

/// A trait for custom editor formats that can be converted into a `SketchGraph`.
///
/// This is the extension point that keeps the compiler independent of any
/// particular editor. Implement it on the structs your editor saves, and hand
/// the resulting graph to the compiler.
///
/// # Example
///
/// ```rust,no_run
/// use sketchflow::prelude::*;
/// use sketchflow::error::SketchConversionError;
///
/// struct MyBlock { id: String, call: String }
/// struct MyProgram { blocks: Vec<MyBlock> }
///
/// impl IntoSketch for MyProgram {
///     fn into_sketch(self) -> std::result::Result<SketchGraph, SketchConversionError> {
///         let mut graph = SketchGraph::new();
///         for block in self.blocks {
///             graph.nodes.push(Node {
///                 id: block.id,
///                 inputs: vec![],
///                 outputs: vec![],
///                 kind: NodeKind::Function(FunctionCall {
///                     call_name: block.call,
///                     library: "Arduino".to_string(),
///                     include: None,
///                 }),
///             });
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoSketch {
    /// Consumes the object and converts it into a compilable graph snapshot.
    fn into_sketch(self) -> Result<SketchGraph, SketchConversionError>;
}
