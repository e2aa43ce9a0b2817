//! # Sketchflow - Visual Arduino Sketch Compiler
//!
//! **Sketchflow** turns node graphs drawn in a visual editor into Arduino
//! sketches, and turns Arduino library headers into the descriptors those
//! graphs are built from.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Libraries**: Parse a C/C++ header with [`parser::parse_header`] into a
//!     [`library::Library`], or start from the built-in [`library::core_library`].
//! 2.  **Build a Graph**: Create nodes from library functions with `Node::from_function`,
//!     wire them with execution and data edges, and check each edge with
//!     `SketchGraph::check_connection`. Editor exports convert through the `IntoSketch` trait.
//! 3.  **Compile**: Use [`compiler::Compiler`] to turn the graph snapshot into a sketch
//!     with `setup` and `loop` procedures.
//!
//! ## Quick Start
//!
//! ```rust
//! use sketchflow::prelude::*;
//!
//! let library = core_library();
//! let write = library.function("digitalWrite").unwrap();
//!
//! let graph = SketchGraph::new()
//!     .with_node(Node::from_function("led", write, &library))
//!     .with_edge(Edge::exec("loop", "led"));
//!
//! let sketch = Compiler::builder().build().compile(&graph);
//! assert_eq!(sketch.loop_statements, vec!["digitalWrite(0, 0);"]);
//! println!("{}", sketch);
//! ```

pub mod compiler;
pub mod error;
pub mod library;
pub mod parser;
pub mod prelude;
pub mod sketch;
pub mod types;
pub mod ui;
