//! Common test utilities for building sketch graphs and headers.
use sketchflow::prelude::*;
use sketchflow::sketch::{FUNCTION_OUTPUT_PORT, input_port_id};

/// Routes `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A function node calling `call_name`, with one `input-N` port per entry of
/// `inputs` (type and optional literal) and an `output` port unless `returns` is void.
#[allow(dead_code)]
pub fn call_node(
    id: &str,
    call_name: &str,
    inputs: &[(ValueType, Option<&str>)],
    returns: ValueType,
) -> Node {
    let inputs = inputs
        .iter()
        .enumerate()
        .map(|(i, (ty, literal))| {
            let port = Port::new(input_port_id(i), format!("arg{}", i), *ty);
            match literal {
                Some(value) => port.with_literal(*value),
                None => port,
            }
        })
        .collect();
    let outputs = if returns.is_void() {
        Vec::new()
    } else {
        vec![Port::new(FUNCTION_OUTPUT_PORT, "result", returns)]
    };

    Node {
        id: id.to_string(),
        inputs,
        outputs,
        kind: NodeKind::Function(FunctionCall {
            call_name: call_name.to_string(),
            library: "Test".to_string(),
            include: None,
        }),
    }
}

/// Same as [`call_node`], with an include directive.
#[allow(dead_code)]
pub fn call_node_with_include(id: &str, call_name: &str, include: &str) -> Node {
    let mut node = call_node(id, call_name, &[], ValueType::Void);
    if let NodeKind::Function(call) = &mut node.kind {
        call.include = Some(include.to_string());
    }
    node
}

/// A data edge from a function's `output` port into `input-N` of `target`.
#[allow(dead_code)]
pub fn data_edge(source: &str, target: &str, input: usize) -> Edge {
    Edge::new(source, FUNCTION_OUTPUT_PORT, target, input_port_id(input))
}

/// `loop -> read -> write`, where `write`'s second argument is `read`'s result.
///
/// Expected loop body: `analogRead(A0);` then `analogWrite(9, analogRead(A0));`
#[allow(dead_code)]
pub fn create_exec_chain() -> SketchGraph {
    SketchGraph::new()
        .with_node(call_node(
            "read",
            "analogRead",
            &[(ValueType::UInt8, Some("A0"))],
            ValueType::Int,
        ))
        .with_node(call_node(
            "write",
            "analogWrite",
            &[(ValueType::UInt8, Some("9")), (ValueType::Int, None)],
            ValueType::Void,
        ))
        .with_edge(Edge::exec("loop", "read"))
        .with_edge(Edge::exec("read", "write"))
        .with_edge(data_edge("read", "write", 1))
}

/// Two functions feeding each other's single input, both reached from `loop`.
#[allow(dead_code)]
pub fn create_data_cycle() -> SketchGraph {
    SketchGraph::new()
        .with_node(call_node("A", "a", &[(ValueType::Int, None)], ValueType::Int))
        .with_node(call_node("B", "b", &[(ValueType::Int, None)], ValueType::Int))
        .with_edge(Edge::exec("loop", "A"))
        .with_edge(Edge::exec("A", "B"))
        .with_edge(data_edge("A", "B", 0))
        .with_edge(data_edge("B", "A", 0))
}

/// A trimmed-down servo library header.
#[allow(dead_code)]
pub const SERVO_HEADER: &str = r#"
#ifndef SERVO_H
#define SERVO_H

#include <Arduino.h>

#define MIN_PULSE_WIDTH 544   // shortest pulse sent to a servo
#define MAX_PULSE_WIDTH 2400
#define DEFAULT_NAME "servo"

/*
 * Drives one hobby servo.
 */
class Servo : public Stream {
public:
  Servo();
  uint8_t attach(int pin);
  uint8_t attach(int pin, int min, int max);
  void write(int value);
  int read();
  bool attached() const { return servoIndex != 255; }
private:
  uint8_t servoIndex;
  int8_t min;
  void refresh();
};

#endif
"#;
