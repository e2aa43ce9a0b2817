use super::{ClassDef, ConstantDef, FunctionDef, Library, Parameter};
use crate::types::ValueType;

/// Name of the built-in library. It is always active and cannot be removed.
pub const CORE_LIBRARY_NAME: &str = "Arduino";

/// The built-in Arduino core library: pin I/O, timing, the `Serial` port and pin constants.
pub fn core_library() -> Library {
    use ValueType::{Any, Int, Long, UInt8, UInt16, UInt32, UnsignedLong, Void};

    let pin = || Parameter::new("pin", UInt8);

    let functions = vec![
        io_fn("pinMode", Void, vec![pin(), Parameter::new("mode", UInt8)])
            .with_description("Configures the specified pin to behave as an input or an output"),
        io_fn("digitalWrite", Void, vec![pin(), Parameter::new("value", UInt8)])
            .with_description("Writes HIGH or LOW to a digital pin"),
        io_fn("digitalRead", Int, vec![pin()])
            .with_description("Reads HIGH or LOW from a digital pin"),
        io_fn("analogRead", Int, vec![pin()]).with_description("Reads the value of an analog pin"),
        io_fn("analogWrite", Void, vec![pin(), Parameter::new("value", Int)])
            .with_description("Writes a PWM wave to a pin"),
        time_fn("delay", Void, vec![Parameter::new("ms", UnsignedLong)])
            .with_description("Pauses the program for the given number of milliseconds"),
        time_fn("delayMicroseconds", Void, vec![Parameter::new("us", UInt16)]),
        time_fn("millis", UnsignedLong, vec![])
            .with_description("Milliseconds since the board began running the current program"),
        time_fn("micros", UnsignedLong, vec![]),
        math_fn(
            "map",
            Long,
            vec![
                Parameter::new("value", Long),
                Parameter::new("fromLow", Long),
                Parameter::new("fromHigh", Long),
                Parameter::new("toLow", Long),
                Parameter::new("toHigh", Long),
            ],
        ),
        math_fn(
            "constrain",
            Any,
            vec![
                Parameter::new("x", Any),
                Parameter::new("a", Any),
                Parameter::new("b", Any),
            ],
        ),
        math_fn("random", Long, vec![Parameter::new("max", Long)]),
    ];

    let serial = ClassDef {
        name: "Serial".to_string(),
        methods: vec![
            FunctionDef::method(
                "Serial",
                "begin",
                Void,
                vec![Parameter::new("baud", Long).with_default("9600")],
            ),
            FunctionDef::method("Serial", "print", UInt32, vec![Parameter::new("value", Any)]),
            FunctionDef::method("Serial", "println", UInt32, vec![Parameter::new("value", Any)]),
            FunctionDef::method("Serial", "available", Int, vec![]),
            FunctionDef::method("Serial", "read", Int, vec![]),
        ],
        constructors: vec![],
        description: Some("Hardware serial port".to_string()),
    };

    let constants = vec![
        ConstantDef::new("HIGH", "1", Int),
        ConstantDef::new("LOW", "0", Int),
        ConstantDef::new("INPUT", "0", Int),
        ConstantDef::new("OUTPUT", "1", Int),
        ConstantDef::new("INPUT_PULLUP", "2", Int),
        ConstantDef::new("LED_BUILTIN", "13", Int),
    ];

    Library {
        name: CORE_LIBRARY_NAME.to_string(),
        display_name: "Arduino Core".to_string(),
        include_statement: String::new(),
        is_core: true,
        category: "Core".to_string(),
        functions,
        classes: vec![serial],
        constants,
    }
}

fn categorised(
    name: &str,
    return_type: ValueType,
    parameters: Vec<Parameter>,
    category: &str,
) -> FunctionDef {
    FunctionDef {
        category: Some(category.to_string()),
        ..FunctionDef::free(name, return_type, parameters)
    }
}

fn io_fn(name: &str, return_type: ValueType, parameters: Vec<Parameter>) -> FunctionDef {
    categorised(name, return_type, parameters, "Digital & Analog I/O")
}

fn time_fn(name: &str, return_type: ValueType, parameters: Vec<Parameter>) -> FunctionDef {
    categorised(name, return_type, parameters, "Time")
}

fn math_fn(name: &str, return_type: ValueType, parameters: Vec<Parameter>) -> FunctionDef {
    categorised(name, return_type, parameters, "Math")
}
