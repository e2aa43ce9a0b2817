//! Tests for the header declaration parser.
mod common;
use common::*;
use sketchflow::error::LibraryIssue;
use sketchflow::parser::parameters::split_parameters;
use sketchflow::parser::type_map::{infer_literal_type, map_complex_type, map_type};
use sketchflow::prelude::*;

fn parse(content: &str) -> ParsedHeader {
    parse_header(content, "Test.h").expect("parser should not fail")
}

#[test]
fn test_define_and_function_with_default() {
    init_logger();
    let header = "#define LED_PIN 13\nvoid blink(int pin, int times = 1);";
    let parsed = parse_header(header, "Blink.h").unwrap();
    let library = &parsed.library;

    assert_eq!(library.name, "Blink");
    assert_eq!(library.include_statement, "#include <Blink.h>");
    assert!(!library.is_core);

    assert_eq!(library.constants, vec![ConstantDef::new("LED_PIN", "13", ValueType::Int)]);

    assert_eq!(library.functions.len(), 1);
    let blink = &library.functions[0];
    assert_eq!(blink.name, "blink");
    assert_eq!(blink.return_type, ValueType::Void);
    assert!(!blink.is_method);
    assert_eq!(
        blink.parameters,
        vec![
            Parameter::new("pin", ValueType::Int),
            Parameter::new("times", ValueType::Int).with_default("1"),
        ]
    );
    assert!(parsed.warnings.is_empty(), "unexpected warnings: {:?}", parsed.warnings);
}

#[test]
fn test_servo_class() {
    init_logger();
    let parsed = parse_header(SERVO_HEADER, "Servo.h").unwrap();
    let library = &parsed.library;

    assert_eq!(library.name, "Servo");
    assert!(library.functions.is_empty(), "class members must not be reported as free functions");
    assert_eq!(library.classes.len(), 1);

    let servo = library.class("Servo").unwrap();
    assert_eq!(servo.constructors.len(), 1);
    assert!(servo.constructors[0].parameters.is_empty());
    assert_eq!(servo.constructors[0].return_type, ValueType::Void);

    let names: Vec<&str> = servo.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["attach", "attach", "write", "read", "attached"]);
    assert!(servo.methods.iter().all(|m| m.is_method));
    assert!(servo.methods.iter().all(|m| m.class_name.as_deref() == Some("Servo")));

    let attach = &servo.methods[0];
    assert_eq!(attach.return_type, ValueType::UInt8);
    assert_eq!(attach.call_name(), "Servo.attach");
    assert_eq!(attach.parameters, vec![Parameter::new("pin", ValueType::Int)]);
    assert_eq!(servo.methods[1].parameters.len(), 3);
    assert_eq!(servo.methods[4].return_type, ValueType::Bool);
}

#[test]
fn test_servo_constants_skip_include_guard() {
    let parsed = parse_header(SERVO_HEADER, "Servo.h").unwrap();
    let constants = &parsed.library.constants;

    assert_eq!(
        constants,
        &vec![
            ConstantDef::new("MIN_PULSE_WIDTH", "544", ValueType::Int),
            ConstantDef::new("MAX_PULSE_WIDTH", "2400", ValueType::Int),
            ConstantDef::new("DEFAULT_NAME", "\"servo\"", ValueType::String),
        ]
    );
}

#[test]
fn test_private_members_are_hidden() {
    let parsed = parse(
        "class Motor {\n  int speed;\n  void secret();\npublic:\n  Motor(int pin);\n  void run(int speed);\nprivate:\n  void hidden();\npublic:\n  void stop();\n};",
    );
    let motor = parsed.library.class("Motor").unwrap();

    assert_eq!(motor.constructors.len(), 1);
    assert_eq!(motor.constructors[0].parameters, vec![Parameter::new("pin", ValueType::Int)]);
    let names: Vec<&str> = motor.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["run", "stop"]);
}

#[test]
fn test_class_without_public_members_is_dropped() {
    let parsed = parse("class Hidden {\nprivate:\n  void nothing();\n};\nvoid visible();");
    assert!(parsed.library.classes.is_empty());
    assert_eq!(parsed.library.functions.len(), 1);
}

#[test]
fn test_struct_like_class_without_labels_is_public() {
    let parsed = parse("class Point {\n  Point(int x, int y);\n  int length();\n};");
    let point = parsed.library.class("Point").unwrap();
    assert_eq!(point.constructors[0].parameters.len(), 2);
    assert_eq!(point.methods[0].name, "length");
}

#[test]
fn test_qualified_methods_and_destructor() {
    let parsed = parse(
        "class Sensor {\npublic:\n  explicit Sensor(uint8_t pin);\n  virtual ~Sensor();\n  virtual float sample() = 0;\n  static Sensor* create();\n  bool operator==(const Sensor& other) const;\n};",
    );
    let sensor = parsed.library.class("Sensor").unwrap();

    assert_eq!(sensor.constructors.len(), 1);
    assert_eq!(sensor.constructors[0].parameters, vec![Parameter::new("pin", ValueType::UInt8)]);
    let methods: Vec<(&str, ValueType)> = sensor
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.return_type))
        .collect();
    assert_eq!(methods, vec![("sample", ValueType::Float), ("create", ValueType::Any)]);
}

#[test]
fn test_parameter_type_mapping() {
    let parsed = parse(
        "void show(const char* text, int* values, std::vector<int> items, String label, unsigned long ms, float gain[]);",
    );
    let show = &parsed.library.functions[0];
    let types: Vec<(&str, ValueType)> = show
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.value_type))
        .collect();

    assert_eq!(
        types,
        vec![
            ("text", ValueType::CharPtr),
            ("values", ValueType::IntPtr),
            ("items", ValueType::Any),
            ("label", ValueType::String),
            ("ms", ValueType::UnsignedLong),
            ("gain", ValueType::Any),
        ]
    );
}

#[test]
fn test_unnamed_parameters_get_positional_names() {
    let parsed = parse("void tone(uint8_t, unsigned int, unsigned long duration = 0);");
    let tone = &parsed.library.functions[0];

    assert_eq!(
        tone.parameters,
        vec![
            Parameter::new("arg0", ValueType::UInt8),
            Parameter::new("arg1", ValueType::UInt16),
            Parameter::new("duration", ValueType::UnsignedLong).with_default("0"),
        ]
    );
}

#[test]
fn test_commas_inside_templates_and_strings() {
    let parsed = parse(r#"void log(std::map<int, int> m, const char* sep = ",", char c = ',');"#);
    let log = &parsed.library.functions[0];

    assert_eq!(log.parameters.len(), 3);
    assert_eq!(log.parameters[0].name, "m");
    assert_eq!(log.parameters[1].default_value.as_deref(), Some(r#"",""#));
    assert_eq!(log.parameters[2].default_value.as_deref(), Some("','"));
    assert_eq!(log.parameters[2].value_type, ValueType::Char);
}

#[test]
fn test_void_and_empty_parameter_lists() {
    let parsed = parse("int millis(void);\nint micros();");
    let functions = &parsed.library.functions;
    assert_eq!(functions.len(), 2);
    assert!(functions.iter().all(|f| f.parameters.is_empty()));
    assert_eq!(functions[0].return_type, ValueType::Int);
}

#[test]
fn test_variadic_parameter_is_dropped_with_warning() {
    let parsed = parse("int printf(const char* fmt, ...);");
    let printf = &parsed.library.functions[0];
    assert_eq!(printf.parameters, vec![Parameter::new("fmt", ValueType::CharPtr)]);

    assert!(parsed.warnings.iter().any(|w| matches!(
        w,
        ParseWarning::MalformedParameter { function, fragment, .. }
            if function == "printf" && fragment == "..."
    )));
}

#[test]
fn test_multi_line_macro_warns_and_function_macro_is_skipped() {
    let parsed = parse(
        "#define SQUARE(x) ((x) * (x))\n#define MULTI 1 + \\\n  2\n#define FLAG\n#define RATE 0.5\nvoid go();",
    );

    assert_eq!(
        parsed.library.constants,
        vec![ConstantDef::new("RATE", "0.5", ValueType::Float)]
    );
    assert!(parsed.warnings.contains(&ParseWarning::MultiLineMacro {
        name: "MULTI".to_string()
    }));
}

#[test]
fn test_const_globals_are_constants() {
    let parsed =
        parse("const int BAUD = 9600;\nconst float RATIO = 1.5;\nvoid go(const int pin = 5);");
    let constants = &parsed.library.constants;

    assert_eq!(
        constants,
        &vec![
            ConstantDef::new("BAUD", "9600", ValueType::Int),
            ConstantDef::new("RATIO", "1.5", ValueType::Float),
        ]
    );
}

#[test]
fn test_comments_are_ignored() {
    let parsed =
        parse("// void commented(int a);\n/* void blocked();\n*/\nvoid real(); // trailing");
    let names: Vec<&str> = parsed.library.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["real"]);
}

#[test]
fn test_unterminated_class_warns() {
    let parsed = parse("class Broken {\npublic:\n  void go();\n");
    assert!(parsed.library.classes.is_empty());
    assert!(parsed.warnings.contains(&ParseWarning::UnterminatedClass {
        name: "Broken".to_string()
    }));
}

#[test]
fn test_header_without_callables_is_advisory() {
    let parsed = parse("#define ONLY_CONSTANT 1");

    assert_eq!(parsed.library.constants.len(), 1);
    assert!(
        parsed
            .warnings
            .contains(&ParseWarning::Advisory(LibraryIssue::NoCallables))
    );
    assert!(
        parsed
            .warning_messages()
            .contains(&"No functions or classes found in header".to_string())
    );
}

#[test]
fn test_empty_input_still_produces_library() {
    let parsed = parse_header("", "").unwrap();
    assert!(parsed.library.functions.is_empty());
    assert!(
        parsed
            .warnings
            .contains(&ParseWarning::Advisory(LibraryIssue::MissingName))
    );
}

#[test]
fn test_library_name_from_source_id() {
    assert_eq!(parse_header("", "Servo.h").unwrap().library.name, "Servo");
    assert_eq!(parse_header("", "Motor.HPP").unwrap().library.name, "Motor");
    assert_eq!(parse_header("", "Wire").unwrap().library.name, "Wire");
    assert_eq!(parse_header("", "Wire").unwrap().library.include_statement, "#include <Wire>");
}

#[test]
fn test_garbage_input_does_not_fail() {
    let inputs = [
        "))))((((;;;",
        "class { public: ( ; }",
        "int 9lives(int a);",
        "template<typename T> T max(T a, T b);",
        "\u{feff}#define ÜBER 1\nvoid ünïcode(int ä);",
        "#define",
    ];
    for input in inputs {
        assert!(parse_header(input, "Garbage.h").is_ok(), "parser failed on {:?}", input);
    }
}

#[test]
fn test_type_helpers() {
    assert_eq!(map_type("unsigned   long"), ValueType::UnsignedLong);
    assert_eq!(map_type("char *"), ValueType::CharPtr);
    assert_eq!(map_type("Stream*"), ValueType::Any);
    assert_eq!(map_type("int&"), ValueType::Int);
    assert_eq!(map_type("Foo"), ValueType::Any);

    assert_eq!(map_complex_type("const std::vector<uint8_t>"), ValueType::Any);
    assert_eq!(map_complex_type("std::basic_string<char>"), ValueType::String);
    assert_eq!(map_complex_type("volatile uint16_t"), ValueType::UInt16);

    assert_eq!(infer_literal_type("\"hi\""), ValueType::String);
    assert_eq!(infer_literal_type("'x'"), ValueType::Char);
    assert_eq!(infer_literal_type("true"), ValueType::Bool);
    assert_eq!(infer_literal_type("3.14"), ValueType::Float);
    assert_eq!(infer_literal_type("0x1F"), ValueType::Int);

    assert_eq!(
        split_parameters("a, std::pair<int, int> p, f(1, 2)"),
        vec!["a", "std::pair<int, int> p", "f(1, 2)"]
    );
}

#[test]
fn test_single_line_class() {
    let parsed = parse_header(
        "class Servo { public: void attach(int pin); void write(int angle); };",
        "Servo.h",
    )
    .unwrap();

    assert_eq!(parsed.library.classes.len(), 1);
    let servo = &parsed.library.classes[0];
    assert_eq!(servo.methods.len(), 2);
    assert!(servo.methods.iter().all(|m| m.class_name.as_deref() == Some("Servo")));
    assert_eq!(servo.methods[0].call_name(), "Servo.attach");
    assert_eq!(servo.methods[1].parameters, vec![Parameter::new("angle", ValueType::Int)]);
}

#[test]
fn test_line_comment_markers_inside_block_comments_and_strings() {
    let parsed = parse(
        "/* see http://example.com */\nvoid a(int x);\n/* other */\nvoid b(int y);\n#define HOME_URL \"http://example.com\" // site",
    );
    let names: Vec<&str> = parsed.library.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(
        parsed.library.constants,
        vec![ConstantDef::new("HOME_URL", "\"http://example.com\"", ValueType::String)]
    );
}

#[test]
fn test_constructor_initializer_list_is_skipped() {
    let parsed = parse(
        "class Servo { public: Servo() : pin_(0) {} void attach(int pin); private: int pin_; };",
    );
    let servo = parsed.library.class("Servo").unwrap();
    assert_eq!(servo.constructors.len(), 1);
    assert!(servo.constructors[0].parameters.is_empty());
    assert_eq!(servo.methods.len(), 1);
    assert_eq!(servo.methods[0].parameters, vec![Parameter::new("pin", ValueType::Int)]);

    let parsed = parse(
        "class Stepper {\npublic:\n  Stepper(int steps) : steps_(steps), speed_(0) {}\n  int ready() const { return steps_ ? 1 : 0; }\n};",
    );
    let stepper = parsed.library.class("Stepper").unwrap();
    assert_eq!(stepper.constructors[0].parameters, vec![Parameter::new("steps", ValueType::Int)]);
    assert_eq!(stepper.methods[0].name, "ready");
    assert!(parsed.warnings.is_empty(), "unexpected warnings: {:?}", parsed.warnings);
}
