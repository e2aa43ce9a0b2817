use crate::types::ValueType;
use serde::{Deserialize, Serialize};

/// A structured API descriptor: everything the editor knows about one header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub name: String,
    pub display_name: String,
    /// Directive placed at the top of the sketch, e.g. `#include <Servo.h>`. Empty for none.
    pub include_statement: String,
    #[serde(default)]
    pub is_core: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
    #[serde(default)]
    pub classes: Vec<ClassDef>,
    #[serde(default)]
    pub constants: Vec<ConstantDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantDef {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A free function, a class method or a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    pub name: String,
    pub return_type: ValueType,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_method: bool,
    /// Owning class, for methods and constructors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<FunctionDef>,
    #[serde(default)]
    pub constructors: Vec<FunctionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Library {
    /// An empty library named after `name`.
    pub fn new(name: impl Into<String>, include_statement: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            include_statement: include_statement.into(),
            is_core: false,
            category: "Custom".to_string(),
            functions: Vec::new(),
            classes: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// The include directive, or `None` when the library needs none.
    pub fn include(&self) -> Option<&str> {
        Some(self.include_statement.trim()).filter(|s| !s.is_empty())
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Free functions followed by the methods of every class.
    pub fn callables(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions
            .iter()
            .chain(self.classes.iter().flat_map(|c| c.methods.iter()))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FunctionDef {
    /// A free function in the default `Functions` category.
    pub fn free(
        name: impl Into<String>,
        return_type: ValueType,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters,
            description: None,
            is_method: false,
            class_name: None,
            category: Some("Functions".to_string()),
        }
    }

    /// A method of `class_name`, categorised under the class.
    pub fn method(
        class_name: impl Into<String>,
        name: impl Into<String>,
        return_type: ValueType,
        parameters: Vec<Parameter>,
    ) -> Self {
        let class_name = class_name.into();
        Self {
            name: name.into(),
            return_type,
            parameters,
            description: None,
            is_method: true,
            category: Some(class_name.clone()),
            class_name: Some(class_name),
        }
    }

    /// A constructor of `class_name`. Constructors return nothing.
    pub fn constructor(class_name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        let class_name = class_name.into();
        Self {
            name: class_name.clone(),
            return_type: ValueType::Void,
            parameters,
            description: None,
            is_method: false,
            category: Some(class_name.clone()),
            class_name: Some(class_name),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The name used at call sites.
    ///
    /// Methods are qualified with their class (`Servo.attach`), following the
    /// one-global-instance-per-class convention of the generated sketches.
    pub fn call_name(&self) -> String {
        match (&self.class_name, self.is_method) {
            (Some(class), true) => format!("{}.{}", class, self.name),
            _ => self.name.clone(),
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

impl ConstantDef {
    pub fn new(name: impl Into<String>, value: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            value_type,
        }
    }
}
