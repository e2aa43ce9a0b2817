use super::CompiledSketch;
use std::fmt;

impl CompiledSketch {
    fn body(&self, statements: &[String], placeholder: &str) -> Vec<String> {
        let indent = &self.options.indent;
        if statements.is_empty() {
            return vec![format!("{}{}", indent, placeholder)];
        }
        statements.iter().map(|s| format!("{}{}", indent, s)).collect()
    }

    /// Lines of the rendered sketch. Sections without content are left out,
    /// except `setup` and `loop`, which are always present.
    pub(super) fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if !self.options.header_comment.is_empty() {
            lines.extend(self.options.header_comment.iter().map(|l| format!("// {}", l)));
            lines.push(String::new());
        }

        if !self.includes.is_empty() {
            lines.extend(self.includes.iter().cloned());
            lines.push(String::new());
        }

        if !self.globals.is_empty() {
            lines.push("// Global variables".to_string());
            lines.extend(self.globals.iter().cloned());
            lines.push(String::new());
        }

        lines.push("void setup() {".to_string());
        lines.extend(self.body(&self.setup_statements, &self.options.setup_placeholder));
        lines.push("}".to_string());
        lines.push(String::new());

        lines.push("void loop() {".to_string());
        lines.extend(self.body(&self.loop_statements, &self.options.loop_placeholder));
        lines.push("}".to_string());

        lines
    }
}

impl fmt::Display for CompiledSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
