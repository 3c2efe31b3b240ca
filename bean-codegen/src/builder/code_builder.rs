//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level of generated Java.
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for emitting fragments.
///
/// # Example
///
/// ```
/// use beansmith_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public int getAge() {")
///     .indent()
///     .line("return age;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public int getAge() {\n    return age;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Javadoc comment, collapsing to one line when possible (mutable).
    pub fn push_javadoc(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => {}
            [single] => {
                self.push_line(&format!("/** {} */", single));
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Javadoc(lines) => {
                self.push_javadoc(&lines);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::java()
            .line("package com.example;")
            .blank()
            .line("public class Foo {}")
            .build();

        assert_eq!(code, "package com.example;\n\npublic class Foo {}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_javadoc_single_line() {
        let mut builder = CodeBuilder::java();
        builder.push_javadoc(&["The name".to_string()]);
        assert_eq!(builder.build(), "/** The name */\n");
    }

    #[test]
    fn test_javadoc_multi_line() {
        let mut builder = CodeBuilder::java();
        builder
            .push_indent()
            .push_javadoc(&["First".to_string(), String::new(), "Second".to_string()]);
        assert_eq!(
            builder.build(),
            "    /**\n     * First\n     *\n     * Second\n     */\n"
        );
    }

    #[test]
    fn test_javadoc_empty_is_skipped() {
        let mut builder = CodeBuilder::java();
        builder.push_javadoc(&[]);
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "public void run() {",
                    vec![CodeFragment::line("count++;")],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "public void run() {\n    count++;\n}\n");
    }
}
