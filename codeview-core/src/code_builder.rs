//! Code builder utility for producing properly indented output.

use crate::Indent;

/// Fluent API for building block-structured text with indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for use inside loops.
///
/// # Example
///
/// ```
/// use codeview_core::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public class Foo {")
///     .indent()
///     .line("private int bar;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class Foo {\n    private int bar;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of an already rendered fragment at the current indentation.
    ///
    /// Empty lines stay empty instead of carrying trailing whitespace.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add every line of a rendered fragment at the current indentation.
    pub fn lines(mut self, text: &str) -> Self {
        self.push_lines(text);
        self
    }

    /// Add a blank line.
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

    /// Add a block with a closing line.
    ///
    /// ```
    /// use codeview_core::CodeBuilder;
    ///
    /// let code = CodeBuilder::java()
    ///     .block_with_close("void run() {", "}", |b| b.line("go();"))
    ///     .build();
    ///
    /// assert_eq!(code, "void run() {\n    go();\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
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
    fn test_indentation() {
        let code = CodeBuilder::java()
            .line("void main() {")
            .indent()
            .line("run();")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "void main() {\n    run();\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_lines_reindents_fragment() {
        let code = CodeBuilder::java()
            .indent()
            .lines("int get() {\n    return 1;\n}\n\n// end")
            .build();

        assert_eq!(
            code,
            "    int get() {\n        return 1;\n    }\n\n    // end\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .block_with_close("{", "}", |b| b.line("x;"))
            .build();
        assert_eq!(code, "{\n\tx;\n}\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::java()
            .when(true, |b| b.line("@Override"))
            .line("void run() {}")
            .build();
        let without = CodeBuilder::java()
            .when(false, |b| b.line("@Override"))
            .line("void run() {}")
            .build();

        assert_eq!(with, "@Override\nvoid run() {}\n");
        assert_eq!(without, "void run() {}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::java()
            .line("enum Color {")
            .indent()
            .each(["RED", "GREEN"], |b, c| b.line(&format!("{},", c)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n    RED,\n    GREEN,\n}\n");
    }

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("a();")
            .push_blank()
            .push_indent()
            .push_line("b();")
            .push_dedent()
            .push_raw("c");
        assert_eq!(builder.build(), "a();\n\n    b();\nc");
    }
}
