//! Line writer for Allman-style brace languages.

use super::Indent;

/// Characters C# treats as ending a line.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Accumulates indented source lines.
///
/// Opening a block writes `{` on its own line and indents everything up to
/// the matching close, which is how C# lays out namespaces, types and bodies.
///
/// ```
/// use loom_dom::render::CodeBuilder;
///
/// let mut out = CodeBuilder::csharp();
/// out.push_line("class Foo")
///     .push_open()
///     .push_line("int x;")
///     .push_close();
/// assert_eq!(out.build(), "class Foo\n{\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: String,
    prefix: String,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            unit: indent.to_string(),
            prefix: String::new(),
            depth: 0,
            out: String::new(),
        }
    }

    /// Writer using [`Indent::CSHARP`].
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Write `text` on its own line at the current depth.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&self.prefix);
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Write an empty line. Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self.prefix.push_str(&self.unit);
        self
    }

    /// Step out one level. Stepping out at depth zero is a no-op.
    pub fn push_dedent(&mut self) -> &mut Self {
        if self.depth > 0 {
            self.depth -= 1;
            let keep = self.prefix.len() - self.unit.len();
            self.prefix.truncate(keep);
        }
        self
    }

    /// Write `{` and step in.
    pub fn push_open(&mut self) -> &mut Self {
        self.push_line("{");
        self.push_indent()
    }

    /// Step out and write `}`.
    pub fn push_close(&mut self) -> &mut Self {
        self.push_dedent();
        self.push_line("}")
    }

    /// Write comment lines such as `/// text` or `// text`.
    ///
    /// Every line of `text` gets its own marker, so no part of it can end up
    /// outside the comment. An empty `text` writes the bare marker.
    pub fn push_comment(&mut self, marker: &str, text: &str) -> &mut Self {
        for line in text.split("\r\n").flat_map(|l| l.split(LINE_BREAKS)) {
            if line.is_empty() {
                self.push_line(marker);
            } else {
                self.push_line(&format!("{marker} {line}"));
            }
        }
        self
    }

    pub fn current_indent(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> String {
        self.out
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
