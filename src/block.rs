//! Block types - the unit of output
//!
//! Every source line becomes one of three block kinds:
//! - `Blank`: whitespace-only line
//! - `Prose`: documentation comment, rendered as Markdown text
//! - `Code`: anything else, rendered inside a fenced code block
//!
//! Consecutive blocks are merged ("assimilated") by the parser, so a run of
//! comment lines ends up as one `Prose` block.

use std::fmt;

/// Placeholder content of a blank line; renders as one empty-looking line.
const BLANK_LINE: &str = " ";

/// Kind of a block. This set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Whitespace-only line(s)
    Blank,
    /// Comment text
    Prose,
    /// Source code
    Code,
}

impl BlockKind {
    /// Get the string representation of the block kind
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Blank => "Blank",
            BlockKind::Prose => "Prose",
            BlockKind::Code => "Code",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One or more consecutive source lines of the same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// What the lines are
    pub kind: BlockKind,
    /// Accumulated content, in source order
    pub lines: Vec<String>,
    /// Fence-info string; only set for `Code` blocks
    pub language: Option<String>,
}

impl Block {
    /// A blank line, holding the placeholder instead of the original whitespace
    pub fn blank() -> Self {
        Self {
            kind: BlockKind::Blank,
            lines: vec![BLANK_LINE.to_string()],
            language: None,
        }
    }

    /// A line of comment text, already stripped of its marker
    pub fn prose(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Prose,
            lines: vec![text.into()],
            language: None,
        }
    }

    /// A raw line of code in `language`
    pub fn code(line: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            lines: vec![line.into()],
            language: Some(language.into()),
        }
    }

    /// Whether `other` can be merged into this block.
    ///
    /// Same-kind blocks merge, and a blank merges into anything. A prose or
    /// code block never merges into a preceding blank.
    pub fn can_assimilate(&self, other: &Block) -> bool {
        self.kind == other.kind || other.kind == BlockKind::Blank
    }

    /// Append the lines of `other`, keeping this block's kind and language.
    pub fn assimilate(&mut self, other: Block) {
        self.lines.extend(other.lines);
    }

    /// Render this block as Markdown.
    pub fn render(&self) -> String {
        match self.kind {
            BlockKind::Blank | BlockKind::Prose => self.lines.join("\n"),
            BlockKind::Code => {
                let body: Vec<&str> = self
                    .lines
                    .iter()
                    .map(String::as_str)
                    .filter(|line| !line.is_empty())
                    .collect();
                if body.is_empty() {
                    return String::new();
                }
                format!(
                    "\n```{}\n{}\n```\n",
                    self.language.as_deref().unwrap_or_default(),
                    body.join("\n")
                )
            }
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.kind, self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_names() {
        assert_eq!(BlockKind::Blank.to_string(), "Blank");
        assert_eq!(BlockKind::Prose.to_string(), "Prose");
        assert_eq!(Block::code("x", "c").kind.as_str(), "Code");
    }

    #[test]
    fn test_blank_uses_placeholder() {
        assert_eq!(Block::blank().lines, vec![" "]);
    }

    #[test]
    fn test_can_assimilate_is_asymmetric() {
        let blank = Block::blank();
        let prose = Block::prose("hi");
        let code = Block::code("x()", "js");

        assert!(prose.can_assimilate(&blank));
        assert!(code.can_assimilate(&blank));
        assert!(blank.can_assimilate(&Block::blank()));
        assert!(!blank.can_assimilate(&prose));
        assert!(!code.can_assimilate(&prose));
        assert!(!prose.can_assimilate(&code));
    }

    #[test]
    fn test_assimilate_keeps_kind_and_language() {
        let mut code = Block::code("a()", "python");
        code.assimilate(Block::blank());
        code.assimilate(Block::code("b()", "python"));

        assert_eq!(code.kind, BlockKind::Code);
        assert_eq!(code.language.as_deref(), Some("python"));
        assert_eq!(code.lines, vec!["a()", " ", "b()"]);
    }

    #[test]
    fn test_render_code_fence() {
        let rendered = Block::code("var x = 1", "js").render();
        assert_eq!(rendered, "\n```js\nvar x = 1\n```\n");
    }

    #[test]
    fn test_render_code_without_content() {
        let empty = Block {
            kind: BlockKind::Code,
            lines: vec![String::new()],
            language: Some("c".to_string()),
        };
        assert_eq!(empty.render(), "");
    }

    #[test]
    fn test_render_prose_is_not_escaped() {
        let mut prose = Block::prose("# Title *bold*");
        prose.assimilate(Block::prose("second"));
        assert_eq!(prose.render(), "# Title *bold*\nsecond");
    }

    #[test]
    fn test_display() {
        assert_eq!(Block::prose("hello").to_string(), "<Prose: hello>");
    }
}
