//! Markdown rendering of merged blocks

use crate::block::{Block, BlockKind};

/// Knobs for [`render_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop code blocks and keep only the comment prose
    pub doc_only: bool,
}

/// Render blocks in order, one line break between each rendering.
pub fn render(blocks: &[Block]) -> String {
    render_with(blocks, RenderOptions::default())
}

/// Render blocks, honouring `options`.
pub fn render_with(blocks: &[Block], options: RenderOptions) -> String {
    blocks
        .iter()
        .filter(|block| !(options.doc_only && block.kind == BlockKind::Code))
        .map(Block::render)
        .collect::<Vec<_>>()
        .join("\n")
}
