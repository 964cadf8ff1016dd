//! Render target for chart modules.
//!
//! A [`Container`] is the mutable surface a module draws into: an ordered
//! list of blocks the embedding surface (CLI, report writer) flattens to
//! text. A failed render replaces the whole content with a single
//! [`Block::ErrorPanel`], so stale output from an earlier render never
//! survives a failure.

use std::fmt::Write as _;

/// One rendered block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A drawn chart: a title and its body lines.
    Scene { title: String, lines: Vec<String> },
    /// A visible failure notice shown in place of the chart.
    ErrorPanel {
        title: String,
        message: String,
        hint: String,
    },
}

/// Ordered blocks produced by one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    blocks: Vec<Block>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Appends a scene block.
    pub fn scene(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.blocks.push(Block::Scene {
            title: title.into(),
            lines,
        });
    }

    /// Replaces the content with an error panel for the given chart type.
    pub(crate) fn fail(&mut self, graph_type: &str, message: impl Into<String>) {
        self.clear();
        self.blocks.push(Block::ErrorPanel {
            title: format!("Error Loading Graph: {graph_type}"),
            message: message.into(),
            hint: "Check logs for more details.".to_string(),
        });
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| matches!(block, Block::ErrorPanel { .. }))
    }

    /// Flattens the blocks into displayable text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Scene { title, lines } => {
                    let _ = writeln!(out, "{title}");
                    for line in lines {
                        let _ = writeln!(out, "  {line}");
                    }
                }
                Block::ErrorPanel {
                    title,
                    message,
                    hint,
                } => {
                    let _ = writeln!(out, "{title}");
                    let _ = writeln!(out, "  {message}");
                    let _ = writeln!(out, "  {hint}");
                }
            }
        }
        out
    }
}
