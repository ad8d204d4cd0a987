//! Root document aggregation and output
//!
//! A [`Document`] collects top-level elements inside a fixed `<html>` /
//! `</html>` pair and is the only type that produces final output: a
//! multi-line string, or a file write with a confirmation message when an
//! output target is configured.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::errors::RenderError;

const OPENING: &str = "<html>";
const CLOSING: &str = "</html>";

/// Root container that aggregates elements and serializes the result.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Document {
    /// Output file target; `None` renders to a string instead.
    output: Option<String>,
    /// Top-level elements' lines, un-indented at the root level.
    content: Vec<String>,
    /// Full rendered document. Never stale.
    lines: Vec<String>,
}

impl Document {
    /// Create an empty document that renders to a string.
    pub fn new() -> Self {
        let mut document = Self {
            output: None,
            content: Vec::new(),
            lines: Vec::new(),
        };
        document.rebuild();
        document
    }

    /// Create an empty document that writes to `path` when rendered.
    /// The target name is lowercased before use.
    pub fn with_output(path: impl Into<String>) -> Self {
        let mut document = Self {
            output: Some(path.into()),
            content: Vec::new(),
            lines: Vec::new(),
        };
        document.rebuild();
        document
    }

    /// Append a top-level element's rendered lines to the document.
    ///
    /// Root-level children are taken as-is, with no added indentation.
    /// Returns `&mut Self` for left-to-right chaining.
    pub fn absorb(&mut self, child: &Element) -> &mut Self {
        self.lines.clear();
        self.content.extend(child.lines().iter().cloned());
        self.rebuild();
        self
    }

    /// Materialize the document.
    ///
    /// Without an output target, returns the document as one string with
    /// each line followed by `\n`. With an output target, truncate-writes
    /// the lines to the (lowercased) path and returns a confirmation naming
    /// the absolute location. Rendering never mutates state; repeated calls
    /// yield byte-identical results.
    pub fn render(&self) -> Result<String, RenderError> {
        match &self.output {
            Some(target) => {
                let target = target.to_lowercase();
                let mut writer = BufWriter::new(File::create(&target)?);
                for line in &self.lines {
                    writeln!(writer, "{line}")?;
                }
                writer.flush()?;
                let location = env::current_dir()?.join(&target);
                log::info!("document written to {}", location.display());
                Ok(format!("Document written to {}", location.display()))
            }
            None => {
                let mut rendered = String::new();
                for line in &self.lines {
                    rendered.push_str(line);
                    rendered.push('\n');
                }
                Ok(rendered)
            }
        }
    }

    /// Current rendered lines, root markers included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Recompute the full document: opening marker, accumulated content,
    /// closing marker.
    fn rebuild(&mut self) {
        self.lines.clear();
        self.lines.push(OPENING.to_string());
        self.lines.extend(self.content.iter().cloned());
        self.lines.push(CLOSING.to_string());
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
