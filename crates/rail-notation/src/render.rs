use crate::error::RenderError;
use rail_core::{Node, NodeKind};

/// Output of a renderer run
///
/// `text` is always usable: nodes the renderer could not handle contribute
/// nothing to it and are listed in `diagnostics` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub diagnostics: Vec<RenderError>,
}

impl Rendered {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Output buffer shared by the renderers
#[derive(Default)]
pub(crate) struct Writer {
    out: String,
    diagnostics: Vec<RenderError>,
}

impl Writer {
    pub(crate) fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Render `nodes` with `each`, writing `sep` between consecutive ones
    pub(crate) fn join(&mut self, nodes: &[Node], sep: &str, each: fn(&mut Writer, &Node)) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.push(sep);
            }
            each(self, node);
        }
    }

    pub(crate) fn unexpected(&mut self, kind: NodeKind) {
        tracing::error!("unexpected node type {}", kind);
        self.diagnostics.push(RenderError::UnexpectedKind(kind));
    }

    pub(crate) fn finish(self) -> Rendered {
        Rendered {
            text: self.out,
            diagnostics: self.diagnostics,
        }
    }
}
