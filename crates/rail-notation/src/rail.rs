//! Rail notation, as typeset by the LaTeX `rail` package
//!
//! `a  | b ` style spacing comes from every leaf carrying its own trailing
//! space before separators are added.

use crate::render::{Rendered, Writer};
use rail_core::{Expression, Node, NodeKind};

/// Render a rule as `name :` followed by its tab-indented body
pub fn render(expr: &Expression) -> Rendered {
    let mut writer = Writer::default();
    writer.push(&expr.name);
    writer.push(" :\n\t");
    write_node(&mut writer, &expr.root);
    writer.finish()
}

/// Render a subtree on its own
pub fn render_node(node: &Node) -> Rendered {
    let mut writer = Writer::default();
    write_node(&mut writer, node);
    writer.finish()
}

pub fn to_rail(expr: &Expression) -> String {
    render(expr).text
}

fn write_node(w: &mut Writer, node: &Node) {
    match node.kind {
        NodeKind::Sequence => w.join(&node.children, " ", write_node),
        NodeKind::Choice => w.join(&node.children, " | ", write_node),
        NodeKind::ChoiceRight => {
            w.join(&node.children, " ", write_node);
            w.push("| ");
        }
        NodeKind::ChoiceLeft => {
            w.push("| ");
            w.join(&node.children, " ", write_node);
        }
        NodeKind::Loop => {
            w.join(&node.children, " ", write_node);
            w.push("+ ");
        }
        NodeKind::Annotation => {
            w.push("[");
            w.push(&node.value);
            w.push("] ");
        }
        NodeKind::Terminal | NodeKind::NonTerminal => {
            w.push(&node.value);
            w.push(" ");
        }
        NodeKind::Group => {
            w.push("(");
            w.join(&node.children, " ", write_node);
            w.push(")");
        }
        NodeKind::ChoiceSingle => w.unexpected(node.kind),
    }
}
