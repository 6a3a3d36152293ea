//! Call expressions for the JavaScript `railroad-diagrams` library
//!
//! Sequences, choices and loops only emit their constructor when they have
//! children; an empty one contributes nothing. Optional branches always emit
//! `Optional (...)`.

use crate::render::{Rendered, Writer};
use rail_core::{Expression, Node, NodeKind};

/// Render a rule as a `ComplexDiagram(...).addTo()` statement
pub fn render(expr: &Expression) -> Rendered {
    let mut writer = Writer::default();
    writer.push("ComplexDiagram(\n\t");
    write_node(&mut writer, &expr.root);
    writer.push("\n).addTo()\n");
    writer.finish()
}

/// Render a subtree on its own
pub fn render_node(node: &Node) -> Rendered {
    let mut writer = Writer::default();
    write_node(&mut writer, node);
    writer.finish()
}

pub fn to_diagram(expr: &Expression) -> String {
    render(expr).text
}

fn write_children(w: &mut Writer, node: &Node) {
    w.join(&node.children, ", ", write_node);
}

fn write_call_if_any(w: &mut Writer, node: &Node, open: &str) {
    if node.size() > 0 {
        w.push(open);
        write_children(w, node);
        w.push(")");
    } else {
        write_children(w, node);
    }
}

fn write_node(w: &mut Writer, node: &Node) {
    match node.kind {
        NodeKind::Sequence => write_call_if_any(w, node, "Sequence ("),
        NodeKind::Choice => write_call_if_any(w, node, "Choice (0, "),
        NodeKind::ChoiceRight => {
            w.push("Optional (");
            write_children(w, node);
            w.push(") ");
        }
        NodeKind::ChoiceLeft => {
            w.push("Optional ( ");
            write_children(w, node);
            w.push(")");
        }
        NodeKind::Loop => write_call_if_any(w, node, "OneOrMore ("),
        NodeKind::Annotation => {
            w.push("Comment ('");
            w.push(&node.value);
            w.push("')");
            write_children(w, node);
        }
        NodeKind::Terminal => w.push(&node.value),
        NodeKind::NonTerminal => {
            w.push("NonTerminal('");
            w.push(&node.value);
            w.push("')");
        }
        NodeKind::Group => write_children(w, node),
        NodeKind::ChoiceSingle => w.unexpected(node.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    fn text(node: &Node) -> String {
        let rendered = render_node(node);
        assert!(rendered.is_clean(), "unexpected diagnostics: {:?}", rendered.diagnostics);
        rendered.text
    }

    fn pair(kind: NodeKind) -> Node {
        Node::container(kind)
            .with(Node::non_terminal("a"))
            .with(Node::terminal("'b'"))
    }

    #[test]
    fn test_leaves() {
        assert_eq!(text(&Node::terminal("'x'")), "'x'");
        assert_eq!(text(&Node::non_terminal("expr")), "NonTerminal('expr')");
        assert_eq!(text(&Node::annotation("note")), "Comment ('note')");
    }

    #[test]
    fn test_containers() {
        assert_eq!(text(&pair(NodeKind::Sequence)), "Sequence (NonTerminal('a'), 'b')");
        assert_eq!(text(&pair(NodeKind::Choice)), "Choice (0, NonTerminal('a'), 'b')");
        assert_eq!(text(&pair(NodeKind::Loop)), "OneOrMore (NonTerminal('a'), 'b')");
        assert_eq!(text(&pair(NodeKind::Group)), "NonTerminal('a'), 'b'");
    }

    #[test]
    fn test_optional_branches() {
        let right = Node::wrap(NodeKind::ChoiceRight, Node::non_terminal("a"));
        assert_eq!(text(&right), "Optional (NonTerminal('a')) ");

        let left = Node::wrap(NodeKind::ChoiceLeft, Node::non_terminal("a"));
        assert_eq!(text(&left), "Optional ( NonTerminal('a'))");
    }

    #[test]
    fn test_empty_containers_degrade() {
        assert_eq!(text(&Node::container(NodeKind::Sequence)), "");
        assert_eq!(text(&Node::container(NodeKind::Choice)), "");
        assert_eq!(text(&Node::container(NodeKind::Loop)), "");
        assert_eq!(text(&Node::container(NodeKind::Group)), "");
    }

    #[test]
    fn test_empty_optionals_still_wrap() {
        assert_eq!(text(&Node::container(NodeKind::ChoiceRight)), "Optional () ");
        assert_eq!(text(&Node::container(NodeKind::ChoiceLeft)), "Optional ( )");
    }

    #[test]
    fn test_annotation_with_children() {
        let mut node = Node::annotation("see");
        node.add(Node::non_terminal("x"));
        assert_eq!(text(&node), "Comment ('see')NonTerminal('x')");
    }

    #[test]
    fn test_expression_wrapper() {
        let root = Node::container(NodeKind::Sequence)
            .with(Node::non_terminal("A"))
            .with(Node::wrap(NodeKind::Loop, Node::terminal("'x'")));
        let expr = Expression::new("rule1", root);
        assert_eq!(
            to_diagram(&expr),
            "ComplexDiagram(\n\tSequence (NonTerminal('A'), OneOrMore ('x'))\n).addTo()\n"
        );
    }

    #[test]
    fn test_choice_single_is_reported() {
        let node = Node::container(NodeKind::Choice)
            .with(Node::non_terminal("a"))
            .with(Node::container(NodeKind::ChoiceSingle));

        let rendered = render_node(&node);
        assert_eq!(rendered.text, "Choice (0, NonTerminal('a'), )");
        assert_eq!(
            rendered.diagnostics,
            vec![RenderError::UnexpectedKind(NodeKind::ChoiceSingle)]
        );
    }
}
