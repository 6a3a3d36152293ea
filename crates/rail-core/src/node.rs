use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a grammar node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Sequence,    // a b c
    Choice,      // a | b
    ChoiceRight, // a |
    ChoiceLeft,  // | a
    ChoiceSingle,
    Loop,        // a +
    Annotation,  // [text]
    Terminal,    // 'x'
    NonTerminal, // rule
    Group,       // ( ... )
}

impl NodeKind {
    /// Kinds whose nodes are spliced instead of nested when added to a node of the same kind
    pub fn flattens(&self) -> bool {
        matches!(self, NodeKind::Sequence | NodeKind::Choice)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Sequence => "sequence",
            NodeKind::Choice => "choice",
            NodeKind::ChoiceRight => "choice_right",
            NodeKind::ChoiceLeft => "choice_left",
            NodeKind::ChoiceSingle => "choice_single",
            NodeKind::Loop => "loop",
            NodeKind::Annotation => "annotation",
            NodeKind::Terminal => "terminal",
            NodeKind::NonTerminal => "non_terminal",
            NodeKind::Group => "group",
        };
        write!(f, "{}", name)
    }
}

/// A node of the grammar expression tree
///
/// `value` is only meaningful for leaves (terminals, non-terminals and
/// annotations), `children` only for containers. Nodes own their children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node holding `value`
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Node {
            kind,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Create a container node without children
    pub fn container(kind: NodeKind) -> Self {
        Node {
            kind,
            value: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a container node holding `child`
    ///
    /// The child goes through [`Node::add`], so wrapping a sequence in a
    /// sequence yields the inner sequence's children.
    pub fn wrap(kind: NodeKind, child: Node) -> Self {
        let mut node = Node::container(kind);
        node.add(child);
        node
    }

    pub fn terminal(value: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Terminal, value)
    }

    pub fn non_terminal(value: impl Into<String>) -> Self {
        Node::leaf(NodeKind::NonTerminal, value)
    }

    pub fn annotation(value: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Annotation, value)
    }

    /// Append a child
    ///
    /// A sequence added to a sequence, or a choice added to a choice, has its
    /// children spliced in. Anything else is appended as a single child.
    pub fn add(&mut self, child: Node) {
        if child.kind == self.kind && self.kind.flattens() {
            self.children.extend(child.children);
        } else {
            self.children.push(child);
        }
    }

    /// Add two children, in order
    pub fn add_pair(&mut self, first: Node, second: Node) {
        self.add(first);
        self.add(second);
    }

    /// Builder form of [`Node::add`]
    pub fn with(mut self, child: Node) -> Self {
        self.add(child);
        self
    }

    /// Number of direct children
    pub fn size(&self) -> usize {
        self.children.len()
    }

    pub fn is_seq(&self) -> bool {
        self.kind == NodeKind::Sequence
    }

    pub fn is_choice(&self) -> bool {
        self.kind == NodeKind::Choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(values: &[&str]) -> Node {
        values
            .iter()
            .fold(Node::container(NodeKind::Sequence), |node, v| {
                node.with(Node::non_terminal(*v))
            })
    }

    fn choice(values: &[&str]) -> Node {
        values
            .iter()
            .fold(Node::container(NodeKind::Choice), |node, v| {
                node.with(Node::terminal(*v))
            })
    }

    #[test]
    fn test_leaf_creation() {
        let node = Node::terminal("'x'");
        assert_eq!(node.kind, NodeKind::Terminal);
        assert_eq!(node.value, "'x'");
        assert_eq!(node.size(), 0);
    }

    #[test]
    fn test_wrap_holds_one_child() {
        let node = Node::wrap(NodeKind::Loop, Node::non_terminal("expr"));
        assert_eq!(node.kind, NodeKind::Loop);
        assert_eq!(node.size(), 1);
        assert_eq!(node.children[0], Node::non_terminal("expr"));
        assert!(node.value.is_empty());
    }

    #[test]
    fn test_sequence_into_sequence_splices() {
        let mut a = seq(&["a", "b"]);
        a.add(seq(&["c", "d"]));
        assert_eq!(a, seq(&["a", "b", "c", "d"]));
        assert!(a.children.iter().all(|c| !c.is_seq()));
    }

    #[test]
    fn test_choice_into_choice_splices() {
        let mut a = choice(&["a"]);
        a.add(choice(&["b", "c"]));
        assert_eq!(a.size(), 3);
        assert!(a.children.iter().all(|c| !c.is_choice()));
    }

    #[test]
    fn test_mixed_kinds_nest() {
        let mut a = seq(&["a"]);
        a.add(choice(&["b", "c"]));
        assert_eq!(a.size(), 2);
        assert!(a.children[1].is_choice());

        let mut c = choice(&["a"]);
        c.add(seq(&["b", "c"]));
        assert_eq!(c.size(), 2);
        assert!(c.children[1].is_seq());
    }

    #[test]
    fn test_non_flattening_kinds_nest() {
        let mut outer = Node::wrap(NodeKind::Loop, Node::terminal("'x'"));
        outer.add(Node::wrap(NodeKind::Loop, Node::terminal("'y'")));
        assert_eq!(outer.size(), 2);
        assert_eq!(outer.children[1].kind, NodeKind::Loop);

        let mut group = Node::container(NodeKind::Group);
        group.add(Node::container(NodeKind::Group));
        assert_eq!(group.size(), 1);
    }

    #[test]
    fn test_wrap_sequence_in_sequence() {
        let node = Node::wrap(NodeKind::Sequence, seq(&["a", "b"]));
        assert_eq!(node, seq(&["a", "b"]));
    }

    #[test]
    fn test_add_pair() {
        let mut node = Node::container(NodeKind::Sequence);
        node.add_pair(seq(&["a", "b"]), Node::non_terminal("c"));
        assert_eq!(node, seq(&["a", "b", "c"]));
    }

    #[test]
    fn test_predicates() {
        assert!(seq(&[]).is_seq());
        assert!(!seq(&[]).is_choice());
        assert!(choice(&[]).is_choice());
        assert!(!Node::container(NodeKind::ChoiceRight).is_choice());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::ChoiceSingle.to_string(), "choice_single");
        assert_eq!(NodeKind::NonTerminal.to_string(), "non_terminal");
    }

    fn leaf_strategy() -> impl Strategy<Value = Node> {
        prop_oneof![
            "[a-z]{1,6}".prop_map(|s| Node::non_terminal(s)),
            "'[a-z]{1,4}'".prop_map(|s| Node::terminal(s)),
            "[a-z ]{1,8}".prop_map(|s| Node::annotation(s)),
        ]
    }

    fn kind_strategy() -> impl Strategy<Value = NodeKind> {
        prop_oneof![
            Just(NodeKind::Sequence),
            Just(NodeKind::Choice),
            Just(NodeKind::ChoiceRight),
            Just(NodeKind::ChoiceLeft),
            Just(NodeKind::Loop),
            Just(NodeKind::Group),
        ]
    }

    fn container_strategy() -> impl Strategy<Value = Node> {
        (kind_strategy(), prop::collection::vec(leaf_strategy(), 0..5)).prop_map(
            |(kind, leaves)| {
                let mut node = Node::container(kind);
                node.children = leaves;
                node
            },
        )
    }

    proptest! {
        #[test]
        fn prop_same_flattening_kind_concatenates(
            kind in prop_oneof![Just(NodeKind::Sequence), Just(NodeKind::Choice)],
            left in prop::collection::vec(leaf_strategy(), 0..5),
            right in prop::collection::vec(leaf_strategy(), 0..5),
        ) {
            let mut a = Node::container(kind);
            a.children = left.clone();
            let mut b = Node::container(kind);
            b.children = right.clone();

            a.add(b);

            let expected: Vec<Node> = left.into_iter().chain(right).collect();
            prop_assert_eq!(&a.children, &expected);
            prop_assert!(a.children.iter().all(|c| c.kind != kind));
        }

        #[test]
        fn prop_other_combinations_append_whole(a in container_strategy(), b in container_strategy()) {
            prop_assume!(!(a.kind == b.kind && a.kind.flattens()));
            let mut merged = a.clone();
            merged.add(b.clone());

            prop_assert_eq!(merged.size(), a.size() + 1);
            prop_assert_eq!(&merged.children[..a.size()], &a.children[..]);
            prop_assert_eq!(merged.children.last(), Some(&b));
        }

        #[test]
        fn prop_leaf_is_appended_whole(a in container_strategy(), leaf in leaf_strategy()) {
            let mut merged = a.clone();
            merged.add(leaf.clone());
            prop_assert_eq!(merged.children.last(), Some(&leaf));
            prop_assert_eq!(merged.size(), a.size() + 1);
        }
    }
}
