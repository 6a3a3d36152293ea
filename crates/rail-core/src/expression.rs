use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A named grammar rule and the tree describing its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub name: String,
    pub root: Node,
}

impl Expression {
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Expression {
            name: name.into(),
            root,
        }
    }
}
