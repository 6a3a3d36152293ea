//! Node tree for railroad grammar expressions
//!
//! A grammar rule is held as an [`Expression`]: a name plus a tree of
//! [`Node`]s. Containers (sequences, choices, optional branches, loops and
//! groups) own their children; leaves (terminals, non-terminals and
//! annotations) carry a string value.
//!
//! # Examples
//!
//! ```
//! use rail_core::{Expression, Node, NodeKind};
//!
//! // rule1 : A 'x' +
//! let mut body = Node::container(NodeKind::Sequence);
//! body.add_pair(
//!     Node::non_terminal("A"),
//!     Node::wrap(NodeKind::Loop, Node::terminal("'x'")),
//! );
//! let expr = Expression::new("rule1", body);
//! assert_eq!(expr.root.size(), 2);
//! ```
//!
//! Adding a sequence to a sequence (or a choice to a choice) splices the
//! children in, so neither kind ever directly contains itself.

pub mod expression;
pub mod node;

pub use expression::Expression;
pub use node::{Node, NodeKind};
