//! Rail notation front end and renderers
//!
//! This crate reads a grammar rule written in rail notation into a
//! [`rail_core::Expression`] and renders expressions back out, either as rail
//! notation for LaTeX documents or as a call expression for the JavaScript
//! `railroad-diagrams` library.
//!
//! # Examples
//!
//! ```
//! use rail_notation::{parse, to_diagram, to_rail};
//!
//! let expr = parse("rule1 : A 'x' + ;").unwrap().unwrap();
//!
//! assert_eq!(to_rail(&expr), "rule1 :\n\tA  'x' + ");
//! assert_eq!(
//!     to_diagram(&expr),
//!     "ComplexDiagram(\n\tSequence (NonTerminal('A'), OneOrMore ('x'))\n).addTo()\n"
//! );
//! ```
//!
//! # Rail Notation Syntax
//!
//! - Rule: `name : body ;` (the `;` is optional)
//! - Sequence: `a b c`
//! - Choice: `a | b`
//! - Optional: `a |` or `| a`
//! - One or more: `a +`
//! - Group: `( a b )`
//! - Terminal: `'x'` or `"x"`
//! - Annotation: `[text]`
//! - Comments: `// ...`

pub mod diagram;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod rail;
pub mod render;
pub mod span;


pub use diagram::to_diagram;
pub use error::{ParseError, RenderError, Result};
pub use lexer::{Lexer, Token};
pub use parser::{parse, Parser};
pub use rail::to_rail;
pub use render::Rendered;
pub use span::Span;
