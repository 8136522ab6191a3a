//! Reads expressions written in nested prefix notation, such as
//! `[+, [number, 3], [variable, "x"]]`, from text.
//!
//! Every element read remembers its span in the source text, so errors found later by
//! [`symex_core::build()`] point back at the text that caused them.
//!
//! ```
//! use symex_core::{Env, Node};
//! use symex_reader::read_node;
//!
//! let node = read_node("[+, [number, 3], [variable, x]]").unwrap();
//! assert_eq!(node, Node::add(Node::number(3.0), Node::variable("x")));
//! assert_eq!(node.evaluate(&Env::new().with_var("x", 4.0)).unwrap(), 7.0);
//! ```

pub mod reader;
pub mod tokenizer;

pub use reader::Reader;

use symex_core::{build, Node, Seq};
use symex_error::Error;

/// Reads exactly one element from the source.
pub fn read(source: &str) -> Result<Seq, Error> {
    Reader::new(source).read_full()
}

/// Reads exactly one element from the source and builds it into an expression tree.
pub fn read_node(source: &str) -> Result<Node, Error> {
    build(&read(source)?)
}
