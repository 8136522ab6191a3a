//! Symbolic expression trees.
//!
//! An expression is a tree of [`Node`]s, built from a nested prefix sequence ([`Seq`]) with
//! [`build()`]. A tree can be evaluated under an [`Env`], simplified with [`simplify()`], and
//! differentiated with [`derive()`]:
//!
//! ```
//! use symex_core::{build, derive, seq, simplify, Env, Node};
//!
//! // 3 + x
//! let node = build(&seq![+, [number, 3], [variable, "x"]]).unwrap();
//! assert_eq!(node.evaluate(&Env::new().with_var("x", 4.0)).unwrap(), 7.0);
//!
//! // 0 * sin(x) + 1 * x
//! let node = build(&seq![+, [*, [number, 0], [sin, [variable, x]]], [*, [number, 1], [variable, x]]]).unwrap();
//! assert_eq!(simplify(&node), Node::variable("x"));
//!
//! // d/dx x * x
//! let node = build(&seq![*, [variable, x], [variable, x]]).unwrap();
//! let derived = derive(&node, "x");
//! assert_eq!(derived.evaluate(&Env::new().with_var("x", 3.0)).unwrap(), 6.0);
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for [`Node`], [`Seq`], [`Env`] and
//! [`Step`].
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod build;
pub mod derivative;
pub mod env;
pub mod error;
mod eval;
pub mod node;
pub mod seq;
pub mod simplify;
pub mod step_collector;

pub use build::{build, Tag};
pub use derivative::derive;
pub use env::Env;
pub use node::Node;
pub use seq::{Seq, SeqKind};
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
pub use symex_error::Error;
