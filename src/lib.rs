pub mod node;
pub mod operator;
pub mod printer;

#[cfg(feature = "cli")]
pub mod cli;

pub use node::{Arg, Literal, Node, NodeError};
pub use operator::Operator;
pub use printer::{Dialect, Vocab, WoqlPrinter};
