//! Domain layer: tokens, AST model, display hierarchy and layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod ast;
pub mod hierarchy;
pub mod layout;
pub mod token;

pub use arena::{NodeData, PositionedNode, PositionedTree};
pub use ast::{display_value, AstNode, OptimizationResult};
pub use hierarchy::{normalize, HierarchyNode, NodeCategory};
pub use layout::{TidyTreeLayout, TreeLayout};
pub use token::{tokenize, Token, TokenKind, TokenLine, Tokenizer};
