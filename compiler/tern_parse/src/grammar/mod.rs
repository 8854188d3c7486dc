//! Grammar modules.
//!
//! Each module extends `Parser` with methods for one group of productions:
//!
//! - [`pattern`]: the core pattern grammar and tuple patterns
//! - `default_args`: default values and their provisional contexts
//! - `signature`: function signatures and initializer clauses
//! - `selector`: selector-style parameter clauses
//! - `matching`: matching patterns
//! - `expr` and `ty`: the expression and type grammars patterns embed
//! - `decl`: the declaration shell
//!
//! Every routine returns a `ParseOutcome`. A routine that emits a
//! diagnostic but still builds its node reports `Recovered`; one that
//! cannot build its node reports `Error`. A completion token anywhere
//! turns into `CodeCompletion`, and callers stop structural parsing.

mod decl;
mod default_args;
mod expr;
mod matching;
mod pattern;
mod selector;
mod signature;
mod ty;

pub use decl::{BindingDecl, Decl, FuncDecl, InitDecl};
pub use default_args::DefaultArgumentInfo;
pub use signature::{ConstructorArguments, FunctionSignature};
