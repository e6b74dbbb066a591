//! # Commandline Object Notation - Syntax Tree
//!
//! This module holds the two node families of the expression language:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[generator]** - The tree the parser builds: scalars, objects and arrays
//!   that can be merged together and produce a [`Value`](crate::Value)
//!
//! ## Quick Start
//!
//! ```text
//! kind=Service metadata.name=entrypoint metadata.labels={app=web tier=:1}
//! ```
//!
//! produces
//!
//! ```text
//! {"kind": "Service", "metadata": {"name": "entrypoint", "labels": {"app": "web", "tier": 1}}}
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields and paths
//!
//! `name=value` assigns a field. `a.b.c=value` is shorthand for
//! `a={b={c=value}}`. Writing the same field twice merges the two writes, so
//! `a.b=1 a.c=2` and `a={b=1} a={c=2}` both give `{"a": {"b": "1", "c": "2"}}`.
//!
//! ### Literals
//!
//! - **Bare** `word` or **quoted** `"a b.c"` - always a string
//! - **Raw** `:42`, `:3.5`, `:true`, `:null` - typed
//! - **Environment** `^HOME` - the value of a process environment variable
//!
//! ### Arrays
//!
//! `[a b :1]` is an array. Inside an array, `name=value` is an object with one
//! field, so `[x=1 y=2]` is `[{"x": "1"}, {"y": "2"}]`.
//!
//! ### Multiple documents
//!
//! An expression starting with `{` or `[` is a sequence of documents:
//! `{a=1} [1 2]` produces two roots.
pub mod generator;
pub mod tokens;

pub use generator::{Array, Forest, Generator, Object};
pub use tokens::{Token, TokenKind};
