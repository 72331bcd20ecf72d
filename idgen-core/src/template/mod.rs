//! Template language: fragments separated by `:`, each compiled into a generator element.
//!
//! | Fragment | Meaning |
//! |---|---|
//! | `a` | value of variable `a` |
//! | `=text` | the literal `text` |
//! | `a+`, `aaa+`, `a3+` | 1, 3, 3 random characters drawn from `a` |
//! | `2a`, `a,2` | first 2 characters of `a` |
//! | `a2` | last 2 characters of `a` |
//! | `2a4`, `a2,4` | characters 2 to 4 of `a` |
//! | `a2,` | characters 2 to the end of `a` |
//! | `a++`, `aaa++`, `a3++` | counter of width 1, 3, 3 using `a` as digits |
//!
//! Positions are 1-based. A fragment in brackets (`[a++]`) is a resolver:
//! it is part of every candidate but does not keep the template alive.

/// Variable name → data mapping supplied by the caller.
pub mod bindings;

/// Ordered pattern table turning fragments into element descriptors.
pub mod classifier;

/// `Template`: compilation and candidate construction.
pub mod compiler;

/// The five element variants and their shared interface.
pub mod element;

pub use bindings::VariableBindings;
pub use classifier::{Classifier, ElementDescriptor, ElementKind, Shape, Span};
pub use compiler::Template;
pub use element::Element;
