//! Callbacks and predicates, each tagged with the vocabulary type its
//! signature accepts.

use std::fmt;

use crate::error::{Error, Result};
use crate::streams::{Node, VocabularyType};

type Invoke<C, R> = Box<dyn Fn(&mut C, Node) -> Result<R> + Send + Sync>;
type Test<C> = Box<dyn Fn(&mut C, &Node) -> Result<bool> + Send + Sync>;

/// A handler for values of one type (or, in an
/// [`InterfaceResolver`](super::InterfaceResolver), one capability).
pub struct Callback<C, R> {
    parameter: String,
    invoke: Invoke<C, R>,
}

impl<C, R> Callback<C, R> {
    /// A callback taking the concrete binding `T`.
    pub fn on<T, F>(f: F) -> Self
    where
        T: VocabularyType + 'static,
        F: Fn(&mut C, T) -> R + Send + Sync + 'static,
    {
        Self {
            parameter: T::NAME.to_string(),
            invoke: Box::new(move |ctx, node| {
                let found = node.type_name();
                T::from_node(node)
                    .map(|value| f(ctx, value))
                    .map_err(|_| Error::CannotAssertType {
                        expected: T::NAME.to_string(),
                        found: found.to_string(),
                    })
            }),
        }
    }

    /// A callback taking any node, accepted for the type named `name`.
    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut C, Node) -> R + Send + Sync + 'static,
    {
        Self {
            parameter: name.into(),
            invoke: Box::new(move |ctx, node| Ok(f(ctx, node))),
        }
    }

    /// The type name the signature accepts.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Runs the callback.
    ///
    /// # Errors
    ///
    /// [`Error::CannotAssertType`] if a typed callback receives a node of
    /// another type.
    pub fn call(&self, ctx: &mut C, node: Node) -> Result<R> {
        (self.invoke)(ctx, node)
    }
}

impl<C, R> fmt::Debug for Callback<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("parameter", &self.parameter)
            .finish_non_exhaustive()
    }
}

/// A boolean test gating a delegate resolver.
pub struct Predicate<C> {
    parameter: String,
    test: Test<C>,
}

impl<C> Predicate<C> {
    /// A predicate over the concrete binding `T`.
    pub fn on<T, F>(f: F) -> Self
    where
        T: VocabularyType + 'static,
        F: Fn(&mut C, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            parameter: T::NAME.to_string(),
            test: Box::new(move |ctx, node| match T::from_node_ref(node) {
                Some(value) => Ok(f(ctx, value)),
                None => Err(Error::CannotAssertPredicate {
                    expected: T::NAME.to_string(),
                    found: node.type_name().to_string(),
                }),
            }),
        }
    }

    /// A predicate over any node, accepted for the type named `name`.
    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut C, &Node) -> bool + Send + Sync + 'static,
    {
        Self {
            parameter: name.into(),
            test: Box::new(move |ctx, node| Ok(f(ctx, node))),
        }
    }

    /// The type name the signature accepts.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Runs the test.
    ///
    /// # Errors
    ///
    /// [`Error::CannotAssertPredicate`] if a typed predicate receives a node
    /// of another type.
    pub fn test(&self, ctx: &mut C, node: &Node) -> Result<bool> {
        (self.test)(ctx, node)
    }
}

impl<C> fmt::Debug for Predicate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("parameter", &self.parameter)
            .finish_non_exhaustive()
    }
}
