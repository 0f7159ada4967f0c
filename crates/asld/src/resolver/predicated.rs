//! Delegates gated by a predicate.

use tracing::trace;

use super::{check_parameter, Predicate, Resolve};
use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::streams::Node;

/// Runs `delegate` only for nodes of the predicate's exact type that pass
/// the predicate.
#[derive(Debug)]
pub struct TypePredicatedResolver<C, D> {
    delegate: D,
    predicate: Predicate<C>,
}

impl<C, D> TypePredicatedResolver<C, D> {
    /// Builds the resolver.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if the predicate names an unknown type.
    pub fn new(delegate: D, predicate: Predicate<C>) -> Result<Self> {
        check_parameter("predicate", predicate.parameter())?;
        Ok(Self {
            delegate,
            predicate,
        })
    }

    /// Tests `node` and, if it passes, resolves it with the delegate.
    /// `Ok(None)` means the predicate returned false and the delegate was
    /// not consulted.
    ///
    /// # Errors
    ///
    /// [`Error::PredicateUnmatched`] if the node is not of the predicate's
    /// type, [`Error::CannotAssertPredicate`] if a typed predicate cannot
    /// take it, or whatever the delegate reports.
    pub fn apply<R>(&self, ctx: &mut C, node: Node) -> Result<Option<R>>
    where
        D: Resolve<C, R>,
    {
        let name = node.type_name();
        if self.predicate.parameter() != name {
            return Err(Error::PredicateUnmatched(name.to_string()));
        }
        gate(&self.delegate, &self.predicate, ctx, node)
    }
}

/// Runs `delegate` only for nodes that satisfy the predicate's capability
/// (see [`InterfaceResolver`](super::InterfaceResolver)) and pass the
/// predicate.
#[derive(Debug)]
pub struct InterfacePredicatedResolver<C, D> {
    delegate: D,
    predicate: Predicate<C>,
}

impl<C, D> InterfacePredicatedResolver<C, D> {
    /// Builds the resolver.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if the predicate names an unknown capability.
    pub fn new(delegate: D, predicate: Predicate<C>) -> Result<Self> {
        check_parameter("predicate", predicate.parameter())?;
        Ok(Self {
            delegate,
            predicate,
        })
    }

    /// Tests `node` and, if it passes, resolves it with the delegate.
    /// `Ok(None)` means the predicate returned false.
    ///
    /// # Errors
    ///
    /// [`Error::PredicateUnmatched`] if the node lacks the capability,
    /// [`Error::CannotAssertPredicate`] if a typed predicate cannot take it,
    /// or whatever the delegate reports.
    pub fn apply<R>(&self, ctx: &mut C, node: Node) -> Result<Option<R>>
    where
        D: Resolve<C, R>,
    {
        let name = node.type_name();
        if !TypeCatalog::global().satisfies(name, self.predicate.parameter()) {
            return Err(Error::PredicateUnmatched(name.to_string()));
        }
        gate(&self.delegate, &self.predicate, ctx, node)
    }
}

fn gate<C, R, D: Resolve<C, R>>(
    delegate: &D,
    predicate: &Predicate<C>,
    ctx: &mut C,
    node: Node,
) -> Result<Option<R>> {
    if predicate.test(ctx, &node)? {
        delegate.resolve(ctx, node).map(Some)
    } else {
        trace!(kind = node.type_name(), "predicate declined");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::Iri;
    use crate::resolver::{Callback, TypeResolver};
    use crate::streams::{Article, Link, Note, VocabularyType};

    fn delegate() -> TypeResolver<u32, &'static str> {
        TypeResolver::new(vec![
            Callback::named("Note", |calls: &mut u32, _| {
                *calls += 1;
                "note"
            }),
            Callback::named("Article", |calls: &mut u32, _| {
                *calls += 1;
                "article"
            }),
        ])
        .unwrap()
    }

    fn note_with_id() -> Node {
        let mut note = Note::new();
        note.set_id(Iri::parse("https://example.com/n").unwrap()).unwrap();
        note.into_node()
    }

    #[test]
    fn passing_predicate_runs_delegate() {
        let resolver = TypePredicatedResolver::new(
            delegate(),
            Predicate::on::<Note, _>(|_, note: &Note| note.id().is_some()),
        )
        .unwrap();
        let mut calls = 0;
        assert_eq!(resolver.apply(&mut calls, note_with_id()).unwrap(), Some("note"));
        assert_eq!(resolver.apply(&mut calls, Note::new().into()).unwrap(), None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn other_types_do_not_match_the_predicate() {
        let resolver = TypePredicatedResolver::new(
            delegate(),
            Predicate::on::<Note, _>(|_, _: &Note| true),
        )
        .unwrap();
        let err = resolver.apply(&mut 0, Article::new().into()).unwrap_err();
        assert!(matches!(err, Error::PredicateUnmatched(ref name) if name == "Article"));
        assert!(err.is_unmatched());
    }

    #[test]
    fn interface_predicates_accept_capable_types() {
        let resolver = InterfacePredicatedResolver::new(
            delegate(),
            Predicate::named("Note", |_, node: &Node| node.record().id().is_none()),
        )
        .unwrap();
        let mut calls = 0;
        assert_eq!(resolver.apply(&mut calls, Article::new().into()).unwrap(), Some("article"));
        assert_eq!(resolver.apply(&mut calls, note_with_id()).unwrap(), None);
        assert!(matches!(
            resolver.apply(&mut calls, Link::new().into()),
            Err(Error::PredicateUnmatched(_))
        ));
        assert_eq!(calls, 1);
    }

    #[test]
    fn typed_interface_predicates_can_fail_assertion() {
        let resolver = InterfacePredicatedResolver::new(
            delegate(),
            Predicate::on::<Note, _>(|_, _: &Note| true),
        )
        .unwrap();
        let err = resolver.apply(&mut 0, Article::new().into()).unwrap_err();
        assert!(matches!(err, Error::CannotAssertPredicate { .. }));
    }

    #[test]
    fn unknown_predicate_types_fail_construction() {
        let built = TypePredicatedResolver::new(delegate(), Predicate::named("Banana", |_: &mut u32, _| true));
        assert!(matches!(built, Err(Error::Construction(_))));
    }
}
