//! Dispatch on exact type.

use tracing::debug;

use super::{check_callbacks, Callback, Resolve};
use crate::error::{Error, Result};
use crate::streams::Node;

/// Hands each node to the first callback whose signature names exactly
/// the node's type.
#[derive(Debug)]
pub struct TypeResolver<C, R> {
    callbacks: Vec<Callback<C, R>>,
}

impl<C, R> TypeResolver<C, R> {
    /// Builds the resolver.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if any callback names an unknown type.
    pub fn new(callbacks: Vec<Callback<C, R>>) -> Result<Self> {
        check_callbacks(&callbacks)?;
        Ok(Self { callbacks })
    }

    /// The callbacks, in match order.
    #[must_use]
    pub fn callbacks(&self) -> &[Callback<C, R>] {
        &self.callbacks
    }
}

impl<C, R> Resolve<C, R> for TypeResolver<C, R> {
    fn resolve(&self, ctx: &mut C, node: Node) -> Result<R> {
        let name = node.type_name();
        match self.callbacks.iter().find(|cb| cb.parameter() == name) {
            Some(callback) => callback.call(ctx, node),
            None => {
                debug!(kind = name, "no callback for type");
                Err(Error::NoCallbackMatch(name.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::{Article, Create, Note};

    fn resolver() -> TypeResolver<Vec<String>, &'static str> {
        TypeResolver::new(vec![
            Callback::on::<Note, _>(|log: &mut Vec<String>, _| {
                log.push("note".into());
                "note"
            }),
            Callback::named("Article", |_: &mut Vec<String>, _| "article"),
        ])
        .unwrap()
    }

    #[test]
    fn dispatches_on_exact_type() {
        let mut log = Vec::new();
        let resolver = resolver();
        assert_eq!(resolver.resolve(&mut log, Note::new().into()).unwrap(), "note");
        assert_eq!(resolver.resolve(&mut log, Article::new().into()).unwrap(), "article");
        assert_eq!(log, ["note"]);
    }

    #[test]
    fn unmatched_types_are_reported() {
        let err = resolver().resolve(&mut Vec::new(), Create::new().into()).unwrap_err();
        assert!(matches!(err, Error::NoCallbackMatch(ref name) if name == "Create"));
        assert!(err.is_unmatched());
    }

    #[test]
    fn unknown_signatures_fail_construction() {
        let built = TypeResolver::<(), ()>::new(vec![
            Callback::named("Note", |_, _| ()),
            Callback::named("Banana", |_, _| ()),
        ]);
        assert!(matches!(built, Err(Error::Construction(_))));
    }
}
