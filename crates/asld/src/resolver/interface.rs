//! Dispatch on capability.

use tracing::debug;

use super::{check_callbacks, Callback, Resolve};
use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::streams::Node;

/// Hands each node to the first callback whose capability it satisfies.
///
/// The capability of type `T` is the set of properties `T` declares; a node
/// satisfies it if its own type declares all of them. A callback may
/// therefore receive a node of a different concrete type than its
/// signature names: typed callbacks ([`Callback::on`]) then fail with
/// [`Error::CannotAssertType`], so interface callbacks are usually built
/// with [`Callback::named`].
#[derive(Debug)]
pub struct InterfaceResolver<C, R> {
    callbacks: Vec<Callback<C, R>>,
}

impl<C, R> InterfaceResolver<C, R> {
    /// Builds the resolver.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if any callback names an unknown capability.
    pub fn new(callbacks: Vec<Callback<C, R>>) -> Result<Self> {
        check_callbacks(&callbacks)?;
        Ok(Self { callbacks })
    }
}

impl<C, R> Resolve<C, R> for InterfaceResolver<C, R> {
    fn resolve(&self, ctx: &mut C, node: Node) -> Result<R> {
        let catalog = TypeCatalog::global();
        let name = node.type_name();
        match self
            .callbacks
            .iter()
            .find(|cb| catalog.satisfies(name, cb.parameter()))
        {
            Some(callback) => callback.call(ctx, node),
            None => {
                debug!(kind = name, "no callback capability satisfied");
                Err(Error::NoCallbackMatch(name.to_string()))
            }
        }
    }
}
