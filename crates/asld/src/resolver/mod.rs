//! Dispatch of decoded documents to application callbacks.
//!
//! Five strategies share one error contract:
//!
//! - [`DocumentResolver`] decodes a raw JSON object and dispatches on its
//!   `type`;
//! - [`TypeResolver`] dispatches a decoded [`Node`] on its exact type;
//! - [`InterfaceResolver`] dispatches on capability: a callback for `T`
//!   accepts any value whose type declares every property `T` declares;
//! - [`TypePredicatedResolver`] and [`InterfacePredicatedResolver`] gate a
//!   delegate behind a predicate.
//!
//! Construction validates every signature up front. A failed dispatch
//! reports one of the "unmatched" errors (see
//! [`Error::is_unmatched`](crate::Error::is_unmatched)), so a caller can
//! chain strategies.

mod callback;
mod document;
mod interface;
mod predicated;
mod type_;

pub use callback::{Callback, Predicate};
pub use document::DocumentResolver;
pub use interface::InterfaceResolver;
pub use predicated::{InterfacePredicatedResolver, TypePredicatedResolver};
pub use type_::TypeResolver;

use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::streams::Node;

/// A strategy that dispatches decoded nodes.
pub trait Resolve<C, R> {
    /// Hands `node` to the first matching callback and returns its result.
    ///
    /// # Errors
    ///
    /// [`Error::NoCallbackMatch`] if no callback accepts the node, or
    /// whatever the callback reports.
    fn resolve(&self, ctx: &mut C, node: Node) -> Result<R>;
}

fn check_parameter(role: &str, parameter: &str) -> Result<()> {
    if TypeCatalog::global().contains(parameter) {
        Ok(())
    } else {
        Err(Error::Construction(format!(
            "{role} parameter {parameter:?} names no known type"
        )))
    }
}

fn check_callbacks<C, R>(callbacks: &[Callback<C, R>]) -> Result<()> {
    callbacks
        .iter()
        .try_for_each(|cb| check_parameter("callback", cb.parameter()))
}
