// ============================================================================
// CANCELLATION - Un scope por vista montada, un token por petición
// ============================================================================
// La vista crea el scope al montarse y lo cancela al desmontarse; cada
// petición recibe un token hijo y compite contra `cancelled()`.
// ============================================================================

use std::rc::Rc;

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Dueño de la cancelación (la vista)
#[derive(Clone, Debug, Default)]
pub struct CancelScope {
    root: Rc<CancellationToken>,
}

impl CancelScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Si el scope ya está cancelado el token nace cancelado
    pub fn token(&self) -> CancelToken {
        CancelToken {
            inner: self.root.child_token(),
        }
    }

    pub fn cancel(&self) {
        if !self.root.is_cancelled() {
            log::debug!("🛑 Scope cancelado");
        }
        self.root.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl PartialEq for CancelScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }
}

/// Lado de la petición
#[derive(Clone, Debug)]
pub struct CancelToken {
    inner: CancellationToken,
}

impl CancelToken {
    /// Token que nadie cancela (mutaciones: no se cancelan una vez enviadas)
    pub fn none() -> Self {
        Self {
            inner: CancellationToken::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Se resuelve cuando el scope se cancela
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.inner.cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn cancelling_the_scope_reaches_every_token() {
        let scope = CancelScope::new();
        let first = scope.token();
        let second = scope.token();

        scope.cancel();
        scope.cancel();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
        // ya cancelado: se resuelve en el acto
        block_on(first.cancelled());
    }

    #[test]
    fn token_from_cancelled_scope_is_cancelled() {
        let scope = CancelScope::new();
        scope.cancel();
        assert!(scope.token().is_cancelled());
    }

    #[test]
    fn clones_share_the_scope() {
        let scope = CancelScope::new();
        let handle = scope.clone();
        assert_eq!(scope, handle);
        assert_ne!(scope, CancelScope::new());

        handle.cancel();
        assert!(scope.is_cancelled());
    }

    #[test]
    fn scopes_are_independent() {
        let unmounted = CancelScope::new();
        let alive = CancelScope::new();
        unmounted.cancel();
        assert!(!alive.token().is_cancelled());
        assert!(!CancelToken::none().is_cancelled());
    }
}
