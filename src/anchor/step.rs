use crate::view::View;
use std::fmt;

/// One anchor selection: the kind, the native handle it resolved to, and the
/// view it was selected on.
pub struct Step<V: View, K> {
    kind: K,
    anchor: V::Anchor,
    view: V,
}

impl<V: View, K: Copy> Step<V, K> {
    pub(crate) fn new(view: &V, kind: K, anchor: V::Anchor) -> Self {
        Self {
            kind,
            anchor,
            view: view.clone(),
        }
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn anchor(&self) -> &V::Anchor {
        &self.anchor
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: View, K: Copy> Clone for Step<V, K> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            anchor: self.anchor.clone(),
            view: self.view.clone(),
        }
    }
}

impl<V: View, K: fmt::Debug> fmt::Debug for Step<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("kind", &self.kind)
            .field("anchor", &self.anchor)
            .finish()
    }
}
