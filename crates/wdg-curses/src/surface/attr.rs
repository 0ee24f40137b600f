//! Attribute switching, including the scoped guard.

use std::ops::{Deref, DerefMut};

use wdg_common::PairId;

use super::core::Surface;
use crate::cell::{Attr, CellAttributes};

impl Surface {
    pub fn attr_on(&mut self, attr: Attr) {
        self.attrs.set(attr, true);
    }

    pub fn attr_off(&mut self, attr: Attr) {
        self.attrs.set(attr, false);
    }

    pub fn set_attrs(&mut self, attrs: CellAttributes) {
        self.attrs = attrs;
    }

    pub fn set_pair(&mut self, pair: PairId) {
        self.attrs.pair = pair;
    }

    /// Switch `attrs` on for the lifetime of the returned guard. The
    /// previous drawing attributes are restored when it is dropped.
    pub fn attr_scope(&mut self, attrs: &[Attr]) -> AttrScope<'_> {
        let saved = self.attrs;
        for &attr in attrs {
            self.attrs.set(attr, true);
        }
        AttrScope {
            surface: self,
            saved,
        }
    }
}

/// Guard returned by [`Surface::attr_scope`].
pub struct AttrScope<'a> {
    surface: &'a mut Surface,
    saved: CellAttributes,
}

impl Deref for AttrScope<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for AttrScope<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for AttrScope<'_> {
    fn drop(&mut self) {
        self.surface.attrs = self.saved;
    }
}
