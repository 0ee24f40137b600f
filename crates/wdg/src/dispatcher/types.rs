//! Core types and constructors for the Dispatcher.

use tracing::{debug, warn};
use wdg_common::{Result, WdgError, WidgetId};
use wdg_config::ColorScheme;
use wdg_curses::Screen;

use crate::kind::WidgetKind;
use crate::widget::{Context, Request, WidgetColors, WidgetCore};
use crate::window::Window;

/// A widget object: the generic core plus the per-kind state.
#[derive(Debug)]
pub(super) struct WidgetObject {
    pub(super) core: WidgetCore,
    pub(super) kind: WidgetKind,
}

pub struct Dispatcher {
    pub(super) screen: Screen,
    /// Objects in creation order.
    pub(super) objects: Vec<WidgetObject>,
    pub(super) focused: Option<WidgetId>,
    /// Colors given to newly created objects.
    pub(super) colors: WidgetColors,
    /// Requests queued by callbacks, applied once the callback returns.
    pub(super) requests: Vec<Request>,
    pub(super) next_id: u32,
}

impl Dispatcher {
    /// Take over `screen` and register `scheme` under
    /// [`WidgetColors::STANDARD`].
    pub fn new(mut screen: Screen, scheme: &ColorScheme) -> Self {
        let colors = WidgetColors::STANDARD;
        for (pair, color) in [
            (colors.border, scheme.border),
            (colors.focus, scheme.focus),
            (colors.title, scheme.title),
            (colors.window, scheme.window),
        ] {
            screen.init_pair(pair, color.fg, color.bg);
        }

        Self {
            screen,
            objects: Vec::new(),
            focused: None,
            colors,
            requests: Vec::new(),
            next_id: 1,
        }
    }

    // -- Accessors --

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object ids in creation order.
    pub fn ids(&self) -> Vec<WidgetId> {
        self.objects.iter().map(|o| o.core.id).collect()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.objects.iter().any(|o| o.core.id == id)
    }

    pub fn core(&self, id: WidgetId) -> Result<&WidgetCore> {
        self.object(id).map(|o| &o.core)
    }

    /// Mutable access to an object's core. Changes to its placement take
    /// effect on the next redraw or resize.
    pub fn core_mut(&mut self, id: WidgetId) -> Result<&mut WidgetCore> {
        self.object_mut(id).map(|o| &mut o.core)
    }

    pub fn window(&self, id: WidgetId) -> Result<&Window> {
        self.object(id)?
            .kind
            .as_window()
            .ok_or(WdgError::UnknownWidget(id))
    }

    pub fn window_mut(&mut self, id: WidgetId) -> Result<&mut Window> {
        self.object_mut(id)?
            .kind
            .as_window_mut()
            .ok_or(WdgError::UnknownWidget(id))
    }

    // -- Internals --

    pub(super) fn object(&self, id: WidgetId) -> Result<&WidgetObject> {
        self.objects
            .iter()
            .find(|o| o.core.id == id)
            .ok_or(WdgError::UnknownWidget(id))
    }

    pub(super) fn object_mut(&mut self, id: WidgetId) -> Result<&mut WidgetObject> {
        self.objects
            .iter_mut()
            .find(|o| o.core.id == id)
            .ok_or(WdgError::UnknownWidget(id))
    }

    pub(super) fn allocate_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Run a callback on object `id` with a context over the screen and
    /// the request queue.
    pub(super) fn with_object<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut WidgetKind, &mut WidgetCore, &mut Context<'_>) -> R,
    ) -> Result<R> {
        let object = self
            .objects
            .iter_mut()
            .find(|o| o.core.id == id)
            .ok_or(WdgError::UnknownWidget(id))?;
        let mut ctx = Context::new(&mut self.screen, &mut self.requests);
        Ok(f(&mut object.kind, &mut object.core, &mut ctx))
    }

    /// Apply the requests queued by callbacks. The whole queue is worked
    /// off before the first failure is returned.
    pub(super) fn apply_requests(&mut self) -> Result<()> {
        let mut first = None;
        for request in std::mem::take(&mut self.requests) {
            match request {
                Request::Destroy(id) => {
                    if !self.contains(id) {
                        debug!("{id}: destroy requested for a gone object");
                    } else if let Err(e) = self.destroy(id) {
                        warn!("{id}: requested destroy failed: {e}");
                        first.get_or_insert(e);
                    }
                }
            }
        }
        first.map_or(Ok(()), Err)
    }
}
