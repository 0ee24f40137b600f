//! Create, draw, resize, destroy and key routing on the Dispatcher.

use std::fmt;

use tracing::{debug, trace, warn};
use wdg_common::{Align, Key, Result, WdgError, WidgetId};

use crate::kind::WidgetKind;
use crate::placement::Placement;
use crate::widget::{Context, Widget, WidgetCore};
use crate::window::{Window, WindowOptions};

use super::{Dispatcher, WidgetObject};

impl Dispatcher {
    /// Create a window object. Nothing is drawn until [`draw`](Self::draw)
    /// or [`focus`](Self::focus) is called.
    pub fn create_window(&mut self, placement: Placement, options: WindowOptions) -> WidgetId {
        let id = self.allocate_id();
        let core = WidgetCore::new(id, placement, self.colors);
        let kind = Window::create(options);
        debug!("{id}: created {} at {placement:?}", kind.name());
        self.objects.push(WidgetObject { core, kind });
        id
    }

    /// Set the title of window `id`. Takes effect on its next redraw.
    pub fn set_title(&mut self, id: WidgetId, title: &str, align: Align) -> Result<()> {
        self.window_mut(id)?.set_title(title, align);
        Ok(())
    }

    /// Print formatted text into the content area of window `id`.
    pub fn print(&mut self, id: WidgetId, x: usize, y: usize, args: fmt::Arguments<'_>) -> Result<()> {
        self.with_object(id, |kind, _, ctx| {
            if let Some(window) = kind.as_window_mut() {
                window.print(ctx.screen(), x, y, args);
            }
        })
    }

    /// Draw (or redraw) object `id` at its current placement.
    pub fn draw(&mut self, id: WidgetId) -> Result<()> {
        trace!("{id}: redraw");
        self.with_object(id, |kind, core, ctx| kind.redraw(core, ctx))?
    }

    /// Move/resize object `id`. Objects already on screen are redrawn at
    /// the new bounds right away.
    pub fn set_placement(&mut self, id: WidgetId, placement: Placement) -> Result<()> {
        debug!("{id}: placement {placement:?}");
        self.with_object(id, |kind, core, ctx| {
            core.placement = placement;
            if core.flags.visible {
                kind.resize(core, ctx)
            } else {
                Ok(())
            }
        })?
    }

    /// Adopt a new terminal size and resize every object on screen.
    ///
    /// Every object gets its turn even when an earlier one fails; the
    /// first failure is returned once the pass is over.
    pub fn resize_screen(&mut self, cols: usize, lines: usize) -> Result<()> {
        debug!("screen resized to {cols}x{lines}");
        self.screen.resize(cols, lines)?;
        self.for_each_visible("resize", |kind, core, ctx| kind.resize(core, ctx))
    }

    /// Redraw every object on screen in creation order. After a resize
    /// pass, where objects wipe their old areas one by one, this restores
    /// whatever a later object wiped. Failures are handled as in
    /// [`resize_screen`](Self::resize_screen).
    pub fn redraw_all(&mut self) -> Result<()> {
        self.for_each_visible("redraw", |kind, core, ctx| kind.redraw(core, ctx))
    }

    fn for_each_visible(
        &mut self,
        what: &str,
        mut f: impl FnMut(&mut WidgetKind, &mut WidgetCore, &mut Context<'_>) -> Result<()>,
    ) -> Result<()> {
        let mut first = None;
        for id in self.ids() {
            let result = self.with_object(id, |kind, core, ctx| {
                if core.flags.visible {
                    f(kind, core, ctx)
                } else {
                    Ok(())
                }
            });
            if let Err(e) = result.and_then(|r| r) {
                warn!("{id}: {what} failed: {e}");
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// Send `key` to the focused object, then carry out whatever the
    /// callback requested.
    pub fn dispatch_key(&mut self, key: Key) -> Result<()> {
        let Some(id) = self.focused else {
            trace!("no focused object for key {key}");
            return Ok(());
        };
        trace!("{id}: key {key}");
        self.with_object(id, |kind, core, ctx| kind.get_msg(core, ctx, key))??;
        self.apply_requests()
    }

    /// Destroy object `id`. If it had the focus, the focus passes to the
    /// most recently created remaining object.
    pub fn destroy(&mut self, id: WidgetId) -> Result<()> {
        let index = self
            .objects
            .iter()
            .position(|o| o.core.id == id)
            .ok_or(WdgError::UnknownWidget(id))?;
        let mut object = self.objects.remove(index);

        let mut ctx = Context::new(&mut self.screen, &mut self.requests);
        object.kind.destroy(&mut object.core, &mut ctx);
        debug!("{id}: destroyed ({} left)", self.objects.len());

        if self.focused == Some(id) {
            self.focused = None;
            if let Some(next) = self.objects.last().map(|o| o.core.id) {
                if let Err(e) = self.focus(next) {
                    warn!("{next}: could not take over the focus from {id}: {e}");
                }
            }
        }
        Ok(())
    }

    /// Destroy every object, most recent first.
    pub fn destroy_all(&mut self) {
        self.focused = None;
        while let Some(mut object) = self.objects.pop() {
            let mut ctx = Context::new(&mut self.screen, &mut self.requests);
            object.kind.destroy(&mut object.core, &mut ctx);
        }
        self.requests.clear();
    }
}
