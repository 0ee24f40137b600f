//! The closed set of widget kinds the dispatcher can host.

use wdg_common::{Key, Result};

use crate::widget::{Context, Widget, WidgetCore};
use crate::window::Window;

/// Typed per-kind state of a widget object.
#[derive(Debug)]
pub enum WidgetKind {
    Window(Window),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Window(_) => "window",
        }
    }

    pub fn as_window(&self) -> Option<&Window> {
        match self {
            WidgetKind::Window(window) => Some(window),
        }
    }

    pub fn as_window_mut(&mut self) -> Option<&mut Window> {
        match self {
            WidgetKind::Window(window) => Some(window),
        }
    }

    fn widget(&mut self) -> &mut dyn Widget {
        match self {
            WidgetKind::Window(window) => window,
        }
    }
}

impl Widget for WidgetKind {
    fn destroy(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) {
        self.widget().destroy(core, ctx)
    }

    fn resize(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        self.widget().resize(core, ctx)
    }

    fn redraw(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        self.widget().redraw(core, ctx)
    }

    fn get_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        self.widget().get_focus(core, ctx)
    }

    fn lost_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        self.widget().lost_focus(core, ctx)
    }

    fn get_msg(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>, key: Key) -> Result<()> {
        self.widget().get_msg(core, ctx, key)
    }
}
