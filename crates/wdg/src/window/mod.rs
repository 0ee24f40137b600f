//! The window widget: a bordered, titled frame around a scrolling content
//! area.
//!
//! Each window owns two surfaces. The frame covers the object's bounds and
//! carries the border and the title; the content area sits one cell inside
//! it and receives all text output. Both are allocated on the first redraw
//! and moved/resized in place afterwards.

mod border;


use std::fmt;

use tracing::{debug, trace, warn};
use wdg_common::{Align, Geometry, Key, Result, WdgError};
use wdg_config::WindowConfig;
use wdg_curses::{Screen, Surface};

use crate::kind::WidgetKind;
use crate::widget::{Context, Widget, WidgetCore};

/// Creation-time settings of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: Option<String>,
    pub align: Align,
    /// Write every received key code into the content area.
    pub echo_keys: bool,
    /// Key that asks the dispatcher to destroy the window.
    pub quit_key: char,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: None,
            align: Align::Left,
            echo_keys: true,
            quit_key: 'q',
        }
    }
}

impl From<&WindowConfig> for WindowOptions {
    fn from(config: &WindowConfig) -> Self {
        Self {
            title: Some(config.title.clone()).filter(|t| !t.is_empty()),
            align: config.align,
            echo_keys: config.echo_keys,
            quit_key: config.quit_key,
        }
    }
}

/// The two surfaces of a drawn window. They exist together or not at all.
#[derive(Debug)]
struct WindowSurfaces {
    frame: Surface,
    content: Surface,
}

#[derive(Debug)]
pub struct Window {
    surfaces: Option<WindowSurfaces>,
    title: Option<String>,
    align: Align,
    echo_keys: bool,
    quit_key: char,
}

impl Window {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            surfaces: None,
            title: options.title,
            align: options.align,
            echo_keys: options.echo_keys,
            quit_key: options.quit_key,
        }
    }

    /// Build the window kind for a freshly created widget object.
    pub fn create(options: WindowOptions) -> WidgetKind {
        WidgetKind::Window(Self::new(options))
    }

    /// Set the title and its alignment. Takes effect on the next redraw.
    pub fn set_title(&mut self, title: &str, align: Align) {
        self.title = Some(title.to_owned());
        self.align = align;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Whether the surfaces have been allocated by a redraw.
    pub fn is_drawn(&self) -> bool {
        self.surfaces.is_some()
    }

    pub fn frame(&self) -> Option<&Surface> {
        self.surfaces.as_ref().map(|s| &s.frame)
    }

    pub fn content(&self) -> Option<&Surface> {
        self.surfaces.as_ref().map(|s| &s.content)
    }

    /// Write formatted text at (`x`, `y`) of the content area and flush it.
    ///
    /// Failures are logged, never returned. An out-of-range position leaves
    /// the cursor where it was and the text is written there.
    pub fn print(&mut self, screen: &mut Screen, x: usize, y: usize, args: fmt::Arguments<'_>) {
        let Some(surfaces) = self.surfaces.as_mut() else {
            warn!("print on a window that was never drawn");
            return;
        };
        let content = &mut surfaces.content;
        if let Err(e) = content.move_cursor(y, x) {
            warn!("window print: {e}");
        }
        if let Err(e) = content.print_fmt(args) {
            warn!("window print: {e}");
        }
        if let Err(e) = screen.refresh(content) {
            warn!("window print: refresh failed: {e}");
        }
    }

    /// Allocate and initialize both surfaces. A frame allocated before a
    /// failing content allocation is dropped with the error.
    fn allocate(
        &self,
        core: &WidgetCore,
        screen: &Screen,
        outer: Geometry,
        inner: Geometry,
    ) -> Result<WindowSurfaces> {
        let mut frame = screen.new_surface(outer)?;
        border::draw_border(&mut frame, core.flags, &core.colors, self.title(), self.align);

        let mut content = screen.new_surface(inner)?;
        content.apply_background(core.colors.window);
        content.redraw();
        if !inner.is_empty() {
            content.move_cursor(0, 0)?;
        }
        content.set_scroll(true);

        Ok(WindowSurfaces { frame, content })
    }
}

impl Widget for Window {
    fn destroy(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) {
        if let Some(mut surfaces) = self.surfaces.take() {
            let screen = ctx.screen();
            surfaces.content.erase();
            surfaces.frame.erase();
            if let Err(e) = screen.refresh(&mut surfaces.content) {
                warn!("{}: failed to clear content area: {e}", core.id());
            }
            if let Err(e) = screen.refresh(&mut surfaces.frame) {
                warn!("{}: failed to clear frame: {e}", core.id());
            }
        }
        self.title = None;
        debug!("{}: window destroyed", core.id());
    }

    fn resize(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        self.redraw(core, ctx)
    }

    fn redraw(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        let outer = ctx.geometry(core);
        let inner = outer.inset(1).ok_or(WdgError::WindowTooSmall {
            cols: outer.cols,
            lines: outer.lines,
        })?;
        let screen = ctx.screen();
        screen.check_fits(outer)?;

        match self.surfaces.as_mut() {
            Some(surfaces) => {
                // Wipe the border at the old position first.
                surfaces.frame.erase();
                surfaces.frame.touch();
                screen.refresh(&mut surfaces.frame)?;

                screen.reshape(&mut surfaces.frame, outer)?;
                border::draw_border(
                    &mut surfaces.frame,
                    core.flags,
                    &core.colors,
                    self.title.as_deref(),
                    self.align,
                );

                screen.reshape(&mut surfaces.content, inner)?;
                surfaces.content.apply_background(core.colors.window);
                surfaces.content.touch();
            }
            None => {
                self.surfaces = Some(self.allocate(core, screen, outer, inner)?);
                trace!("{}: surfaces allocated at {outer}", core.id());
            }
        }

        if let Some(surfaces) = self.surfaces.as_mut() {
            surfaces.content.touch();
            screen.refresh(&mut surfaces.frame)?;
            screen.refresh(&mut surfaces.content)?;
        }

        core.flags.visible = true;
        Ok(())
    }

    fn get_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        core.flags.focused = true;
        self.redraw(core, ctx)
    }

    fn lost_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()> {
        core.flags.focused = false;
        self.redraw(core, ctx)
    }

    fn get_msg(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>, key: Key) -> Result<()> {
        if self.echo_keys {
            if let Some(surfaces) = self.surfaces.as_mut() {
                let content = &mut surfaces.content;
                if let Err(e) = content.print_fmt(format_args!("key {} ({})\n", key.code(), key)) {
                    warn!("{}: key echo: {e}", core.id());
                }
                if let Err(e) = ctx.screen().refresh(content) {
                    warn!("{}: key echo: refresh failed: {e}", core.id());
                }
            }
        }

        if key.is_char(self.quit_key) {
            debug!("{}: quit key pressed", core.id());
            ctx.request_destroy(core.id());
        }
        Ok(())
    }
}

/// Print formatted text into a window's content area.
///
/// ```ignore
/// window_print!(window, &mut screen, 0, 2, "{} packets", count);
/// ```
#[macro_export]
macro_rules! window_print {
    ($window:expr, $screen:expr, $x:expr, $y:expr, $($arg:tt)*) => {
        $window.print($screen, $x, $y, ::std::format_args!($($arg)*))
    };
}
