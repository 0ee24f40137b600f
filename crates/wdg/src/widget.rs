//! The kind-agnostic widget object and its lifecycle interface.

use wdg_common::{Geometry, Key, PairId, Result, WidgetId};
use wdg_curses::Screen;

use crate::placement::Placement;

/// Object state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub visible: bool,
    pub focused: bool,
}

/// Color pairs a widget draws with. The pairs must be registered on the
/// screen; see [`Dispatcher::new`](crate::Dispatcher::new).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetColors {
    pub border: PairId,
    pub focus: PairId,
    pub title: PairId,
    pub window: PairId,
}

impl WidgetColors {
    /// The pairs the dispatcher registers its color scheme under.
    pub const STANDARD: WidgetColors = WidgetColors {
        border: PairId(1),
        focus: PairId(2),
        title: PairId(3),
        window: PairId(4),
    };
}

/// Identity, bounds, flags and colors of a widget object. Owned by the
/// dispatcher; callbacks receive it alongside their typed state.
#[derive(Debug, Clone)]
pub struct WidgetCore {
    pub(crate) id: WidgetId,
    pub placement: Placement,
    pub flags: Flags,
    pub colors: WidgetColors,
}

impl WidgetCore {
    pub fn new(id: WidgetId, placement: Placement, colors: WidgetColors) -> Self {
        Self {
            id,
            placement,
            flags: Flags::default(),
            colors,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }
}

/// Deferred requests a callback makes to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Destroy(WidgetId),
}

/// What a callback gets to work with besides its own state.
pub struct Context<'a> {
    screen: &'a mut Screen,
    requests: &'a mut Vec<Request>,
}

impl<'a> Context<'a> {
    pub fn new(screen: &'a mut Screen, requests: &'a mut Vec<Request>) -> Self {
        Self { screen, requests }
    }

    pub fn screen(&mut self) -> &mut Screen {
        self.screen
    }

    /// Current bounds of `core`, resolved against the screen size.
    pub fn geometry(&self, core: &WidgetCore) -> Geometry {
        let (cols, lines) = self.screen.size();
        core.placement.resolve(cols, lines)
    }

    /// Ask the dispatcher to destroy `id` once the current callback returns.
    pub fn request_destroy(&mut self, id: WidgetId) {
        self.requests.push(Request::Destroy(id));
    }
}

/// Lifecycle callbacks of a widget kind.
///
/// Errors returned from these are fatal for the object.
pub trait Widget {
    /// Release everything the widget holds. Must not fail and must be safe
    /// to call more than once.
    fn destroy(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>);

    /// The object's bounds or the screen size changed.
    fn resize(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()>;

    fn redraw(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()>;

    fn get_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()>;

    fn lost_focus(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>) -> Result<()>;

    /// A key was sent to the object while it had the focus.
    fn get_msg(&mut self, core: &mut WidgetCore, ctx: &mut Context<'_>, key: Key) -> Result<()>;
}
