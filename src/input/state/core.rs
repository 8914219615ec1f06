//! Draw session state machine and tool lifecycle.

use super::tooltip::{Tooltip, TooltipStyle};
use crate::config::Config;
use crate::draw::FillSymbol;
use crate::geometry::{Extent, Geometry, ScreenPoint, ScreenRect};
use crate::input::emitter::{DrawEvent, DrawEventKind, Emitter, ListenerId};
use crate::input::error::DrawError;
use crate::input::events::{Listener, ViewEvent};
use crate::input::tool::GeometryKind;
use crate::view::{GraphicId, MapView};
use log::debug;

/// Current draw session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not activated - all view events are ignored
    Idle,
    /// Activated and waiting for a gesture
    Armed(GeometryKind),
    /// Extent drag in progress
    Dragging {
        /// Where the pointer was pressed
        origin: ScreenPoint,
        /// Rectangle from the latest update, if it had any area
        rect: Option<ScreenRect>,
    },
}

/// Construction options for [`DrawTools`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawToolsOptions {
    /// Show a hint label that follows the pointer while active
    pub show_tooltips: bool,
    /// Horizontal distance in pixels between the pointer and the tooltip
    pub tooltip_offset: i32,
    /// Symbol of the rectangle previewed while dragging an extent
    pub extent_symbol: FillSymbol,
    pub tooltip_style: TooltipStyle,
}

impl Default for DrawToolsOptions {
    fn default() -> Self {
        Self {
            show_tooltips: false,
            tooltip_offset: 15,
            extent_symbol: FillSymbol::extent_preview(),
            tooltip_style: TooltipStyle::default(),
        }
    }
}

impl From<&Config> for DrawToolsOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            show_tooltips: cfg.tools.show_tooltips,
            tooltip_offset: cfg.tools.tooltip_offset,
            extent_symbol: cfg.extent_symbol.to_symbol(),
            tooltip_style: TooltipStyle::from(&cfg.tooltip),
        }
    }
}

/// Builds [`DrawTools`]; a view must be supplied.
#[derive(Debug)]
pub struct DrawToolsBuilder<V> {
    view: Option<V>,
    options: DrawToolsOptions,
}

impl<V: MapView> Default for DrawToolsBuilder<V> {
    fn default() -> Self {
        Self {
            view: None,
            options: DrawToolsOptions::default(),
        }
    }
}

impl<V: MapView> DrawToolsBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    pub fn options(mut self, options: DrawToolsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn show_tooltips(mut self, show: bool) -> Self {
        self.options.show_tooltips = show;
        self
    }

    pub fn tooltip_offset(mut self, offset: i32) -> Self {
        self.options.tooltip_offset = offset;
        self
    }

    /// # Errors
    /// Returns [`DrawError::MissingView`] if no view was supplied.
    pub fn build(self) -> Result<DrawTools<V>, DrawError> {
        let view = self.view.ok_or(DrawError::MissingView)?;
        Ok(DrawTools {
            view,
            options: self.options,
            state: DrawingState::Idle,
            map_handlers: Vec::new(),
            tooltip_handlers: Vec::new(),
            draw_graphic: None,
            tooltip: None,
            emitter: Emitter::new(),
        })
    }
}

/// Point and extent draw tools attached to a map view.
///
/// The host forwards every view event to [`DrawTools::handle_event`]; the
/// tool only reacts to the event streams it registered for on activation and
/// publishes `draw-complete` when a gesture finishes or is cancelled.
#[derive(Debug)]
pub struct DrawTools<V: MapView> {
    pub(super) view: V,
    pub(super) options: DrawToolsOptions,
    pub(super) state: DrawingState,
    /// Pointer and key listeners, in registration order
    pub(super) map_handlers: Vec<Listener>,
    /// Tooltip pointer listeners, in registration order
    pub(super) tooltip_handlers: Vec<Listener>,
    /// Preview graphic owned by the current drag
    pub(super) draw_graphic: Option<GraphicId>,
    pub(super) tooltip: Option<Tooltip>,
    emitter: Emitter,
}

impl<V: MapView> DrawTools<V> {
    pub fn builder() -> DrawToolsBuilder<V> {
        DrawToolsBuilder::new()
    }

    /// Activates the tool for the named geometry kind (`"point"` or `"extent"`).
    ///
    /// Any previous session is deactivated first. On an unsupported kind the
    /// tool is left idle with no listeners registered.
    pub fn activate(&mut self, kind: &str) -> Result<(), DrawError> {
        self.deactivate();
        let kind = kind.parse::<GeometryKind>()?;
        self.arm(kind);
        Ok(())
    }

    /// Activates the tool for a typed geometry kind.
    pub fn activate_kind(&mut self, kind: GeometryKind) {
        self.deactivate();
        self.arm(kind);
    }

    fn arm(&mut self, kind: GeometryKind) {
        self.map_handlers.push(kind.pointer_listener());
        self.map_handlers.push(Listener::KeyDown);
        self.state = DrawingState::Armed(kind);
        debug!("Draw tools activated for {kind}");

        self.toggle_tooltip(true);
    }

    /// Unregisters all listeners, drops any preview graphic and tooltip, and
    /// returns to idle. Safe to call when already idle.
    pub fn deactivate(&mut self) {
        while let Some(listener) = self.map_handlers.pop() {
            debug!("Removed {listener:?} listener");
        }

        self.toggle_tooltip(false);

        if let Some(id) = self.draw_graphic.take() {
            self.view.graphics_mut().remove(id);
        }

        if self.state != DrawingState::Idle {
            debug!("Draw tools deactivated");
        }
        self.state = DrawingState::Idle;
    }

    /// Routes a view event to the matching registered listener.
    ///
    /// Returns true if the tool consumed the event, in which case the host
    /// should stop propagating it.
    pub fn handle_event(&mut self, event: &ViewEvent) -> bool {
        let listener = event.listener();
        if self.map_handlers.contains(&listener) {
            match *event {
                ViewEvent::Click { x, y } => {
                    self.on_click(ScreenPoint::new(x, y));
                    true
                }
                ViewEvent::Drag(drag) => {
                    self.on_drag(&drag);
                    true
                }
                ViewEvent::KeyDown(key) => self.on_key_down(key),
                _ => false,
            }
        } else if self.tooltip_handlers.contains(&listener) {
            match *event {
                ViewEvent::PointerMove { x, y } | ViewEvent::PointerOver { x, y } => {
                    self.update_tooltip(x, y)
                }
                ViewEvent::PointerOut => self.hide_tooltip(),
                _ => {}
            }
            false
        } else {
            false
        }
    }

    /// Subscribes to a draw tool event.
    pub fn on<F>(&mut self, kind: DrawEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&DrawEvent) + 'static,
    {
        self.emitter.on(kind, callback)
    }

    /// Shorthand for subscribing to `draw-complete`.
    pub fn on_draw_complete<F>(&mut self, mut callback: F) -> ListenerId
    where
        F: FnMut(Option<&Geometry>) + 'static,
    {
        self.emitter.on(DrawEventKind::DrawComplete, move |event| {
            let DrawEvent::DrawComplete { geometry } = event;
            callback(geometry.as_ref());
        })
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    pub(super) fn emit_complete(&mut self, geometry: Option<Geometry>) {
        debug!(
            "draw-complete: {}",
            match &geometry {
                Some(Geometry::Point(_)) => "point",
                Some(Geometry::Extent(_)) => "extent",
                None => "cancelled",
            }
        );
        self.emitter.emit(&DrawEvent::DrawComplete { geometry });
    }

    /// Projects a screen rectangle's corners into a map extent.
    pub(super) fn project(&self, rect: &ScreenRect) -> Extent {
        let lower_left = self.view.to_map(rect.lower_left);
        let upper_right = self.view.to_map(rect.upper_right);
        Extent {
            spatial_reference: self.view.spatial_reference(),
            ..Extent::from_corners(lower_left, upper_right)
        }
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// Geometry kind of the active session, if any.
    pub fn geometry_kind(&self) -> Option<GeometryKind> {
        match self.state {
            DrawingState::Idle => None,
            DrawingState::Armed(kind) => Some(kind),
            DrawingState::Dragging { .. } => Some(GeometryKind::Extent),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state != DrawingState::Idle
    }

    /// Listeners currently registered, in registration order.
    pub fn listeners(&self) -> impl Iterator<Item = &Listener> {
        self.map_handlers.iter().chain(self.tooltip_handlers.iter())
    }

    pub fn preview_graphic(&self) -> Option<GraphicId> {
        self.draw_graphic
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn options(&self) -> &DrawToolsOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the tool and returns its view. Any session is ended first.
    pub fn into_view(mut self) -> V {
        self.deactivate();
        self.view
    }
}
