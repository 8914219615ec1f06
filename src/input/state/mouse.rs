use crate::draw::Graphic;
use crate::geometry::{Geometry, ScreenPoint, ScreenRect};
use crate::input::events::{DragAction, DragEvent};
use crate::input::tool::GeometryKind;
use crate::view::MapView;
use log::debug;

use super::{DrawTools, DrawingState};

impl<V: MapView> DrawTools<V> {
    /// Handles a click while the point tool is active.
    ///
    /// Emits `draw-complete` with the clicked map point. No preview graphic
    /// is involved.
    pub(super) fn on_click(&mut self, at: ScreenPoint) {
        self.hide_tooltip();

        if self.geometry_kind() == Some(GeometryKind::Point) {
            let point = self.view.to_map(at);
            self.emit_complete(Some(Geometry::Point(point)));
        }
    }

    /// Handles one phase of an extent drag.
    ///
    /// # Behavior
    /// - `Start`: adds an empty preview graphic and records the origin
    /// - `Update`: replaces the preview with the current rectangle, or drops
    ///   it while the drag has no area
    /// - `End`: removes the preview and emits the final extent (`None` if the
    ///   release point shares an axis with the origin)
    ///
    /// Updates and ends that arrive without a start are ignored.
    pub(super) fn on_drag(&mut self, drag: &DragEvent) {
        match drag.action {
            DragAction::Start => {
                self.hide_tooltip();
                self.remove_preview();

                let symbol = self.options.extent_symbol;
                let id = self.view.graphics_mut().add(Graphic::empty(symbol));
                self.draw_graphic = Some(id);
                self.state = DrawingState::Dragging {
                    origin: drag.origin,
                    rect: None,
                };
            }
            DragAction::Update => {
                let DrawingState::Dragging { origin, .. } = self.state else {
                    debug!("Ignoring drag update outside of a drag");
                    return;
                };

                let rect = ScreenRect::from_drag(origin, drag.position());
                self.state = DrawingState::Dragging { origin, rect };

                self.remove_preview();
                if let Some(rect) = rect {
                    let extent = self.project(&rect);
                    let symbol = self.options.extent_symbol;
                    let id = self
                        .view
                        .graphics_mut()
                        .add(Graphic::with_geometry(symbol, Geometry::Extent(extent)));
                    self.draw_graphic = Some(id);
                }
            }
            DragAction::End => {
                let DrawingState::Dragging { origin, .. } = self.state else {
                    debug!("Ignoring drag end without a matching start");
                    return;
                };

                let extent = ScreenRect::from_drag(origin, drag.position())
                    .map(|rect| self.project(&rect));

                self.remove_preview();
                self.state = DrawingState::Armed(GeometryKind::Extent);
                self.emit_complete(extent.map(Geometry::Extent));
            }
        }
    }

    fn remove_preview(&mut self) {
        if let Some(id) = self.draw_graphic.take() {
            self.view.graphics_mut().remove(id);
        }
    }
}
