use crate::input::events::Key;
use crate::view::MapView;
use log::debug;

use super::DrawTools;

impl<V: MapView> DrawTools<V> {
    /// Escape cancels the session: the tool is deactivated and
    /// `draw-complete` fires with no geometry. Other keys are not consumed.
    pub(super) fn on_key_down(&mut self, key: Key) -> bool {
        if key != Key::Escape {
            return false;
        }

        debug!("Draw session cancelled");
        self.deactivate();
        self.emit_complete(None);
        true
    }
}
