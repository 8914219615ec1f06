//! Hint label that follows the pointer while a draw tool is active.

use crate::config::TooltipConfig;
use crate::draw::{Color, WHITE};
use crate::input::events::Listener;
use crate::view::MapView;

use super::DrawTools;

/// Runtime styling for the tooltip label.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub text_color: Color,
    pub background_color: Color,
    /// Font size relative to the root font size
    pub font_size_rem: f64,
    /// Horizontal padding in pixels
    pub padding_px: u32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            text_color: Color::from_rgb8(0x49, 0xb0, 0xf2),
            background_color: WHITE,
            font_size_rem: 0.8,
            padding_px: 5,
        }
    }
}

impl From<&TooltipConfig> for TooltipStyle {
    fn from(cfg: &TooltipConfig) -> Self {
        Self {
            text_color: cfg.text_color.to_color(),
            background_color: cfg.background_color.to_color(),
            font_size_rem: cfg.font_size_rem,
            padding_px: cfg.padding_px,
        }
    }
}

/// The tooltip label owned by an active tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: &'static str,
    pub visible: bool,
    /// Left edge in viewport pixels
    pub left: i32,
    /// Top edge in viewport pixels
    pub top: i32,
    /// Style the label was created with
    pub style: TooltipStyle,
}

impl Tooltip {
    /// Tooltips start hidden until the pointer moves.
    fn new(text: &'static str, style: TooltipStyle) -> Self {
        Self {
            text,
            visible: false,
            left: 0,
            top: 0,
            style,
        }
    }
}

const TOOLTIP_LISTENERS: [Listener; 3] = [
    Listener::PointerMove,
    Listener::PointerOver,
    Listener::PointerOut,
];

impl<V: MapView> DrawTools<V> {
    /// Creates or destroys the tooltip and its pointer listeners.
    ///
    /// Does nothing unless tooltips are enabled in the options.
    pub(super) fn toggle_tooltip(&mut self, show: bool) {
        if !self.options.show_tooltips {
            return;
        }

        if show {
            if self.tooltip.is_some() {
                return;
            }
            let Some(kind) = self.geometry_kind() else {
                return;
            };
            self.tooltip = Some(Tooltip::new(kind.hint(), self.options.tooltip_style.clone()));
            self.tooltip_handlers.extend(TOOLTIP_LISTENERS);
        } else if self.tooltip.take().is_some() {
            while let Some(listener) = self.tooltip_handlers.pop() {
                log::trace!("Removed tooltip {listener:?} listener");
            }
        }
    }

    pub(super) fn update_tooltip(&mut self, x: i32, y: i32) {
        let offset = self.options.tooltip_offset;
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.left = x.saturating_add(offset);
            tooltip.top = y;
            tooltip.visible = true;
        }
    }

    pub(super) fn hide_tooltip(&mut self) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.visible = false;
        }
    }
}
