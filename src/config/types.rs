//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{FillStyle, FillSymbol, LineSymbol};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Draw tool behavior.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Show a hint label next to the pointer while a tool is active
    #[serde(default)]
    pub show_tooltips: bool,

    /// Horizontal distance in pixels between the pointer and the tooltip
    /// (valid range: 0 - 200)
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: i32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            show_tooltips: false,
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

/// Symbol of the rectangle previewed while an extent is dragged.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExtentSymbolConfig {
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Fill opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// `solid` paints the interior, `none` draws only the outline
    #[serde(default = "default_fill_style")]
    pub style: FillStyle,

    #[serde(default = "default_outline_color")]
    pub outline_color: ColorSpec,

    /// Outline width in pixels (valid range: 0.0 - 20.0)
    #[serde(default = "default_outline_width")]
    pub outline_width: f64,
}

impl Default for ExtentSymbolConfig {
    fn default() -> Self {
        Self {
            fill_color: default_fill_color(),
            fill_opacity: default_fill_opacity(),
            style: default_fill_style(),
            outline_color: default_outline_color(),
            outline_width: default_outline_width(),
        }
    }
}

impl ExtentSymbolConfig {
    pub fn to_symbol(&self) -> FillSymbol {
        FillSymbol {
            color: self.fill_color.to_color().with_alpha(self.fill_opacity),
            style: self.style,
            outline: LineSymbol {
                color: self.outline_color.to_color(),
                width: self.outline_width,
            },
        }
    }
}

/// Tooltip label appearance.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TooltipConfig {
    #[serde(default = "default_tooltip_text_color")]
    pub text_color: ColorSpec,

    #[serde(default = "default_tooltip_background")]
    pub background_color: ColorSpec,

    /// Font size relative to the root font (valid range: 0.5 - 4.0)
    #[serde(default = "default_font_size_rem")]
    pub font_size_rem: f64,

    /// Horizontal padding in pixels (valid range: 0 - 50)
    #[serde(default = "default_padding_px")]
    pub padding_px: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            text_color: default_tooltip_text_color(),
            background_color: default_tooltip_background(),
            font_size_rem: default_font_size_rem(),
            padding_px: default_padding_px(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tooltip_offset() -> i32 {
    15
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Rgb([30, 144, 255])
}

fn default_fill_opacity() -> f64 {
    0.4
}

fn default_fill_style() -> FillStyle {
    FillStyle::Solid
}

fn default_outline_color() -> ColorSpec {
    ColorSpec::Rgb([65, 105, 225])
}

fn default_outline_width() -> f64 {
    1.0
}

fn default_tooltip_text_color() -> ColorSpec {
    ColorSpec::Name("#49b0f2".to_string())
}

fn default_tooltip_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_font_size_rem() -> f64 {
    0.8
}

fn default_padding_px() -> u32 {
    5
}
