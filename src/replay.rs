//! Scripted draw sessions.
//!
//! A replay script describes a [`LinearView`] and a list of input steps. The
//! steps are fed to [`DrawTools`] in order and every `draw-complete` is
//! collected into a [`ReplayReport`].
//!
//! # Example TOML
//! ```toml
//! [view]
//! width = 800
//! height = 400
//! xmin = -180.0
//! ymax = 90.0
//! resolution = 0.45
//!
//! [[steps]]
//! type = "activate"
//! kind = "extent"
//!
//! [[steps]]
//! type = "drag"
//! action = "start"
//! origin = [10, 10]
//! at = [10, 10]
//!
//! [[steps]]
//! type = "drag"
//! action = "end"
//! origin = [10, 10]
//! at = [50, 40]
//! ```

use crate::draw::{FillSymbol, Graphic};
use crate::filter::FeatureFilter;
use crate::geometry::{Geometry, ScreenPoint};
use crate::input::{DragAction, DragEvent, DrawTools, DrawToolsOptions, Key, Tooltip, ViewEvent};
use crate::view::{GraphicId, LinearView, MapView, ViewSpec};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub view: ViewSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse replay script")
    }
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Step {
    Activate {
        kind: String,
    },
    Deactivate,
    Click {
        x: i32,
        y: i32,
    },
    Drag {
        action: DragAction,
        origin: [i32; 2],
        at: [i32; 2],
    },
    Key {
        key: String,
    },
    PointerMove {
        x: i32,
        y: i32,
    },
    PointerOver {
        x: i32,
        y: i32,
    },
    PointerOut,
}

impl Step {
    /// The view event this step delivers, if it is one.
    fn to_event(&self) -> Option<ViewEvent> {
        let event = match self {
            Step::Activate { .. } | Step::Deactivate => return None,
            Step::Click { x, y } => ViewEvent::Click { x: *x, y: *y },
            Step::Drag { action, origin, at } => ViewEvent::Drag(DragEvent::new(
                *action,
                ScreenPoint::new(origin[0], origin[1]),
                at[0],
                at[1],
            )),
            Step::Key { key } => ViewEvent::KeyDown(key.parse().unwrap_or(Key::Unknown)),
            Step::PointerMove { x, y } => ViewEvent::PointerMove { x: *x, y: *y },
            Step::PointerOver { x, y } => ViewEvent::PointerOver { x: *x, y: *y },
            Step::PointerOut => ViewEvent::PointerOut,
        };
        Some(event)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    pub tools: DrawToolsOptions,
    /// Deactivate the tool after each completion
    pub one_shot: bool,
    /// Apply drawn extents to the feature filter
    pub spatial_filter: bool,
    /// Initial attribute filter
    pub where_clause: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplayReport {
    /// Every `draw-complete` in order; `null` marks a cancelled draw
    pub completions: Vec<Option<Geometry>>,
    /// Activation failures, by step number (1-based)
    pub errors: Vec<String>,
    pub filter: FeatureFilter,
    /// Events the draw tools consumed
    pub consumed_events: usize,
    /// Graphics left on the view overlay
    pub graphics: usize,
    /// Whether the tool was still active at the end of the script
    pub active: bool,
    /// Tooltip at the end of the script, if one exists
    pub tooltip: Option<TooltipReport>,
}

/// Tooltip state and style with colors as CSS strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipReport {
    pub text: String,
    pub visible: bool,
    pub left: i32,
    pub top: i32,
    pub text_color: String,
    pub background_color: String,
    pub font_size_rem: f64,
    pub padding_px: u32,
}

impl From<&Tooltip> for TooltipReport {
    fn from(tooltip: &Tooltip) -> Self {
        Self {
            text: tooltip.text.to_string(),
            visible: tooltip.visible,
            left: tooltip.left,
            top: tooltip.top,
            text_color: tooltip.style.text_color.to_css(),
            background_color: tooltip.style.background_color.to_css(),
            font_size_rem: tooltip.style.font_size_rem,
            padding_px: tooltip.style.padding_px,
        }
    }
}

/// Runs a script and reports what was drawn.
///
/// # Errors
/// Returns an error if the script's view is invalid. Unsupported geometry
/// kinds are recorded in the report instead.
pub fn run(script: &Script, options: &ReplayOptions) -> Result<ReplayReport> {
    let view = LinearView::new(script.view).context("Invalid view in replay script")?;
    let mut tools = DrawTools::builder()
        .view(view)
        .options(options.tools.clone())
        .build()?;

    let pending: Rc<RefCell<Vec<Option<Geometry>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    tools.on_draw_complete(move |geometry| sink.borrow_mut().push(geometry.copied()));

    let mut report = ReplayReport::default();
    report.filter.set_where(options.where_clause.as_deref());
    let mut bbox: Option<GraphicId> = None;

    for (index, step) in script.steps.iter().enumerate() {
        let number = index + 1;
        match step {
            Step::Activate { kind } => {
                if let Err(err) = tools.activate(kind) {
                    warn!("Step {number}: {err}");
                    report.errors.push(format!("step {number}: {err}"));
                }
            }
            Step::Deactivate => tools.deactivate(),
            _ => {
                if let Some(event) = step.to_event() {
                    if tools.handle_event(&event) {
                        report.consumed_events += 1;
                    } else {
                        debug!("Step {number}: {event:?} not consumed");
                    }
                }
            }
        }

        let completed: Vec<Option<Geometry>> = pending.borrow_mut().drain(..).collect();
        for geometry in completed {
            if options.spatial_filter {
                apply_spatial_filter(&mut tools, &mut report.filter, &mut bbox, geometry);
            }
            report.completions.push(geometry);
            if options.one_shot {
                tools.deactivate();
            }
        }
    }

    report.graphics = tools.view().graphics().len();
    report.active = tools.is_active();
    report.tooltip = tools.tooltip().map(TooltipReport::from);
    info!(
        "Replayed {} steps, {} completions",
        script.steps.len(),
        report.completions.len()
    );

    Ok(report)
}

/// Drawn extents become the spatial filter and are outlined on the view;
/// a cancelled draw removes both.
fn apply_spatial_filter(
    tools: &mut DrawTools<LinearView>,
    filter: &mut FeatureFilter,
    bbox: &mut Option<GraphicId>,
    geometry: Option<Geometry>,
) {
    let extent = match geometry {
        Some(Geometry::Extent(extent)) => Some(extent),
        Some(Geometry::Point(_)) => {
            debug!("Points do not change the spatial filter");
            return;
        }
        None => None,
    };

    let graphics = tools.view_mut().graphics_mut();
    if let Some(id) = bbox.take() {
        graphics.remove(id);
    }
    if let Some(extent) = extent {
        *bbox = Some(graphics.add(Graphic::with_geometry(
            FillSymbol::filter_bbox(),
            Geometry::Extent(extent),
        )));
    }
    filter.set_geometry(extent);
}
