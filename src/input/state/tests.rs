use super::*;
use crate::draw::FillSymbol;
use crate::geometry::{Extent, Geometry, MapPoint, ScreenPoint, SpatialReference};
use crate::input::{DragAction, DragEvent, DrawError, GeometryKind, Key, Listener, ViewEvent};
use crate::view::{LinearView, MapView, ViewSpec};
use std::cell::RefCell;
use std::rc::Rc;

type Completions = Rc<RefCell<Vec<Option<Geometry>>>>;

/// Identity-like view: map x = pixel x, map y = -pixel y.
fn create_test_view() -> LinearView {
    LinearView::new(ViewSpec {
        width: 200,
        height: 200,
        xmin: 0.0,
        ymax: 0.0,
        resolution: 1.0,
        wkid: 3857,
    })
    .unwrap()
}

fn create_test_tools(show_tooltips: bool) -> (DrawTools<LinearView>, Completions) {
    let mut tools = DrawTools::builder()
        .view(create_test_view())
        .show_tooltips(show_tooltips)
        .build()
        .unwrap();

    let completions: Completions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completions);
    tools.on_draw_complete(move |geometry| sink.borrow_mut().push(geometry.copied()));

    (tools, completions)
}

fn drag(action: DragAction, x: i32, y: i32) -> ViewEvent {
    ViewEvent::Drag(DragEvent::new(action, ScreenPoint::new(10, 10), x, y))
}

fn expected_extent(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Geometry {
    Geometry::Extent(Extent {
        xmin,
        ymin,
        xmax,
        ymax,
        spatial_reference: SpatialReference::WEB_MERCATOR,
    })
}

#[test]
fn test_build_without_view_fails() {
    let result = DrawToolsBuilder::<LinearView>::new().build();
    assert_eq!(result.unwrap_err(), DrawError::MissingView);
}

#[test]
fn test_default_options() {
    let (tools, _) = create_test_tools(false);
    assert!(!tools.options().show_tooltips);
    assert_eq!(tools.options().tooltip_offset, 15);
    assert_eq!(tools.options().extent_symbol, FillSymbol::extent_preview());
    assert_eq!(tools.state(), DrawingState::Idle);
}

#[test]
fn test_point_click_emits_map_point() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("point").unwrap();

    assert!(tools.handle_event(&ViewEvent::Click { x: 30, y: 20 }));

    let expected = Geometry::Point(MapPoint {
        x: 30.0,
        y: -20.0,
        spatial_reference: SpatialReference::WEB_MERCATOR,
    });
    assert_eq!(*completions.borrow(), vec![Some(expected)]);
    assert!(tools.view().graphics().is_empty());
    assert!(tools.preview_graphic().is_none());
    // Tool stays active after completing
    assert_eq!(tools.geometry_kind(), Some(GeometryKind::Point));
}

#[test]
fn test_point_tool_ignores_drags() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("point").unwrap();

    assert!(!tools.handle_event(&drag(DragAction::Start, 10, 10)));
    assert!(!tools.handle_event(&drag(DragAction::End, 50, 40)));
    assert!(completions.borrow().is_empty());
    assert!(tools.view().graphics().is_empty());
}

#[test]
fn test_extent_drag_emits_normalized_extent() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    let preview = tools.preview_graphic().expect("preview graphic on start");
    assert_eq!(tools.view().graphics().get(preview).unwrap().geometry, None);

    tools.handle_event(&drag(DragAction::Update, 50, 40));
    let preview = tools.preview_graphic().expect("preview graphic on update");
    let graphic = tools.view().graphics().get(preview).unwrap();
    // lowerLeft=(10,40), upperRight=(50,10) in screen space
    assert_eq!(graphic.geometry, Some(expected_extent(10.0, -40.0, 50.0, -10.0)));
    assert_eq!(tools.view().graphics().len(), 1);

    tools.handle_event(&drag(DragAction::End, 50, 40));
    assert!(tools.view().graphics().is_empty());
    assert!(tools.preview_graphic().is_none());
    assert_eq!(
        *completions.borrow(),
        vec![Some(expected_extent(10.0, -40.0, 50.0, -10.0))]
    );
    assert_eq!(tools.state(), DrawingState::Armed(GeometryKind::Extent));
}

#[test]
fn test_preview_removed_before_draw_complete() {
    let (mut tools, _) = create_test_tools(false);
    tools.activate("extent").unwrap();

    let emitted = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&emitted);
    tools.on_draw_complete(move |_| *counter.borrow_mut() += 1);

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    tools.handle_event(&drag(DragAction::Update, 60, 60));
    assert_eq!(tools.view().graphics().len(), 1);
    tools.handle_event(&drag(DragAction::End, 60, 60));

    assert_eq!(*emitted.borrow(), 1);
    assert!(tools.view().graphics().is_empty());
}

#[test]
fn test_degenerate_update_drops_preview() {
    let (mut tools, _) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    tools.handle_event(&drag(DragAction::Update, 40, 40));
    assert!(tools.preview_graphic().is_some());

    tools.handle_event(&drag(DragAction::Update, 10, 40));
    assert!(tools.preview_graphic().is_none());
    assert!(tools.view().graphics().is_empty());

    tools.handle_event(&drag(DragAction::Update, 30, 30));
    assert!(tools.preview_graphic().is_some());
    assert_eq!(tools.view().graphics().len(), 1);
}

#[test]
fn test_degenerate_end_emits_none() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    tools.handle_event(&drag(DragAction::End, 10, 80));

    assert_eq!(*completions.borrow(), vec![None]);
    assert!(tools.view().graphics().is_empty());
}

#[test]
fn test_end_without_start_emits_nothing() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Update, 50, 40));
    tools.handle_event(&drag(DragAction::End, 50, 40));

    assert!(completions.borrow().is_empty());
    assert!(tools.view().graphics().is_empty());
}

#[test]
fn test_escape_during_drag_cancels() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    tools.handle_event(&drag(DragAction::Update, 50, 40));
    assert!(tools.handle_event(&ViewEvent::KeyDown(Key::Escape)));

    assert_eq!(*completions.borrow(), vec![None]);
    assert_eq!(tools.state(), DrawingState::Idle);
    assert!(tools.view().graphics().is_empty());
    assert_eq!(tools.listeners().count(), 0);

    // Nothing is processed once cancelled
    assert!(!tools.handle_event(&drag(DragAction::Update, 70, 70)));
    assert!(!tools.handle_event(&drag(DragAction::End, 70, 70)));
    assert_eq!(completions.borrow().len(), 1);
    assert!(tools.view().graphics().is_empty());
}

#[test]
fn test_other_keys_are_not_consumed() {
    let (mut tools, completions) = create_test_tools(false);
    tools.activate("point").unwrap();

    assert!(!tools.handle_event(&ViewEvent::KeyDown(Key::Char('q'))));
    assert!(!tools.handle_event(&ViewEvent::KeyDown(Key::Return)));
    assert!(completions.borrow().is_empty());
    assert!(tools.is_active());
}

#[test]
fn test_escape_when_idle_is_ignored() {
    let (mut tools, completions) = create_test_tools(false);
    assert!(!tools.handle_event(&ViewEvent::KeyDown(Key::Escape)));
    assert!(completions.borrow().is_empty());
}

#[test]
fn test_invalid_kind_leaves_tool_clean() {
    let (mut tools, completions) = create_test_tools(true);
    tools.activate("extent").unwrap();

    let err = tools.activate("polygon").unwrap_err();
    assert_eq!(err, DrawError::UnsupportedGeometry("polygon".to_string()));
    assert_eq!(tools.geometry_kind(), None);
    assert_eq!(tools.listeners().count(), 0);
    assert!(tools.tooltip().is_none());

    tools.activate("point").unwrap();
    tools.handle_event(&ViewEvent::Click { x: 1, y: 1 });
    assert_eq!(completions.borrow().len(), 1);
}

#[test]
fn test_listeners_registered_in_order() {
    let (mut tools, _) = create_test_tools(true);
    tools.activate("extent").unwrap();

    let listeners: Vec<Listener> = tools.listeners().copied().collect();
    assert_eq!(
        listeners,
        vec![
            Listener::Drag,
            Listener::KeyDown,
            Listener::PointerMove,
            Listener::PointerOver,
            Listener::PointerOut,
        ]
    );

    tools.activate_kind(GeometryKind::Point);
    let listeners: Vec<Listener> = tools.listeners().copied().collect();
    assert_eq!(listeners[..2], [Listener::Click, Listener::KeyDown]);
}

#[test]
fn test_double_deactivate_is_noop() {
    let (mut tools, completions) = create_test_tools(true);
    tools.activate("extent").unwrap();
    tools.handle_event(&drag(DragAction::Start, 10, 10));

    tools.deactivate();
    assert_eq!(tools.state(), DrawingState::Idle);
    assert!(tools.view().graphics().is_empty());
    assert!(tools.tooltip().is_none());

    tools.deactivate();
    assert_eq!(tools.state(), DrawingState::Idle);
    assert!(completions.borrow().is_empty());
}

#[test]
fn test_deactivate_keeps_foreign_graphics() {
    let (mut tools, _) = create_test_tools(false);
    tools
        .view_mut()
        .graphics_mut()
        .add(crate::draw::Graphic::empty(FillSymbol::filter_bbox()));

    tools.activate("extent").unwrap();
    tools.handle_event(&drag(DragAction::Start, 10, 10));
    tools.handle_event(&drag(DragAction::Update, 20, 20));
    assert_eq!(tools.view().graphics().len(), 2);

    tools.deactivate();
    assert_eq!(tools.view().graphics().len(), 1);
}

#[test]
fn test_tooltip_follows_pointer() {
    let (mut tools, _) = create_test_tools(true);
    tools.activate("extent").unwrap();

    let tooltip = tools.tooltip().expect("tooltip created on activate");
    assert_eq!(tooltip.text, "click and drag to draw extent");
    assert!(!tooltip.visible);

    tools.handle_event(&ViewEvent::PointerMove { x: 100, y: 50 });
    let tooltip = tools.tooltip().unwrap();
    assert!(tooltip.visible);
    assert_eq!((tooltip.left, tooltip.top), (115, 50));

    tools.handle_event(&ViewEvent::PointerOut);
    assert!(!tools.tooltip().unwrap().visible);

    tools.handle_event(&ViewEvent::PointerOver { x: 5, y: 6 });
    assert!(tools.tooltip().unwrap().visible);

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    assert!(!tools.tooltip().unwrap().visible);
}

#[test]
fn test_tooltip_text_depends_on_kind() {
    let (mut tools, _) = create_test_tools(true);
    tools.activate("point").unwrap();
    assert_eq!(tools.tooltip().unwrap().text, "click to draw point");

    tools.handle_event(&ViewEvent::PointerMove { x: 1, y: 1 });
    tools.handle_event(&ViewEvent::Click { x: 1, y: 1 });
    assert!(!tools.tooltip().unwrap().visible);
}

#[test]
fn test_tooltip_disabled_by_default() {
    let (mut tools, _) = create_test_tools(false);
    tools.activate("point").unwrap();
    assert!(tools.tooltip().is_none());
    assert!(!tools.handle_event(&ViewEvent::PointerMove { x: 1, y: 1 }));
}

#[test]
fn test_custom_tooltip_offset() {
    let mut tools = DrawTools::builder()
        .view(create_test_view())
        .show_tooltips(true)
        .tooltip_offset(4)
        .build()
        .unwrap();
    tools.activate("point").unwrap();
    tools.handle_event(&ViewEvent::PointerMove { x: 10, y: 10 });
    assert_eq!(tools.tooltip().unwrap().left, 14);
}

#[test]
fn test_off_stops_notifications() {
    let (mut tools, completions) = create_test_tools(false);
    let extra = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&extra);
    let id = tools.on_draw_complete(move |_| *counter.borrow_mut() += 1);

    tools.activate("point").unwrap();
    tools.handle_event(&ViewEvent::Click { x: 1, y: 1 });
    assert!(tools.off(id));
    tools.handle_event(&ViewEvent::Click { x: 2, y: 2 });

    assert_eq!(*extra.borrow(), 1);
    assert_eq!(completions.borrow().len(), 2);
}

#[test]
fn test_into_view_ends_session() {
    let (mut tools, _) = create_test_tools(false);
    tools.activate("extent").unwrap();
    tools.handle_event(&drag(DragAction::Start, 10, 10));

    let view = tools.into_view();
    assert!(view.graphics().is_empty());
}

#[test]
fn test_huge_tooltip_offset_saturates() {
    let mut tools = DrawTools::builder()
        .view(create_test_view())
        .show_tooltips(true)
        .tooltip_offset(i32::MAX)
        .build()
        .unwrap();
    tools.activate("point").unwrap();

    tools.handle_event(&ViewEvent::PointerMove { x: 1, y: 1 });
    let tooltip = tools.tooltip().unwrap();
    assert_eq!(tooltip.left, i32::MAX);
    assert!(tooltip.visible);
}

#[test]
fn test_tooltip_uses_configured_style() {
    let config = crate::Config::from_toml(
        r#"
        [tools]
        show_tooltips = true

        [tooltip]
        text_color = "red"
        padding_px = 9
        "#,
    )
    .unwrap();
    let mut tools = DrawTools::builder()
        .view(create_test_view())
        .options(DrawToolsOptions::from(&config))
        .build()
        .unwrap();
    tools.activate("extent").unwrap();

    let style = &tools.tooltip().unwrap().style;
    assert_eq!(style.text_color, crate::draw::RED);
    assert_eq!(style.background_color, crate::draw::WHITE);
    assert_eq!(style.padding_px, 9);
}

#[test]
fn test_dragging_tracks_current_rect() {
    let (mut tools, _) = create_test_tools(false);
    tools.activate("extent").unwrap();

    tools.handle_event(&drag(DragAction::Start, 10, 10));
    assert_eq!(
        tools.state(),
        DrawingState::Dragging {
            origin: ScreenPoint::new(10, 10),
            rect: None,
        }
    );

    tools.handle_event(&drag(DragAction::Update, 50, 40));
    let DrawingState::Dragging { rect: Some(rect), .. } = tools.state() else {
        panic!("expected a rectangle, got {:?}", tools.state());
    };
    assert_eq!(rect.lower_left, ScreenPoint::new(10, 40));
    assert_eq!(rect.upper_right, ScreenPoint::new(50, 10));

    // A release with no area leaves no rectangle
    tools.handle_event(&drag(DragAction::Update, 50, 10));
    let DrawingState::Dragging { rect, .. } = tools.state() else {
        panic!("still dragging");
    };
    assert!(rect.is_none());
}
