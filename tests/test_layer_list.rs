use std::cell::RefCell;

use egui::{Event, Pos2, Rect, vec2};
use mapdeck_core::layers::{
    LayerId, LayerItem, LayerListEvent, LayerManager, LayerStatus, ListKind,
};
use mapdeck_core::ui::{DragSession, LayerDragPayload, LayerDroppable, ListContent, WidgetStrings};

fn manager_with(names: &[&str]) -> (LayerManager, Vec<LayerId>) {
    let mut manager = LayerManager::new();
    let ids = names
        .iter()
        .map(|name| manager.attach(ListKind::Background, name, "https://tiles.example").unwrap())
        .collect();
    (manager, ids)
}

/// Runs a layer list frame by frame against one headless egui context
struct ListDriver {
    ctx: egui::Context,
}

impl ListDriver {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
        }
    }

    fn frame<'a>(
        &self,
        input: Vec<Event>,
        list: &impl Fn() -> LayerDroppable<'a>,
    ) -> (Vec<LayerListEvent>, egui::FullOutput) {
        let raw_input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(480.0, 320.0))),
            events: input,
            ..Default::default()
        };
        let mut events = Vec::new();
        let output = self.ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = list().show(ui);
            });
        });
        (events, output)
    }

    /// Lay the list out once and return where each painted text landed
    fn layout<'a>(&self, list: &impl Fn() -> LayerDroppable<'a>) -> egui::FullOutput {
        self.frame(Vec::new(), list).1
    }

    /// Feed one batch of input events per frame and collect every intent
    fn play<'a>(&self, steps: Vec<Vec<Event>>, list: &impl Fn() -> LayerDroppable<'a>) -> Vec<LayerListEvent> {
        let mut events = Vec::new();
        for step in steps {
            events.extend(self.frame(step, list).0);
        }
        events
    }
}

fn text_rects(output: &egui::FullOutput, text: &str) -> Vec<Rect> {
    output
        .shapes
        .iter()
        .filter_map(|clipped| match &clipped.shape {
            egui::Shape::Text(shape) if shape.galley.text() == text => {
                Some(shape.galley.rect.translate(shape.pos.to_vec2()))
            }
            _ => None,
        })
        .collect()
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn click(at: Pos2) -> Vec<Vec<Event>> {
    vec![
        vec![Event::PointerMoved(at)],
        vec![button(at, true)],
        vec![button(at, false)],
        vec![],
    ]
}

fn drag(from: Pos2, to: Pos2) -> Vec<Vec<Event>> {
    vec![
        vec![Event::PointerMoved(from)],
        vec![button(from, true)],
        vec![Event::PointerMoved(from + vec2(0.0, -4.0))],
        vec![Event::PointerMoved(from + vec2(0.0, -12.0))],
        vec![Event::PointerMoved(from.lerp(to, 0.5))],
        vec![Event::PointerMoved(to)],
        vec![Event::PointerMoved(to)],
        vec![button(to, false)],
        vec![],
    ]
}

#[test]
fn test_rendered_rows_match_input_order() {
    let (manager, ids) = manager_with(&["Streets", "Aerial", "Terrain", "Hillshade"]);
    let strings = WidgetStrings::default();
    let list = LayerDroppable::new(ListKind::Background, manager.list(ListKind::Background), &strings);

    let ListContent::Rows(rows) = list.view(false).content else {
        panic!("non-empty list rendered as empty");
    };
    let row_ids: Vec<LayerId> = rows.iter().map(|row| row.id).collect();
    assert_eq!(row_ids, ids);

    // Painted top to bottom in the same order
    let driver = ListDriver::new();
    let items = manager.list(ListKind::Background);
    let output = driver.layout(&|| LayerDroppable::new(ListKind::Background, items, &strings));
    let tops: Vec<f32> = ["Streets", "Aerial", "Terrain", "Hillshade"]
        .iter()
        .map(|name| text_rects(&output, name)[0].top())
        .collect();
    assert!(tops.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_drag_over_empty_region_swaps_hint() {
    let strings = WidgetStrings::default();
    let list = LayerDroppable::new(ListKind::Background, &[], &strings);

    let ListContent::Empty { label, show_attach } = list.view(false).content else {
        panic!("empty list rendered rows");
    };
    assert_eq!(label, strings.no_background_layers);
    assert!(show_attach);

    let ListContent::Empty { label, show_attach } = list.view(true).content else {
        panic!("empty list rendered rows");
    };
    assert_eq!(label, strings.drop_layer_label);
    assert!(!show_attach);
}

#[test]
fn test_clicking_toggle_emits_one_event_for_that_row() {
    let (mut manager, ids) = manager_with(&["Streets", "Aerial", "Terrain"]);
    let before: Vec<LayerItem> = manager.list(ListKind::Background).to_vec();
    let strings = WidgetStrings::default();

    let events = {
        let items = manager.list(ListKind::Background);
        let list = || LayerDroppable::new(ListKind::Background, items, &strings);
        let driver = ListDriver::new();
        let toggles = text_rects(&driver.layout(&list), "👁");
        assert_eq!(toggles.len(), 3);
        driver.play(click(toggles[1].center()), &list)
    };
    assert_eq!(events, vec![LayerListEvent::VisibilityToggled(ids[1])]);

    // The list only saw a shared slice; the owner applies the intent
    assert_eq!(manager.list(ListKind::Background), &before[..]);
    manager.apply(&events[0]).unwrap();
    for (old, new) in before.iter().zip(manager.list(ListKind::Background)) {
        if old.id == ids[1] {
            assert_eq!(new.visible, !old.visible);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_disabled_list_never_reorders() {
    let (manager, _) = manager_with(&["A", "B", "C"]);
    let items = manager.list(ListKind::Background);
    let strings = WidgetStrings::default();
    let list = LayerDroppable::new(ListKind::Background, items, &strings).disabled(true);
    let session = list.session();

    assert!(!session.can_pick_up());
    for (from, item) in items.iter().enumerate() {
        for insertion in 0..=items.len() + 1 {
            let payload = LayerDragPayload {
                item: item.id,
                source: ListKind::Background,
                index: from,
            };
            assert_eq!(session.release(&payload, insertion, items), None);
        }
    }

    // Still renders every row
    let ListContent::Rows(rows) = list.view(false).content else {
        panic!("disabled list did not render rows");
    };
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_clicking_auth_warning_requests_edit_of_that_item() {
    let mut manager = LayerManager::new();
    manager.attach(ListKind::Overlay, "Public", "wms").unwrap();
    let locked = manager
        .attach_item(
            ListKind::Overlay,
            LayerItem::new(LayerId(0), "Private", "wms").with_status(LayerStatus::RequiresAuth),
        )
        .unwrap();

    let strings = WidgetStrings::default();
    let items = manager.list(ListKind::Overlay);
    let list = || LayerDroppable::new(ListKind::Overlay, items, &strings);

    let ListContent::Rows(rows) = list().view(false).content else {
        panic!("expected rows");
    };
    let warned: Vec<LayerId> = rows.iter().filter(|row| row.show_auth_warning).map(|row| row.id).collect();
    assert_eq!(warned, vec![locked]);

    let driver = ListDriver::new();
    let warnings = text_rects(&driver.layout(&list), "⚠");
    assert_eq!(warnings.len(), 1);
    let events = driver.play(click(warnings[0].center()), &list);
    assert_eq!(events, vec![LayerListEvent::EditRequested(locked)]);
}

#[test]
fn test_dragging_last_row_to_front_emits_new_order() {
    let (mut manager, ids) = manager_with(&["Streets", "Aerial", "Terrain"]);
    let strings = WidgetStrings::default();

    let events = {
        let items = manager.list(ListKind::Background);
        let list = || LayerDroppable::new(ListKind::Background, items, &strings);
        let driver = ListDriver::new();
        let output = driver.layout(&list);
        let first = text_rects(&output, "Streets")[0];
        let last = text_rects(&output, "Terrain")[0];
        driver.play(drag(last.center(), Pos2::new(first.center().x, first.top())), &list)
    };
    assert_eq!(
        events,
        vec![LayerListEvent::Reordered {
            kind: ListKind::Background,
            order: vec![ids[2], ids[0], ids[1]],
        }]
    );

    manager.apply(&events[0]).unwrap();
    let names: Vec<&str> = manager
        .list(ListKind::Background)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Terrain", "Streets", "Aerial"]);
}

#[test]
fn test_dragging_on_disabled_list_emits_nothing() {
    let (manager, _) = manager_with(&["Streets", "Aerial", "Terrain"]);
    let strings = WidgetStrings::default();
    let items = manager.list(ListKind::Background);
    let list = || LayerDroppable::new(ListKind::Background, items, &strings).disabled(true);

    let driver = ListDriver::new();
    let output = driver.layout(&list);
    let first = text_rects(&output, "Streets")[0];
    let last = text_rects(&output, "Terrain")[0];

    let to_front = driver.play(drag(last.center(), Pos2::new(first.center().x, first.top())), &list);
    assert!(to_front.is_empty());
    let to_back = driver.play(drag(first.center(), Pos2::new(last.center().x, last.bottom())), &list);
    assert!(to_back.is_empty());
}

#[test]
fn test_dragged_clone_painted_on_container_layer() {
    let (manager, ids) = manager_with(&["Streets", "Aerial", "Terrain"]);
    let strings = WidgetStrings::default();
    let items = manager.list(ListKind::Background);
    let recorded: RefCell<Vec<egui::Id>> = RefCell::new(Vec::new());
    let (strings, containers) = (&strings, &recorded);
    let list = move || {
        LayerDroppable::new(ListKind::Background, items, strings).clone_container(move |id| {
            containers.borrow_mut().push(id);
            egui::LayerId::new(egui::Order::Foreground, id)
        })
    };

    let driver = ListDriver::new();
    let output = driver.layout(&list);
    assert!(containers.borrow().is_empty());

    let first = text_rects(&output, "Streets")[0];
    let last = text_rects(&output, "Terrain")[0];
    let target = Pos2::new(first.center().x, first.top());
    let mut steps = drag(last.center(), target);
    let release = steps.split_off(steps.len() - 2);

    let mut events = driver.play(steps, &list);
    {
        let seen = containers.borrow();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|id| *id == seen[0]));
    }

    // While held, the clone follows the pointer instead of staying in its row
    let (_, held) = driver.frame(vec![Event::PointerMoved(target)], &list);
    let clone = text_rects(&held, "Terrain");
    assert_eq!(clone.len(), 1);
    assert!((clone[0].center().y - target.y).abs() < 10.0);

    events.extend(driver.play(release, &list));
    assert_eq!(
        events,
        vec![LayerListEvent::Reordered {
            kind: ListKind::Background,
            order: vec![ids[2], ids[0], ids[1]],
        }]
    );
}

#[test]
fn test_cross_list_drop_moves_layer() {
    let (mut manager, ids) = manager_with(&["A", "B"]);
    manager.attach(ListKind::Overlay, "X", "src").unwrap();

    let session = DragSession::new(ListKind::Overlay, false);
    let payload = LayerDragPayload {
        item: ids[0],
        source: ListKind::Background,
        index: 0,
    };
    let event = session
        .release(&payload, 1, manager.list(ListKind::Overlay))
        .unwrap();
    manager.apply(&event).unwrap();

    assert_eq!(manager.kind_of(ids[0]), Some(ListKind::Overlay));
    assert_eq!(manager.list(ListKind::Overlay)[1].id, ids[0]);
}

#[test]
fn test_headless_render_emits_nothing_without_input() {
    let (manager, _) = manager_with(&["A", "B"]);
    let strings = WidgetStrings::default();
    let items = manager.list(ListKind::Background);
    let driver = ListDriver::new();

    let (events, _) = driver.frame(Vec::new(), &|| LayerDroppable::new(ListKind::Background, items, &strings));
    assert!(events.is_empty());
    let (events, _) = driver.frame(Vec::new(), &|| {
        LayerDroppable::new(ListKind::Background, items, &strings).disabled(true)
    });
    assert!(events.is_empty());
    let (events, _) = driver.frame(Vec::new(), &|| LayerDroppable::new(ListKind::Overlay, &[], &strings));
    assert!(events.is_empty());
}
