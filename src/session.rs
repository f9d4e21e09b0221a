//! One preview's worth of interaction state.
//!
//! A `PreviewSession` owns the image element it created, the zoom/drag/tween
//! state and every listener and animation frame it registers. Listener
//! closures only hold a `Weak` back-reference, so dropping the last `Rc`
//! tears everything down: listeners are removed, pending frames cancelled,
//! the image detached and the object URL released with the `Preview`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement, MouseEvent, PointerEvent, WheelEvent};

use crate::config::ViewerConfig;
use crate::dom::{self, Preview};
use crate::error::{Result, ViewerError};
use crate::model::{Point, Transform, ZoomChange, ZoomState, centering_offset};
use crate::state::{DragBounds, DragController, Tween};

pub const PREVIEW_CLASS: &str = "preview-image";

pub struct PreviewSession {
    container: HtmlElement,
    image: HtmlImageElement,
    preview: Rc<Preview>,
    zoom_duration_ms: f64,
    zoom: RefCell<ZoomState>,
    drag: RefCell<DragController>,
    transform: Cell<Transform>,
    tween: RefCell<Option<Tween>>,
    centered: Cell<bool>,
    last_throw_ts: Cell<Option<f64>>,
    layout_frame: RefCell<Option<AnimationFrame>>,
    tween_frame: RefCell<Option<AnimationFrame>>,
    throw_frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PreviewSession {
    /// Detach any existing image from `container`, insert a new one for
    /// `preview` and register it for dragging. Centering and the zoom
    /// listeners follow once layout reports a measurable size.
    pub fn mount(container: HtmlElement, preview: Rc<Preview>, config: &ViewerConfig) -> Result<Rc<Self>> {
        let removed = dom::detach_images(&container)?;
        if removed > 0 {
            log::debug!("removed {} stale preview(s)", removed);
        }

        let image: HtmlImageElement = gloo::utils::document()
            .create_element("img")
            .map_err(ViewerError::dom)?
            .dyn_into()
            .map_err(|_| ViewerError::Dom("created element is not an <img>".into()))?;
        image.set_class_name(PREVIEW_CLASS);
        image.set_alt(&preview.name);
        image.set_draggable(false);
        for (property, value) in [
            ("height", config.preview_height.as_str()),
            ("max-width", "none"),
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("transform-origin", "50% 50%"),
            ("visibility", "hidden"),
            ("user-select", "none"),
            ("touch-action", "none"),
            ("cursor", "grab"),
        ] {
            dom::set_style(&image, property, value)?;
        }
        image.set_src(preview.url.as_str());
        container.append_child(&image).map_err(ViewerError::dom)?;

        let session = Rc::new(Self {
            container,
            image,
            preview,
            zoom_duration_ms: config.zoom_duration_ms,
            zoom: RefCell::new(ZoomState::new(config.zoom_limits())),
            drag: RefCell::new(DragController::new(config.throw_resistance)),
            transform: Cell::new(Transform::default()),
            tween: RefCell::new(None),
            centered: Cell::new(false),
            last_throw_ts: Cell::new(None),
            layout_frame: RefCell::new(None),
            tween_frame: RefCell::new(None),
            throw_frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        session.install_drag_listeners();
        session.ensure_layout();
        log::info!("previewing {}", session.preview.name);
        Ok(session)
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    pub fn transform(&self) -> Transform {
        self.transform.get()
    }

    pub fn current_scale(&self) -> f64 {
        self.zoom.borrow().current_scale()
    }

    pub fn is_centered(&self) -> bool {
        self.centered.get()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.borrow().is_some()
    }

    /// True while the layout-ready poll still has a frame queued.
    #[cfg(test)]
    pub fn is_waiting_for_layout(&self) -> bool {
        self.layout_frame.borrow().is_some()
    }

    fn set_cursor(&self, cursor: &str) {
        if let Err(e) = dom::set_style(&self.image, "cursor", cursor) {
            log::error!("{}", e);
        }
    }

    fn render(&self) {
        if let Err(e) = dom::apply_transform(&self.image, &self.transform.get()) {
            log::error!("{}", e);
        }
    }

    /// Recompute drag bounds from the current layout and scale, then pull the
    /// image back inside them.
    pub fn refresh_bounds(&self) {
        let t = self.transform.get();
        let bounds = DragBounds::compute(
            dom::layout_size(&self.container),
            dom::layout_origin(&self.image),
            dom::layout_size(&self.image),
            t.scale,
        );
        let position = self.drag.borrow_mut().update_bounds(bounds);
        self.transform.set(t.with_position(position));
        self.render();
    }

    fn set_transform(&self, t: Transform) {
        self.transform.set(t);
        self.drag.borrow_mut().set_position(t.position());
    }

    // Layout-ready signal: poll once per frame until both the image and its
    // container have a size, then center.
    fn ensure_layout(self: &Rc<Self>) {
        if self.centered.get() {
            return;
        }
        let container = dom::layout_size(&self.container);
        let element = dom::layout_size(&self.image);
        if container.is_measurable() && element.is_measurable() {
            self.layout_frame.borrow_mut().take();
            self.center();
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(session) = weak.upgrade() {
                session.layout_frame.borrow_mut().take();
                session.ensure_layout();
            }
        });
        *self.layout_frame.borrow_mut() = Some(handle);
    }

    fn center(self: &Rc<Self>) {
        let container = dom::layout_size(&self.container);
        let element = dom::layout_size(&self.image);
        let origin = dom::layout_origin(&self.image);
        let target = centering_offset(container, element);
        let position = Point::new(target.x - origin.x, target.y - origin.y);
        self.set_transform(Transform::at(position, self.current_scale()));
        self.render();
        if let Err(e) = dom::set_style(&self.image, "visibility", "visible") {
            log::error!("{}", e);
        }
        self.centered.set(true);
        log::debug!(
            "centered {} ({}x{}) at ({}, {})",
            self.preview.name,
            element.width,
            element.height,
            position.x,
            position.y
        );
        self.install_zoom_listeners();
    }

    // Cursor and image center, both relative to the container.
    fn pointer_frame(&self, ev: &MouseEvent) -> (Point, Point) {
        let container = dom::client_rect(&self.container);
        let cursor = dom::pointer_in(&self.container, ev);
        let center = dom::client_rect(&self.image).relative_to(&container).center();
        (cursor, center)
    }

    /// Stop a running double-click transition where it is, adopting its
    /// current scale.
    fn interrupt_tween(&self) {
        if self.tween.borrow_mut().take().is_some() {
            self.tween_frame.borrow_mut().take();
            self.zoom.borrow_mut().sync_to(self.transform.get().scale);
        }
    }

    pub fn wheel_zoom(&self, ev: &WheelEvent) {
        self.interrupt_tween();
        let (cursor, center) = self.pointer_frame(ev);
        let planned = self.zoom.borrow().plan_wheel(ev.delta_y(), cursor, center);
        let Some(change) = planned else {
            return;
        };
        self.zoom.borrow_mut().commit(&change);
        self.set_transform(change.apply(self.transform.get()));
        self.refresh_bounds();
    }

    pub fn toggle_zoom(self: &Rc<Self>, ev: &MouseEvent) {
        self.interrupt_tween();
        let (cursor, center) = self.pointer_frame(ev);
        let planned = self.zoom.borrow().plan_double_click(cursor, center);
        let Some(change) = planned else {
            return;
        };
        self.start_tween(change);
    }

    fn start_tween(self: &Rc<Self>, change: ZoomChange) {
        let from = self.transform.get();
        let to = change.apply(from);
        log::debug!(
            "zoom {} -> {} (x{:.2})",
            change.from_scale,
            change.to_scale,
            change.ratio()
        );
        self.zoom.borrow_mut().commit(&change);
        self.drag.borrow_mut().cancel_throw();
        self.throw_frame.borrow_mut().take();
        *self.tween.borrow_mut() = Some(Tween::new(from, to, self.zoom_duration_ms));
        self.schedule_tween_frame();
    }

    fn schedule_tween_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |ts| {
            if let Some(session) = weak.upgrade() {
                session.on_tween_frame(ts);
            }
        });
        *self.tween_frame.borrow_mut() = Some(handle);
    }

    fn on_tween_frame(self: &Rc<Self>, ts: f64) {
        self.tween_frame.borrow_mut().take();
        let sampled = self.tween.borrow_mut().as_mut().map(|tw| tw.sample(ts));
        let Some((t, done)) = sampled else {
            return;
        };
        self.set_transform(t);
        self.refresh_bounds();
        if done {
            self.tween.borrow_mut().take();
        } else {
            self.schedule_tween_frame();
        }
    }

    fn on_pointer_down(&self, ev: &PointerEvent) {
        if ev.button() != 0 {
            return;
        }
        self.interrupt_tween();
        self.throw_frame.borrow_mut().take();
        // bounds are recomputed on every press, layout may have moved since
        self.refresh_bounds();
        if let Err(e) = self.image.set_pointer_capture(ev.pointer_id()) {
            log::debug!("pointer capture refused: {}", ViewerError::dom(e));
        }
        let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        self.drag.borrow_mut().press(pointer, ev.time_stamp());
        self.set_cursor("grabbing");
    }

    fn on_pointer_move(&self, ev: &PointerEvent) {
        let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let moved = self.drag.borrow_mut().drag(pointer, ev.time_stamp());
        if let Some(position) = moved {
            self.transform.set(self.transform.get().with_position(position));
            self.render();
        }
    }

    fn on_pointer_up(self: &Rc<Self>, ev: &PointerEvent) {
        if let Err(e) = self.image.release_pointer_capture(ev.pointer_id()) {
            log::debug!("pointer release refused: {}", ViewerError::dom(e));
        }
        self.set_cursor("grab");
        if self.drag.borrow_mut().release(ev.time_stamp()) {
            self.last_throw_ts.set(None);
            self.schedule_throw_frame();
        }
    }

    fn schedule_throw_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |ts| {
            if let Some(session) = weak.upgrade() {
                session.on_throw_frame(ts);
            }
        });
        *self.throw_frame.borrow_mut() = Some(handle);
    }

    fn on_throw_frame(self: &Rc<Self>, ts: f64) {
        self.throw_frame.borrow_mut().take();
        let dt = self
            .last_throw_ts
            .replace(Some(ts))
            .map(|last| (ts - last) / 1000.0)
            .unwrap_or(0.0);
        let stepped = self.drag.borrow_mut().step_throw(dt);
        let Some(position) = stepped else {
            return;
        };
        self.transform.set(self.transform.get().with_position(position));
        self.render();
        if self.drag.borrow().is_throwing() {
            self.schedule_throw_frame();
        }
    }

    fn install_drag_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.image,
            "pointerdown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let (Some(session), Some(ev)) = (weak.upgrade(), event.dyn_ref::<PointerEvent>()) else {
                    return;
                };
                ev.prevent_default();
                session.on_pointer_down(ev);
            },
        ));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.image, "pointermove", move |event: &Event| {
            let (Some(session), Some(ev)) = (weak.upgrade(), event.dyn_ref::<PointerEvent>()) else {
                return;
            };
            session.on_pointer_move(ev);
        }));

        for kind in ["pointerup", "pointercancel"] {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new(&self.image, kind, move |event: &Event| {
                let (Some(session), Some(ev)) = (weak.upgrade(), event.dyn_ref::<PointerEvent>()) else {
                    return;
                };
                session.on_pointer_up(ev);
            }));
        }

        // Native image dragging would start a file drag onto our own drop zone.
        listeners.push(EventListener::new_with_options(
            &self.image,
            "dragstart",
            EventListenerOptions::enable_prevent_default(),
            |event: &Event| event.prevent_default(),
        ));

        // An undecodable file never gets a layout size; stop polling for one.
        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.image, "error", move |_| {
            if let Some(session) = weak.upgrade() {
                session.layout_frame.borrow_mut().take();
                log::error!(
                    "{}",
                    ViewerError::ImageLoad {
                        file: session.preview.name.clone()
                    }
                );
            }
        }));

        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_zoom_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.container,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let (Some(session), Some(ev)) = (weak.upgrade(), event.dyn_ref::<WheelEvent>()) else {
                    return;
                };
                ev.prevent_default();
                session.wheel_zoom(ev);
            },
        ));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.container, "dblclick", move |event: &Event| {
            let (Some(session), Some(ev)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                return;
            };
            session.toggle_zoom(ev);
        }));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&gloo::utils::window(), "resize", move |_| {
            if let Some(session) = weak.upgrade() {
                session.refresh_bounds();
            }
        }));

        self.listeners.borrow_mut().extend(listeners);
    }
}

impl Drop for PreviewSession {
    fn drop(&mut self) {
        self.listeners.get_mut().clear();
        self.layout_frame.get_mut().take();
        self.tween_frame.get_mut().take();
        self.throw_frame.get_mut().take();
        self.image.remove();
        log::debug!("closed preview of {}", self.preview.name);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{MouseEventInit, PointerEventInit, WheelEvent, WheelEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    // 2000x1000 SVG so the test does not depend on any fixture file.
    const WIDE_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='2000' height='1000'><rect width='2000' height='1000' fill='teal'/></svg>";

    fn container(width: u32, height: u32) -> HtmlElement {
        let el: HtmlElement = gloo::utils::document()
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        let style = format!("position:relative; overflow:hidden; width:{width}px; height:{height}px;");
        el.set_attribute("style", &style).unwrap();
        gloo::utils::body().append_child(&el).unwrap();
        el
    }

    fn preview(name: &str) -> Rc<Preview> {
        file_preview(name, "image/svg+xml", WIDE_SVG)
    }

    fn file_preview(name: &str, mime: &str, body: &str) -> Rc<Preview> {
        let parts = js_sys::Array::of1(&body.into());
        let opts = web_sys::FilePropertyBag::new();
        opts.set_type(mime);
        let file = web_sys::File::new_with_str_sequence_and_options(&parts, name, &opts).unwrap();
        Rc::new(Preview {
            name: name.to_string(),
            url: dom::ObjectUrl::create(&file).unwrap(),
        })
    }

    fn wheel(session: &PreviewSession, at: Point, delta_y: f64) {
        let init = WheelEventInit::new();
        init.set_delta_y(delta_y);
        init.set_client_x(at.x as i32);
        init.set_client_y(at.y as i32);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let ev = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
        session.image().dispatch_event(&ev).unwrap();
    }

    fn double_click(session: &PreviewSession, at: Point) {
        let init = MouseEventInit::new();
        init.set_client_x(at.x as i32);
        init.set_client_y(at.y as i32);
        init.set_bubbles(true);
        let ev = MouseEvent::new_with_mouse_event_init_dict("dblclick", &init).unwrap();
        session.image().dispatch_event(&ev).unwrap();
    }

    fn pointer(session: &PreviewSession, kind: &str, at: Point) {
        let init = PointerEventInit::new();
        init.set_pointer_id(1);
        init.set_button(0);
        init.set_client_x(at.x as i32);
        init.set_client_y(at.y as i32);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let ev = PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
        session.image().dispatch_event(&ev).unwrap();
    }

    fn cursor(session: &PreviewSession) -> String {
        session.image().style().get_property_value("cursor").unwrap()
    }

    // Bounds recomputed from the live layout, the way a refresh would.
    fn live_bounds(host: &HtmlElement, session: &PreviewSession) -> DragBounds {
        DragBounds::compute(
            dom::layout_size(host),
            dom::layout_origin(session.image()),
            dom::layout_size(session.image()),
            session.transform().scale,
        )
    }

    async fn wait_centered(session: &Rc<PreviewSession>) {
        for _ in 0..100 {
            if session.is_centered() {
                return;
            }
            TimeoutFuture::new(16).await;
        }
        panic!("preview never became measurable");
    }

    #[wasm_bindgen_test]
    async fn centers_height_constrained_image() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "600px".into(),
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;

        let rendered = dom::layout_size(session.image());
        assert_eq!(rendered.height, 600.0);
        let t = session.transform();
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.x, (800.0 - rendered.width) / 2.0);
        assert_eq!(t.y, (600.0 - rendered.height) / 2.0);
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn wheel_on_center_zooms_without_moving() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "300px".into(),
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;
        let before = session.transform();

        wheel(&session, dom::client_rect(session.image()).center(), -100.0);

        assert_eq!(session.current_scale(), 1.1);
        let after = session.transform();
        assert!((after.x - before.x).abs() < 1.0);
        assert!((after.y - before.y).abs() < 1.0);
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn double_click_animates_to_toggle_scale_and_back() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "200px".into(),
            zoom_duration_ms: 100.0,
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;

        let dblclick = || double_click(&session, dom::client_rect(session.image()).center());

        dblclick();
        assert_eq!(session.current_scale(), 3.0);
        assert!(session.is_animating());
        TimeoutFuture::new(400).await;
        assert!(!session.is_animating());
        assert_eq!(session.transform().scale, 3.0);

        dblclick();
        assert_eq!(session.current_scale(), 1.0);
        TimeoutFuture::new(400).await;
        assert_eq!(session.transform().scale, 1.0);
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn bounds_hold_on_every_tween_frame() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "300px".into(),
            zoom_duration_ms: 300.0,
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;

        // off-center so the corrected position pushes against the bounds
        let rect = dom::client_rect(session.image());
        double_click(&session, Point::new(rect.left + 10.0, rect.top + 10.0));
        let mut samples = 0;
        let mut mid_animation = false;
        while session.is_animating() {
            let t = session.transform();
            assert!(live_bounds(&host, &session).contains(t.position()), "{t:?} out of bounds");
            mid_animation |= t.scale > 1.0 && t.scale < 3.0;
            samples += 1;
            assert!(samples < 200);
            TimeoutFuture::new(16).await;
        }
        assert!(mid_animation);
        assert_eq!(session.transform().scale, 3.0);
        assert!(live_bounds(&host, &session).contains(session.transform().position()));
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn resize_refreshes_bounds_without_zooming() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "300px".into(),
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;
        wheel(&session, dom::client_rect(session.image()).center(), -100.0);
        assert_eq!(session.current_scale(), 1.1);
        let before = session.transform();

        // 660x330 visual box centered in 800x600 no longer fits 400x300
        host.style().set_property("width", "400px").unwrap();
        host.style().set_property("height", "300px").unwrap();
        assert!(!live_bounds(&host, &session).contains(before.position()));
        gloo::utils::window()
            .dispatch_event(&Event::new("resize").unwrap())
            .unwrap();

        let after = session.transform();
        assert_eq!(session.current_scale(), 1.1);
        assert_eq!(after.scale, 1.1);
        assert_ne!(after.position(), before.position());
        assert!(live_bounds(&host, &session).contains(after.position()));
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn pointer_drag_moves_image_and_swaps_cursor() {
        let host = container(800, 600);
        let cfg = ViewerConfig {
            preview_height: "300px".into(),
            ..Default::default()
        };
        let session = PreviewSession::mount(host.clone(), preview("wide.svg"), &cfg).unwrap();
        wait_centered(&session).await;
        let start = session.transform();
        let grip = dom::client_rect(session.image()).center();

        pointer(&session, "pointerdown", grip);
        assert_eq!(cursor(&session), "grabbing");
        pointer(&session, "pointermove", Point::new(grip.x + 30.0, grip.y + 20.0));
        let moved = session.transform();
        assert_eq!(moved.x, start.x + 30.0);
        assert_eq!(moved.y, start.y + 20.0);
        pointer(&session, "pointerup", Point::new(grip.x + 30.0, grip.y + 20.0));
        assert_eq!(cursor(&session), "grab");
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn broken_image_stops_layout_poll() {
        let host = container(400, 300);
        let broken = file_preview("bad.png", "image/png", "not a png");
        let session = PreviewSession::mount(host.clone(), broken, &ViewerConfig::default()).unwrap();
        for _ in 0..100 {
            if session.image().complete() {
                break;
            }
            TimeoutFuture::new(16).await;
        }
        assert!(session.image().complete());
        assert_eq!(session.image().natural_width(), 0);
        TimeoutFuture::new(16).await;
        // broken-image placeholders may still get a box; otherwise polling stops
        if !session.is_centered() {
            assert!(!session.is_waiting_for_layout());
            TimeoutFuture::new(50).await;
            assert!(!session.is_waiting_for_layout());
        }
        drop(session);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn remount_leaves_single_image() {
        let host = container(400, 300);
        let cfg = ViewerConfig::default();
        let first = PreviewSession::mount(host.clone(), preview("a.svg"), &cfg).unwrap();
        let second = PreviewSession::mount(host.clone(), preview("b.svg"), &cfg).unwrap();
        assert_eq!(host.query_selector_all("img").unwrap().length(), 1);
        drop(first);
        assert_eq!(host.query_selector_all("img").unwrap().length(), 1);
        drop(second);
        assert_eq!(host.query_selector_all("img").unwrap().length(), 0);
        host.remove();
    }
}
