//! Thin helpers over `web_sys` used by the viewer: object URLs, measurement,
//! transform styling and file extraction from drop events.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, File, HtmlElement, MouseEvent};

use crate::error::{Result, ViewerError};
use crate::model::{Point, Rect, Size, Transform};

/// A page-local URL for a dropped file. Revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn create(file: &File) -> Result<Self> {
        let url = web_sys::Url::create_object_url_with_blob(file).map_err(|e| ViewerError::ObjectUrl {
            file: file.name(),
            reason: ViewerError::dom(e).to_string(),
        })?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        log::debug!("revoking {}", self.url);
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            log::error!("{}", ViewerError::dom(e));
        }
    }
}

/// Dropped image, owned by the viewer for as long as it is displayed.
#[derive(Debug)]
pub struct Preview {
    pub name: String,
    pub url: ObjectUrl,
}

/// Files carried by a drop event, in transfer order.
pub fn dropped_files(ev: &DragEvent) -> Vec<File> {
    let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    js_sys::Array::from(files.as_ref())
        .iter()
        .filter_map(|f| f.dyn_into::<File>().ok())
        .collect()
}

pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Untransformed layout size.
pub fn layout_size(el: &HtmlElement) -> Size {
    Size::new(el.offset_width() as f64, el.offset_height() as f64)
}

/// Layout position inside the offset parent, ignoring transforms.
pub fn layout_origin(el: &HtmlElement) -> Point {
    Point::new(el.offset_left() as f64, el.offset_top() as f64)
}

/// Pointer position relative to `container`'s top-left corner.
pub fn pointer_in(container: &Element, ev: &MouseEvent) -> Point {
    let rect = client_rect(container);
    Point::new(ev.client_x() as f64 - rect.left, ev.client_y() as f64 - rect.top)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    el.style().set_property(property, value).map_err(ViewerError::dom)
}

pub fn apply_transform(el: &HtmlElement, t: &Transform) -> Result<()> {
    set_style(el, "transform", &t.to_css())
}

/// Remove every image currently inside `container`.
pub fn detach_images(container: &Element) -> Result<usize> {
    let found = container.query_selector_all("img").map_err(ViewerError::dom)?;
    let mut removed = 0;
    for i in 0..found.length() {
        if let Some(el) = found.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            el.remove();
            removed += 1;
        }
    }
    Ok(removed)
}
