use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::ViewerConfig;
use crate::dom::Preview;
use crate::error::ViewerError;
use crate::session::PreviewSession;

/// Keep one `PreviewSession` alive per installed preview.
///
/// `generation` changes whenever a new preview is installed. Yew runs the
/// previous teardown before the next effect, so the old session (its image,
/// listeners and frames) is gone before the new image is attached.
#[hook]
pub fn use_preview_session(
    content_ref: NodeRef,
    preview: Option<Rc<Preview>>,
    generation: u32,
    config: Rc<ViewerConfig>,
) {
    use_effect_with(generation, move |_| {
        let session = preview.and_then(|preview| {
            let mounted = content_ref
                .cast::<HtmlElement>()
                .ok_or(ViewerError::MissingElement("content"))
                .and_then(|container| PreviewSession::mount(container, preview, &config));
            match mounted {
                Ok(session) => Some(session),
                Err(e) => {
                    log::error!("{}", e);
                    None
                }
            }
        });
        move || drop(session)
    });
}
