use std::rc::Rc;

use web_sys::DragEvent;
use yew::prelude::*;

use super::{drop_zone::DropZone, instructions::InstructionsPanel, preview::use_preview_session};
use crate::config::ViewerConfig;
use crate::dom::{self, ObjectUrl, Preview};
use crate::state::{ViewerAction, ViewerState, image_entries};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<ViewerConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(ViewerState::<Preview>::default);
    let content_ref = use_node_ref();

    use_preview_session(
        content_ref.clone(),
        state.preview.clone(),
        state.generation,
        props.config.clone(),
    );

    let ondragenter = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            log::debug!("dragenter");
            state.dispatch(ViewerAction::DragEnter);
        })
    };
    let ondragleave = {
        let state = state.clone();
        Callback::from(move |_e: DragEvent| {
            log::debug!("dragleave");
            state.dispatch(ViewerAction::DragLeave);
        })
    };
    // Without this the browser navigates to the dropped file.
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let images = image_entries(dom::dropped_files(&e), |f| f.type_());
            if images.is_empty() {
                log::debug!("drop ignored: no image files");
                state.dispatch(ViewerAction::DropIgnored);
                return;
            }
            for file in images {
                match ObjectUrl::create(&file) {
                    Ok(url) => state.dispatch(ViewerAction::Install(Rc::new(Preview {
                        name: file.name(),
                        url,
                    }))),
                    Err(err) => log::error!("{}", err),
                }
            }
        })
    };

    let file_name = state
        .preview
        .as_ref()
        .map(|p| AttrValue::from(p.name.clone()));

    html! {
        <div class="viewer" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9; font-family:sans-serif;"
            {ondragenter} {ondragleave} {ondragover} {ondrop}>
            <div ref={content_ref} class="content" style="position:absolute; inset:0; overflow:hidden;"></div>
            <DropZone highlighted={state.highlighted()} interactive={state.drop_zone_interactive()} />
            <InstructionsPanel visible={state.instructions_visible()} {file_name} min_scale={props.config.min_scale} max_scale={props.config.max_scale} />
        </div>
    }
}
