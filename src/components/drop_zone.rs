use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DropZoneProps {
    pub highlighted: bool,
    /// Once a preview is up the zone lets pointer events through to the image.
    pub interactive: bool,
}

#[function_component]
pub fn DropZone(props: &DropZoneProps) -> Html {
    let pointer_events = if props.interactive { "auto" } else { "none" };
    let highlight_display = if props.highlighted { "block" } else { "none" };
    let hint = if props.interactive {
        html! {
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); text-align:center; opacity:0.75; font-size:16px;">
                <div style="font-size:40px; margin-bottom:8px;">{"🖼"}</div>
                <div>{"Drop an image here"}</div>
            </div>
        }
    } else {
        html! {}
    };
    html! {
        <div class="drop-zone" style={format!("position:absolute; inset:0; z-index:10; pointer-events:{};", pointer_events)}>
            { hint }
            <div class="drop-zone-highlight" style={format!("display:{}; position:absolute; inset:12px; border:3px dashed #58a6ff; border-radius:14px; background:rgba(88,166,255,0.08); pointer-events:none;", highlight_display)}></div>
        </div>
    }
}
