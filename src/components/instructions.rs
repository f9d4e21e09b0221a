use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InstructionsPanelProps {
    pub visible: bool,
    pub file_name: Option<AttrValue>,
    pub min_scale: f64,
    pub max_scale: f64,
}

#[function_component]
pub fn InstructionsPanel(props: &InstructionsPanelProps) -> Html {
    let display = if props.visible { "block" } else { "none" };
    let title = props
        .file_name
        .clone()
        .unwrap_or_else(|| AttrValue::from("Preview"));
    html! {
        <div class="instructions" style={format!("display:{}; position:absolute; left:12px; bottom:12px; z-index:20; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:13px; line-height:1.4; max-width:320px; pointer-events:none;", display)}>
            <div style="font-weight:600; margin-bottom:4px; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ title }</div>
            <ul style="margin:0 0 0 16px; padding:0;">
                <li>{"Drag to pan; release while moving to throw."}</li>
                <li>{format!("Scroll to zoom ({}x to {}x).", props.min_scale, props.max_scale)}</li>
                <li>{"Double-click to zoom in or back out."}</li>
                <li>{"Drop another image to replace this one."}</li>
            </ul>
        </div>
    }
}
