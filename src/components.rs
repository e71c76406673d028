//! Yew view components for the range widget.
//!
//! `RangeInput`, `RangeThumb` and `Keymap` render purely from props; `Range`
//! wires them to the engine through [`use_range`].

use crate::hooks::use_range;
use range_slider::config::{CURRENCY_TEXT, END_CURRENCY_ID, START_CURRENCY_ID};
use range_slider::keyboard::{input_action_for, thumb_action_for};
use range_slider::utils::sanitize_input;
use range_slider::{EngineAction, RangeBounds, SliderAria, Thumb};
use web_sys::{HtmlInputElement, KeyboardEvent, PointerEvent};
use yew::prelude::*;

/// Numeric text input paired with a visually hidden currency label.
#[derive(Properties, PartialEq)]
pub struct RangeInputProps {
    pub value: AttrValue,
    pub min: f64,
    pub max: f64,
    pub disabled: bool,
    pub described_by: &'static str,
    pub oninput: Callback<String>,
    pub oncommit: Callback<()>,
    pub onenter: Callback<String>,
}

#[function_component(RangeInput)]
pub fn range_input(props: &RangeInputProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            // Re-render may not touch the DOM when the sanitized buffer is unchanged
            input.set_value(&sanitize_input(&raw));
            cb.emit(raw);
        })
    };
    let onblur = {
        let cb = props.oncommit.clone();
        Callback::from(move |_: FocusEvent| cb.emit(()))
    };
    let onkeydown = {
        let cb = props.onenter.clone();
        Callback::from(move |e: KeyboardEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(e.key());
            if e.key() == "Enter" {
                e.prevent_default();
                if let Err(e) = input.blur() {
                    log::debug!("Could not blur input after commit: {:?}", e);
                }
            }
        })
    };

    html! {
        <div class="range-input-wrapper">
            <input
                class="range-input"
                type="text"
                inputmode="numeric"
                disabled={props.disabled}
                value={props.value.clone()}
                aria-valuemin={props.min.to_string()}
                aria-valuemax={props.max.to_string()}
                aria-describedby={props.described_by}
                {oninput}
                {onblur}
                {onkeydown}
            />
            <span id={props.described_by} class="visually-hidden">{ CURRENCY_TEXT }</span>
        </div>
    }
}

/// One draggable, focusable handle.
#[derive(Properties, PartialEq)]
pub struct RangeThumbProps {
    pub thumb: Thumb,
    pub position: f64,
    pub aria: SliderAria,
    pub is_active: bool,
    pub is_overlapping: bool,
    pub node_ref: NodeRef,
    pub onkeydown: Callback<KeyboardEvent>,
    pub onpointerdown: Callback<PointerEvent>,
}

#[function_component(RangeThumb)]
pub fn range_thumb(props: &RangeThumbProps) -> Html {
    let container_class = classes!(
        "range-thumb-container",
        props
            .is_overlapping
            .then(|| format!("range-thumb-container--{}-overlapping", props.thumb)),
    );
    let thumb_class = classes!("range-thumb", props.is_active.then_some("range-thumb--grabbing"));

    html! {
        <div class={container_class} style={format!("left: {}%;", props.position)}>
            if props.is_overlapping {
                <span class="range-thumb-overlap-line" />
            }
            <span
                ref={props.node_ref.clone()}
                class={thumb_class}
                role="slider"
                tabindex="0"
                aria-valuenow={props.aria.value_now.clone()}
                aria-valuemin={props.aria.value_min.clone()}
                aria-valuemax={props.aria.value_max.clone()}
                aria-valuetext={props.aria.value_text.clone()}
                onkeydown={props.onkeydown.clone()}
                onpointerdown={props.onpointerdown.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RangeProps {
    pub bounds: RangeBounds,
}

/// Dual-thumb range selector with two text inputs.
#[function_component(Range)]
pub fn range(props: &RangeProps) -> Html {
    let range = use_range(&props.bounds);
    let view = &range.view;

    let render_input = |thumb: Thumb, described_by: &'static str| {
        let oninput = {
            let dispatch = range.dispatch.clone();
            Callback::from(move |text: String| dispatch.emit(EngineAction::SetInput(thumb, text)))
        };
        let oncommit = {
            let dispatch = range.dispatch.clone();
            Callback::from(move |()| dispatch.emit(EngineAction::Commit(thumb)))
        };
        let onenter = {
            let dispatch = range.dispatch.clone();
            Callback::from(move |key: String| {
                if let Some(action) = input_action_for(thumb, &key) {
                    dispatch.emit(action);
                }
            })
        };
        html! {
            <RangeInput
                value={AttrValue::from(view.input(thumb).to_owned())}
                min={range.min}
                max={range.max}
                disabled={range.is_fixed}
                {described_by}
                {oninput}
                {oncommit}
                {onenter}
            />
        }
    };

    let render_thumb = |thumb: Thumb| {
        let onkeydown = {
            let dispatch = range.dispatch.clone();
            Callback::from(move |e: KeyboardEvent| {
                if let Some(action) = thumb_action_for(thumb, &e.key()) {
                    e.prevent_default();
                    dispatch.emit(action);
                }
            })
        };
        let onpointerdown = {
            let cb = range.on_thumb_pointer_down.clone();
            Callback::from(move |e: PointerEvent| cb.emit((thumb, e)))
        };
        html! {
            <RangeThumb
                {thumb}
                position={view.position(thumb)}
                aria={SliderAria::for_thumb(view, thumb, range.min, range.max)}
                is_active={view.is_active(thumb)}
                is_overlapping={view.thumbs_overlapping}
                node_ref={range.thumb_ref(thumb)}
                {onkeydown}
                {onpointerdown}
            />
        }
    };

    let root_class = classes!("range", view.active_thumb.is_some().then_some("range--grabbing"));

    html! {
        <div class={root_class}>
            <div class="range-inputs">
                { render_input(Thumb::Start, START_CURRENCY_ID) }
                { render_input(Thumb::End, END_CURRENCY_ID) }
            </div>
            <span ref={range.track_ref.clone()} class="range-track">
                <span
                    class="range-active-track"
                    style={format!(
                        "left: {}%; width: {}%;",
                        view.start_position,
                        view.active_track_width()
                    )}
                />
                { render_thumb(Thumb::Start) }
                { render_thumb(Thumb::End) }
            </span>
        </div>
    }
}

const KEYMAP: [(&[&str], &str); 5] = [
    (&["Tab", "Shift + Tab"], "Cycle through thumbs."),
    (&["↑", "→"], "Next step."),
    (&["↓", "←"], "Previous step."),
    (&["Home"], "Min value."),
    (&["End"], "Max value."),
];

/// Static legend of the keyboard controls.
#[function_component(Keymap)]
pub fn keymap() -> Html {
    html! {
        <div class="keymap">
            <h2 class="keymap-title">{ "Keymap" }</h2>
            <div class="keymap-grid">
                { KEYMAP.iter().map(|(keys, description)| html! {
                    <>
                        <div class="keymap-keys">
                            { keys.iter().enumerate().map(|(i, key)| html! {
                                <>
                                    <kbd class="keymap-key">{ *key }</kbd>
                                    if i + 1 < keys.len() {
                                        <span>{ " / " }</span>
                                    }
                                </>
                            }).collect::<Html>() }
                        </div>
                        <p>{ *description }</p>
                    </>
                }).collect::<Html>() }
            </div>
        </div>
    }
}
