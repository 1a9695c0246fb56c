//! Layout and note-finder API

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_arg, serialize};
use crate::models::{HarmonicaKey, HoleAction, Pitch};
use crate::transposition::{find_tab_for_note, navigator_layout, note_options};
use crate::wasm_log;

/// One navigator hole as seen from JavaScript
#[derive(Serialize)]
struct HoleInfo {
    hole: u32,
    action: HoleAction,
    note: Pitch,
}

/// Navigator layout for a key, as `[{ hole, action, note }]`
#[wasm_bindgen(js_name = getHarmonicaLayout)]
pub fn get_harmonica_layout(key: &str) -> Result<JsValue, JsValue> {
    let key: HarmonicaKey = parse_arg(key)?;
    let layout = navigator_layout(key);

    let holes: Vec<HoleInfo> = layout
        .holes()
        .map(|(hole, info)| HoleInfo {
            hole,
            action: info.action,
            note: info.note,
        })
        .collect();

    serialize(&holes, "Failed to serialize harmonica layout")
}

/// Where `note` is played on a harmonica in `key`
///
/// Returns `{ hole, action }`, or `undefined` when the note is not on the instrument.
#[wasm_bindgen(js_name = findTabFromNote)]
pub fn find_tab_from_note(key: &str, note: &str) -> Result<JsValue, JsValue> {
    let key: HarmonicaKey = parse_arg(key)?;
    let pitch: Pitch = parse_arg(note)?;

    let position = find_tab_for_note(&navigator_layout(key), pitch);
    if position.is_none() {
        wasm_log!("findTabFromNote: {} not on a {} harmonica", pitch, key);
    }
    serialize(&position, "Failed to serialize tab position")
}

/// Every selectable note, C3 through B7
#[wasm_bindgen(js_name = generateNoteOptions)]
pub fn generate_note_options() -> Result<JsValue, JsValue> {
    serialize(&note_options(), "Failed to serialize note options")
}
