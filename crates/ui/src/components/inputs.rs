//! # Cell Input Components
//!
//! Typed editors for table cells, one per column type:
//! - **CellTextInput**: free text with an optional length cap
//! - **CellNumericInput**: digit-only input (non-digits are dropped as typed)
//! - **CellSelect**: dropdown over a closed option set
//! - **TimestampInput**: masked `yyyy-MM-dd HH:mm` entry plus a two-step
//!   date/time picker dialog
//!
//! Every editor emits the full new cell value through `on_change`; no editor
//! owns the canonical value.

use dioxus::prelude::*;

use kadmin_core::time::{TIMESTAMP_FORMAT_LABEL, format_timestamp, parse_timestamp};
use kadmin_model::{filter_digits, mask_timestamp_digits, parse_masked_timestamp};

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for CellTextInput
#[derive(Props, Clone, PartialEq)]
pub struct CellTextInputProps {
    /// Current cell value
    pub value: String,

    /// Maximum length, enforced by the input itself
    #[props(default, !optional)]
    pub max_len: Option<usize>,

    /// Change handler, called with the full new value
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Free-text cell editor
#[component]
pub fn CellTextInput(props: CellTextInputProps) -> Element {
    rsx! {
        input {
            r#type: "text",
            value: "{props.value}",
            maxlength: props.max_len.map(|l| l.to_string()),
            oninput: move |e| props.on_change.call(e.value()),
        }
    }
}

// ============================================================================
// Numeric Input Component
// ============================================================================

/// Properties for CellNumericInput
#[derive(Props, Clone, PartialEq)]
pub struct CellNumericInputProps {
    /// Current cell value (digits only)
    pub value: String,

    /// Change handler, called with the filtered value
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Digit-only cell editor. Anything that is not an ASCII digit is removed
/// from the typed text before it reaches the cell, so pasting "12a3" yields
/// "123".
#[component]
pub fn CellNumericInput(props: CellNumericInputProps) -> Element {
    rsx! {
        input {
            r#type: "text",
            inputmode: "numeric",
            value: "{props.value}",
            oninput: move |e| {
                let raw = e.value();
                let (filtered, _) = filter_digits(&raw, raw.chars().count());
                props.on_change.call(filtered);
            },
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Properties for CellSelect
#[derive(Props, Clone, PartialEq)]
pub struct CellSelectProps {
    /// Currently selected value
    pub value: String,

    /// The closed option set for this column
    pub options: Vec<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown cell editor for closed option sets (enum columns, foreign keys)
#[component]
pub fn CellSelect(props: CellSelectProps) -> Element {
    rsx! {
        select {
            onchange: move |e| props.on_change.call(e.value()),

            for option in &props.options {
                option {
                    key: "{option}",
                    value: "{option}",
                    selected: props.value == *option,
                    "{option}"
                }
            }
        }
    }
}

// ============================================================================
// Timestamp Input Component
// ============================================================================

/// Properties for TimestampInput
#[derive(Props, Clone, PartialEq)]
pub struct TimestampInputProps {
    /// Current cell value, in canonical `yyyy-MM-dd HH:mm:ss` form
    pub value: String,

    /// Change handler, called with a canonical timestamp string
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Picker stages for the timestamp dialog
#[derive(Clone, Copy, PartialEq)]
enum PickerStage {
    Closed,
    Date,
    Time,
}

/// Masked timestamp editor with a two-step picker dialog.
///
/// Direct typing goes through the digit mask: only digits count, separators
/// are inserted after the year, month, day and hour groups, and entry stops
/// at minute precision. A complete masked value is committed with seconds
/// set to `:00`; an incomplete or unparseable one marks the field invalid
/// and leaves the cell untouched.
#[component]
pub fn TimestampInput(props: TimestampInputProps) -> Element {
    let mut draft = use_signal(|| mask_timestamp_digits(&props.value));
    let mut invalid = use_signal(|| false);
    let mut stage = use_signal(|| PickerStage::Closed);
    // Date half picked in the first dialog step, as `yyyy-MM-dd`
    let mut picked_date = use_signal(String::new);
    let mut dialog_field = use_signal(String::new);
    let mut dialog_invalid = use_signal(|| false);

    let value_for_open = props.value.clone();
    let open_picker = move |_| {
        // Seed the date step from the current cell value's date half.
        let seed = value_for_open.chars().take(10).collect::<String>();
        dialog_field.set(seed);
        dialog_invalid.set(false);
        stage.set(PickerStage::Date);
    };

    let value_for_time = props.value.clone();
    let advance_to_time = move |_| {
        let text = dialog_field.read().clone();
        match chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => {
                picked_date.set(date.format("%Y-%m-%d").to_string());
                // Seed the time step from the current cell value's time half.
                let seed = value_for_time.chars().skip(11).take(5).collect::<String>();
                dialog_field.set(if seed.len() == 5 { seed } else { "00:00".to_string() });
                dialog_invalid.set(false);
                stage.set(PickerStage::Time);
            }
            Err(_) => dialog_invalid.set(true),
        }
    };

    let confirm_time = move |_| {
        let text = dialog_field.read().clone();
        match chrono::NaiveTime::parse_from_str(&text, "%H:%M") {
            Ok(time) => {
                let date = picked_date.read().clone();
                let combined = format!("{} {}:00", date, time.format("%H:%M"));
                if let Ok(ts) = parse_timestamp(&combined) {
                    draft.set(mask_timestamp_digits(&combined));
                    invalid.set(false);
                    props.on_change.call(format_timestamp(ts));
                }
                stage.set(PickerStage::Closed);
            }
            Err(_) => dialog_invalid.set(true),
        }
    };

    rsx! {
        input {
            r#type: "text",
            class: if invalid() { "invalid" } else { "" },
            value: "{draft}",
            placeholder: "{TIMESTAMP_FORMAT_LABEL}",
            oninput: move |e| {
                let masked = mask_timestamp_digits(&e.value());
                match parse_masked_timestamp(&masked) {
                    Ok(ts) => {
                        invalid.set(false);
                        props.on_change.call(format_timestamp(ts));
                    }
                    Err(_) => invalid.set(true),
                }
                draft.set(masked);
            },
        }
        button {
            class: "action-button neutral",
            onclick: open_picker,
            "📅"
        }

        if stage() == PickerStage::Date {
            div { class: "dialog-backdrop",
                div { class: "dialog-card",
                    h3 { "Pick a date" }
                    div { class: "field",
                        input {
                            r#type: "text",
                            class: if dialog_invalid() { "invalid" } else { "" },
                            value: "{dialog_field}",
                            placeholder: "yyyy-MM-dd",
                            oninput: move |e| dialog_field.set(e.value()),
                        }
                    }
                    button {
                        class: "action-button save",
                        onclick: advance_to_time,
                        "Next"
                    }
                    button {
                        class: "action-button cancel",
                        onclick: move |_| stage.set(PickerStage::Closed),
                        "Cancel"
                    }
                }
            }
        }

        if stage() == PickerStage::Time {
            div { class: "dialog-backdrop",
                div { class: "dialog-card",
                    h3 { "Pick a time" }
                    div { class: "field",
                        input {
                            r#type: "text",
                            class: if dialog_invalid() { "invalid" } else { "" },
                            value: "{dialog_field}",
                            placeholder: "HH:mm",
                            oninput: move |e| dialog_field.set(e.value()),
                        }
                    }
                    button {
                        class: "action-button save",
                        onclick: confirm_time,
                        "Confirm"
                    }
                    button {
                        class: "action-button cancel",
                        onclick: move |_| stage.set(PickerStage::Closed),
                        "Cancel"
                    }
                }
            }
        }
    }
}
