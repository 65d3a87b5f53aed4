//! File picker. Uncontrolled: the form keeps metadata, never a value back.

use dioxus::prelude::*;
use lendform_domain::fields::text_input::SelectedFile;
use serde_json::Value;

use super::control_class;
use crate::ports::outbound::PickedFile;

#[component]
pub fn FileInput(
    config: lendform_domain::TextInputProps,
    /// Current form value, used only to list what was picked
    #[props(default)]
    selected: Value,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_files: EventHandler<Vec<PickedFile>>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let names: Vec<String> = serde_json::from_value::<Vec<SelectedFile>>(selected)
        .map(|files| files.into_iter().map(|f| f.name).collect())
        .unwrap_or_default();
    let accept = config.accept.clone().unwrap_or_default();

    rsx! {
        div {
            class: "{control_class(has_error, disabled)} field-control--file",
            input {
                class: "field-input",
                r#type: "file",
                accept: "{accept}",
                multiple: config.multiple,
                disabled: disabled,
                onchange: move |evt: FormEvent| async move {
                    let mut picked = Vec::new();
                    for file in evt.files() {
                        match file.read_bytes().await {
                            Ok(bytes) => picked.push(PickedFile {
                                name: file.name(),
                                content_type: file.content_type(),
                                bytes: bytes.to_vec(),
                            }),
                            Err(e) => {
                                tracing::warn!(file = %file.name(), error = %e, "Failed to read picked file");
                            }
                        }
                    }
                    on_files.call(picked);
                },
                onblur: move |_| on_blur.call(()),
            }
            if !names.is_empty() {
                ul { class: "field-files",
                    for name in names {
                        li { key: "{name}", "{name}" }
                    }
                }
            }
        }
    }
}
