use consts::FILE_INPUT_ACCEPT;
use leptos::{html::Input, prelude::*};
use leptos_icons::*;
use state::upload_state::UploadState;
use utils::web::{FileMeta, VideoFile};

/// File input styled as a drop box. Every change of the input is run through
/// [`UploadState::select_file`].
#[component]
pub fn VideoPicker(
    state: RwSignal<UploadState<VideoFile>, LocalStorage>,
    file_ref: NodeRef<Input>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::change;
        use leptos_use::use_event_listener;
        _ = use_event_listener(file_ref, change, move |ev| {
            use wasm_bindgen::JsCast;
            use web_sys::HtmlInputElement;
            let picked = ev
                .target()
                .and_then(|target| {
                    let input: &HtmlInputElement = target.dyn_ref()?;
                    input.files()?.get(0)
                })
                .map(VideoFile::new);

            let name = picked.as_ref().map(|f| f.file_name().to_string());
            match state.write().select_file(picked) {
                Ok(()) => log::debug!("selected {name:?}"),
                Err(e) => log::debug!("rejected {name:?}: {e}"),
            }
        });
    }

    let selected_name = move || {
        state.with(|s| s.selected_file().map(|f| f.file_name().to_string()))
    };
    let busy = move || state.with(|s| s.phase().is_submitting());

    view! {
        <label
            for="file"
            class="flex flex-col gap-3 justify-center items-center p-6 mb-4 w-full rounded-lg border-2 border-gray-400 border-dashed cursor-pointer hover:bg-gray-50"
        >
            <Icon attr:class="w-10 h-10 text-gray-500" icon=icondata::BiCloudUploadRegular />
            <span class="text-base">"Select MP4 Video:"</span>
            <span class="text-sm text-gray-500">
                {move || selected_name().unwrap_or_else(|| "No file chosen".to_string())}
            </span>
        </label>
        <input
            id="file"
            node_ref=file_ref
            type="file"
            accept=FILE_INPUT_ACCEPT
            disabled=busy
            class="sr-only"
        />
    }
}
