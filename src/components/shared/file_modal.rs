use yew::prelude::*;

use super::notice::ErrorMessage;

#[derive(Properties, PartialEq, Clone)]
pub struct FileModalProps {
    pub active: bool,
    pub title: AttrValue,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_upload: Callback<web_sys::File>,
    pub on_close: Callback<()>,
}

/// Fichero elegido + URL de previsualización
#[derive(Clone)]
struct Selected {
    file: web_sys::File,
    preview_url: String,
}

fn revoke(selected: &Option<Selected>) {
    if let Some(selected) = selected {
        let _ = web_sys::Url::revoke_object_url(&selected.preview_url);
    }
}

/// Modal de subida de imagen con previsualización
#[function_component(FileModal)]
pub fn file_modal(props: &FileModalProps) -> Html {
    let selected = use_state(|| None::<Selected>);

    // Al cerrarse el modal se descarta la selección
    {
        let selected = selected.clone();
        use_effect_with(props.active, move |active| {
            if !*active && selected.is_some() {
                revoke(&selected);
                selected.set(None);
            }
            || ()
        });
    }

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(preview_url) => {
                    revoke(&selected);
                    selected.set(Some(Selected { file, preview_url }));
                }
                Err(e) => log::warn!("⚠️ No se pudo previsualizar el fichero: {:?}", e),
            }
        })
    };

    let upload_click = {
        let selected = selected.clone();
        let cb = props.on_upload.clone();
        Callback::from(move |_e: MouseEvent| {
            if let Some(current) = &*selected {
                cb.emit(current.file.clone());
            }
        })
    };

    let close_click = {
        let cb = props.on_close.clone();
        let loading = props.loading;
        Callback::from(move |_e: MouseEvent| {
            if !loading {
                cb.emit(())
            }
        })
    };

    let class = if props.active { "modal is-active" } else { "modal" };
    let button_class = if props.loading {
        "button is-link is-loading"
    } else {
        "button is-link"
    };
    let file_name = selected
        .as_ref()
        .map(|s| s.file.name())
        .unwrap_or_else(|| "No file selected".to_string());

    html! {
        <div class={class}>
            <div class="modal-background" onclick={close_click.clone()}></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{ props.title.clone() }</p>
                    <button class="delete" aria-label="close" onclick={close_click.clone()}></button>
                </header>
                <section class="modal-card-body">
                    <div class="file has-name is-fullwidth mb-4">
                        <label class="file-label">
                            <input class="file-input" type="file" accept="image/*" onchange={on_change} />
                            <span class="file-cta">
                                <span class="file-label">{ "Choose a file…" }</span>
                            </span>
                            <span class="file-name">{ file_name }</span>
                        </label>
                    </div>
                    {
                        match &*selected {
                            Some(current) => html! {
                                <figure class="image">
                                    <img src={current.preview_url.clone()} alt="preview" />
                                </figure>
                            },
                            None => html! {},
                        }
                    }
                    <ErrorMessage message={props.error.clone()} />
                </section>
                <footer class="modal-card-foot">
                    <button
                        class={button_class}
                        disabled={props.loading || selected.is_none()}
                        onclick={upload_click}
                    >
                        { "Upload" }
                    </button>
                    <button class="button" disabled={props.loading} onclick={close_click}>{ "Cancel" }</button>
                </footer>
            </div>
        </div>
    }
}
