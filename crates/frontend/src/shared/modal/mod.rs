use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Рамка модального окна: затемнение, заголовок с крестиком, тело.
/// Закрывается по Escape и по клику на затемнение.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    /// Ширина окна, по умолчанию из CSS
    #[prop(optional)]
    width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let style = width.map(|w| format!("width: {w};")).unwrap_or_default();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" style=style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
