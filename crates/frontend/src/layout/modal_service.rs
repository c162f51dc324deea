use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Запрос подтверждения необратимого действия
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub on_confirm: Callback<()>,
}

/// Сервис для централизованного управления диалогом подтверждения
#[derive(Clone, Copy)]
pub struct ModalService {
    request: RwSignal<Option<ConfirmRequest>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(None),
        }
    }

    /// Показать диалог подтверждения
    pub fn confirm(&self, title: impl Into<String>, message: impl Into<String>, on_confirm: Callback<()>) {
        self.request.set(Some(ConfirmRequest {
            title: title.into(),
            message: message.into(),
            confirm_label: "Delete",
            on_confirm,
        }));
    }

    /// Скрыть диалог
    pub fn hide(&self) {
        self.request.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.request.with(|r| r.is_some())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Рендерит активный диалог подтверждения, если он есть
#[component]
pub fn ConfirmDialogHost() -> impl IntoView {
    let modal = use_modal();

    move || {
        modal.request.get().map(|request| {
            let on_confirm = request.on_confirm;
            let on_close = Callback::new(move |_| modal.hide());
            view! {
                <Modal title=request.title on_close=on_close>
                    <p class="modal__message">{request.message}</p>
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <Button on_click=move |_| modal.hide()>"Cancel"</Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                on_confirm.run(());
                                modal.hide();
                            }
                        >
                            {request.confirm_label}
                        </Button>
                    </Flex>
                </Modal>
            }
        })
    }
}
