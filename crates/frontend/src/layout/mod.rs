pub mod global_context;
pub mod header;
pub mod left;
pub mod modal_service;
pub mod notification_service;

pub use modal_service::ModalService;

use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |          Header              |
/// |  (Left)   +------------------------------+
/// |           |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <div class="app-body">
                <Header />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
