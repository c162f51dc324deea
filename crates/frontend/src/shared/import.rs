use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Первый выбранный файл из `<input type="file">`
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Сбрасывает значение поля выбора файла, чтобы тот же файл можно было выбрать снова
pub fn reset_file_input(ev: &web_sys::Event) {
    if let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

/// Читает файл целиком как UTF-8 текст
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "File content is not text".to_string())
}
