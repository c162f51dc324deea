use web_sys::window;

/// Ключ TOML-переопределения конфигурации
const CONFIG_OVERRIDE_KEY: &str = "console.config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Флаг входа: `"true"` под ключом `key`
pub fn is_authenticated(key: &str) -> bool {
    get_local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

pub fn save_authenticated(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, "true");
    }
}

pub fn clear_authenticated(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Необязательное переопределение конфигурации из localStorage
pub fn get_config_override() -> Option<String> {
    get_local_storage()?.get_item(CONFIG_OVERRIDE_KEY).ok()?
}
