//! Общие типы и чистая логика консоли eSIM-промокодов.
//!
//! Крейт не зависит от целевой платформы: всё, что здесь лежит, используется
//! фронтендом (WASM) и покрыто обычными `cargo test`.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
