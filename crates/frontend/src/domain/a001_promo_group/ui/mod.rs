pub mod create;
pub mod details;
pub mod edit;
pub mod form;
pub mod list;

pub use create::PromoGroupCreate;
pub use details::PromoGroupDetails;
pub use edit::PromoGroupEdit;
pub use list::PromoGroupList;

use contracts::shared::error::{ConsoleError, ConsoleResult};

/// Итог `try_update` над хранилищем групп; `None` значит, что сигнал уже освобождён
pub(crate) fn group_outcome<T>(
    outcome: Option<ConsoleResult<T>>,
    group_id: impl Into<String>,
) -> ConsoleResult<T> {
    outcome.unwrap_or_else(|| Err(ConsoleError::not_found("group", group_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposed_store_is_not_success() {
        let outcome: ConsoleResult<()> = group_outcome(None, "g-1");
        assert_eq!(outcome, Err(ConsoleError::not_found("group", "g-1")));
        assert_eq!(group_outcome(Some(Ok(5)), "g-1"), Ok(5));
    }
}
