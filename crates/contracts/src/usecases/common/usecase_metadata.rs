/// Идентификация сценария в логах и интерфейсе
pub trait UseCaseMetadata {
    /// Индекс вида "u501"
    fn usecase_index() -> &'static str;

    fn usecase_name() -> &'static str;

    /// Подпись для кнопок и уведомлений
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Ключ для логов: индекс и имя через подчёркивание
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
