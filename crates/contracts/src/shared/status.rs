//! Единое отображение статусов: подпись и цветовой тон.
//!
//! Каждый статусный enum реализует [`StatusDisplay`] ровно один раз; все
//! страницы берут подпись и класс бейджа отсюда.

use serde::{Deserialize, Serialize};

/// Цветовой тон бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl StatusTone {
    /// Модификатор CSS-класса `badge`
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "badge--success",
            StatusTone::Info => "badge--primary",
            StatusTone::Warning => "badge--warning",
            StatusTone::Danger => "badge--error",
            StatusTone::Neutral => "badge--neutral",
        }
    }
}

pub trait StatusDisplay: Copy {
    /// Каноническая подпись статуса
    fn label(&self) -> &'static str;

    fn tone(&self) -> StatusTone;

    fn badge_class(&self) -> String {
        format!("badge {}", self.tone().badge_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Flag;

    impl StatusDisplay for Flag {
        fn label(&self) -> &'static str {
            "Flag"
        }

        fn tone(&self) -> StatusTone {
            StatusTone::Info
        }
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(Flag.badge_class(), "badge badge--primary");
        assert_eq!(StatusTone::Danger.badge_class(), "badge--error");
    }
}
