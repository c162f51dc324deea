use serde::{Deserialize, Serialize};

use crate::shared::list_view::contains_ci;

/// Какой из списков email редактируется
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailListKind {
    Whitelist,
    Blacklist,
}

impl EmailListKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EmailListKind::Whitelist => "Whitelist",
            EmailListKind::Blacklist => "Blacklist",
        }
    }
}

/// Ограничения по email для команды: домены и списки адресов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailControls {
    pub domains: Vec<String>,
    pub email_whitelist: Vec<String>,
    pub email_blacklist: Vec<String>,
}

/// Разбор пакетного ввода: разделители запятая и перевод строки,
/// пробелы по краям и пустые элементы отбрасываются, повторы убираются.
pub fn split_bulk_emails(input: &str) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for email in input.split([',', '\n']).map(str::trim) {
        if !email.is_empty() && !result.iter().any(|e| e == email) {
            result.push(email.to_string());
        }
    }
    result
}

impl EmailControls {
    /// Добавить домен. `None`, если ввод пуст или домен уже есть.
    pub fn add_domain(&mut self, input: &str) -> Option<String> {
        let domain = input.trim();
        if domain.is_empty() || self.domains.iter().any(|d| d == domain) {
            return None;
        }
        self.domains.push(domain.to_string());
        Some(domain.to_string())
    }

    pub fn remove_domain(&mut self, domain: &str) -> bool {
        let before = self.domains.len();
        self.domains.retain(|d| d != domain);
        before != self.domains.len()
    }

    pub fn list(&self, kind: EmailListKind) -> &[String] {
        match kind {
            EmailListKind::Whitelist => &self.email_whitelist,
            EmailListKind::Blacklist => &self.email_blacklist,
        }
    }

    fn list_mut(&mut self, kind: EmailListKind) -> &mut Vec<String> {
        match kind {
            EmailListKind::Whitelist => &mut self.email_whitelist,
            EmailListKind::Blacklist => &mut self.email_blacklist,
        }
    }

    /// Пакетное добавление; возвращает действительно добавленные адреса
    pub fn bulk_add(&mut self, kind: EmailListKind, input: &str) -> Vec<String> {
        let list = self.list_mut(kind);
        let added: Vec<String> = split_bulk_emails(input)
            .into_iter()
            .filter(|email| !list.contains(email))
            .collect();
        list.extend(added.iter().cloned());
        if !added.is_empty() {
            log::debug!("{} email(s) added to {:?}", added.len(), kind);
        }
        added
    }

    pub fn remove_email(&mut self, kind: EmailListKind, email: &str) -> bool {
        let list = self.list_mut(kind);
        let before = list.len();
        list.retain(|e| e != email);
        before != list.len()
    }

    pub fn clear(&mut self, kind: EmailListKind) {
        self.list_mut(kind).clear();
        log::debug!("{:?} cleared", kind);
    }

    /// Поиск по списку без учёта регистра
    pub fn search(&self, kind: EmailListKind, term: &str) -> Vec<String> {
        self.list(kind)
            .iter()
            .filter(|email| contains_ci(email, term))
            .cloned()
            .collect()
    }
}

pub fn seed_email_controls() -> EmailControls {
    EmailControls {
        domains: vec!["partner.com".into(), "example.org".into()],
        email_whitelist: vec!["admin@partner.com".into(), "manager@example.org".into()],
        email_blacklist: vec!["blocked@example.com".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bulk_emails() {
        assert_eq!(
            split_bulk_emails(" a@x.com,b@x.com\n\n a@x.com ,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
    }

    #[test]
    fn test_domains() {
        let mut controls = seed_email_controls();
        assert_eq!(controls.add_domain("  new.io "), Some("new.io".to_string()));
        assert_eq!(controls.add_domain("partner.com"), None);
        assert_eq!(controls.add_domain("   "), None);
        assert!(controls.remove_domain("partner.com"));
        assert!(!controls.remove_domain("partner.com"));
        assert_eq!(controls.domains, vec!["example.org", "new.io"]);
    }

    #[test]
    fn test_bulk_add_skips_existing() {
        let mut controls = seed_email_controls();
        let added = controls.bulk_add(
            EmailListKind::Whitelist,
            "admin@partner.com, ops@partner.com\nops@partner.com",
        );
        assert_eq!(added, vec!["ops@partner.com".to_string()]);
        assert_eq!(controls.list(EmailListKind::Whitelist).len(), 3);
    }

    #[test]
    fn test_search_remove_clear() {
        let mut controls = seed_email_controls();
        assert_eq!(
            controls.search(EmailListKind::Whitelist, "PARTNER"),
            vec!["admin@partner.com".to_string()]
        );
        assert!(controls.remove_email(EmailListKind::Blacklist, "blocked@example.com"));
        assert!(controls.list(EmailListKind::Blacklist).is_empty());

        controls.clear(EmailListKind::Whitelist);
        assert!(controls.list(EmailListKind::Whitelist).is_empty());
    }
}
