//! Импорт участников из CSV: `email,referral_code` по строке на участника.

use super::aggregate::NewTeamMember;
use crate::shared::error::{ConsoleError, ConsoleResult};

/// Разбор загруженного файла. Пустые строки пропускаются, лишние колонки
/// игнорируются. Строка без второго поля отклоняет весь файл.
pub fn parse_members_csv(contents: &str) -> ConsoleResult<Vec<NewTeamMember>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut members = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            ConsoleError::validation(format!("Could not read CSV line {}: {}", index + 1, e))
        })?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let email = record.get(0).unwrap_or_default();
        let referral_code = record.get(1).unwrap_or_default();
        if email.is_empty() || referral_code.is_empty() {
            return Err(ConsoleError::validation(format!(
                "Line {} must contain an email and a referral code.",
                line
            )));
        }
        members.push(NewTeamMember::new(email, referral_code));
    }

    log::debug!("parsed {} team members from CSV", members.len());
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let members = parse_members_csv("a@x.com, REF_A\n\n  b@x.com ,REF_B,extra\n").unwrap();
        assert_eq!(
            members,
            vec![
                NewTeamMember::new("a@x.com", "REF_A"),
                NewTeamMember::new("b@x.com", "REF_B"),
            ]
        );
    }

    #[test]
    fn test_parse_crlf() {
        let members = parse_members_csv("a@x.com,REF_A\r\nb@x.com,REF_B\r\n").unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].referral_code, "REF_B");
    }

    #[test]
    fn test_missing_referral_names_line() {
        let err = parse_members_csv("a@x.com,REF_A\nb@x.com\n").unwrap_err();
        assert_eq!(
            err,
            ConsoleError::validation("Line 2 must contain an email and a referral code.")
        );
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_members_csv("").unwrap().is_empty());
    }
}
