use anyhow::Context;

/// Тип, который можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения одной строки в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

/// Собирает CSV-документ: строка заголовков и по строке на запись,
/// разделитель запятая, окончания строк `\n`.
pub fn to_csv_string<T: CsvExportable>(data: &[T]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .context("Failed to write CSV header")?;
    for item in data {
        writer
            .write_record(item.to_csv_row())
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl CsvExportable for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["Left", "Right"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(&[Pair("a", "b"), Pair("c", "d")]).unwrap();
        assert_eq!(csv, "Left,Right\na,b\nc,d\n");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = to_csv_string(&[Pair("x,y", "z")]).unwrap();
        assert_eq!(csv, "Left,Right\n\"x,y\",z\n");
    }

    #[test]
    fn test_csv_header_only() {
        let csv = to_csv_string::<Pair>(&[]).unwrap();
        assert_eq!(csv, "Left,Right\n");
    }
}
