use crate::domain::model::{OutputRow, Record};

/// Ordered source-field → output-column table. Iteration order decides the
/// CSV column order, so the pairs live in a Vec, not a map.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    columns: Vec<(String, String)>,
}

impl FieldMapping {
    /// Column table for the Finnish tax statistics export.
    pub fn finnish_tax_columns() -> Self {
        let columns = [
            ("Nimi", "name"),
            ("Maakunta", "living_province"),
            ("Yhteensä", "earnings_total"),
            ("Ansiotulo", "earned_income"),
            ("Pääomatulo", "capital_income"),
            ("Vero%", "tax_rate"),
            ("Tulo veron jälkeen", "income_after_tax"),
            ("Jäännösvero", "remaining_tax"),
            ("Palautukset", "refunds"),
            ("Syntymävuosi", "birth_year"),
            ("Sija", "rank"),
            ("Maakunnan sija", "province_rank"),
        ];

        Self {
            columns: columns
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Output column names, in order.
    pub fn header(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|(_, target)| target.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Project a record onto the column table.
    ///
    /// Fields the record has but the table does not know are dropped without
    /// a warning. Fields the table knows but the record lacks become empty
    /// cells. Both policies are deliberate: the source data is heterogeneous
    /// and every row must still line up with the header.
    pub fn project(&self, record: &Record) -> OutputRow {
        let cells = self
            .columns
            .iter()
            .map(|(source, _)| {
                record
                    .data
                    .get(source)
                    .map(render_cell)
                    .unwrap_or_default()
            })
            .collect();

        OutputRow { cells }
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::finnish_tax_columns()
    }
}

fn render_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        // 數字、布林與巢狀結構都用 JSON 文字表示
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(fields: &[(&str, serde_json::Value)]) -> Record {
        let mut data = HashMap::new();
        for (key, value) in fields {
            data.insert(key.to_string(), value.clone());
        }
        Record { data }
    }

    #[test]
    fn test_header_matches_column_order() {
        let mapping = FieldMapping::default();
        assert_eq!(
            mapping.header(),
            vec![
                "name",
                "living_province",
                "earnings_total",
                "earned_income",
                "capital_income",
                "tax_rate",
                "income_after_tax",
                "remaining_tax",
                "refunds",
                "birth_year",
                "rank",
                "province_rank",
            ]
        );
    }

    #[test]
    fn test_target_names_are_unique() {
        let mapping = FieldMapping::default();
        let header = mapping.header();
        let mut deduped = header.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), header.len());
    }

    #[test]
    fn test_project_keeps_every_column() {
        let mapping = FieldMapping::default();
        let row = mapping.project(&record(&[
            ("Nimi", serde_json::json!("Matti")),
            ("Maakunta", serde_json::json!("Uusimaa")),
        ]));

        assert_eq!(row.cells.len(), mapping.len());
        assert_eq!(row.cells[0], "Matti");
        assert_eq!(row.cells[1], "Uusimaa");
        assert!(row.cells[2..].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_project_drops_unmapped_fields() {
        let mapping = FieldMapping::default();
        let row = mapping.project(&record(&[
            ("Nimi", serde_json::json!("Matti")),
            ("Tuntematon kenttä", serde_json::json!("extra")),
            ("another_extra", serde_json::json!(42)),
        ]));

        assert_eq!(row.cells.len(), mapping.len());
        assert!(!row.cells.iter().any(|cell| cell == "extra" || cell == "42"));
    }

    #[test]
    fn test_project_renders_scalars() {
        let mapping = FieldMapping::default();
        let row = mapping.project(&record(&[
            ("Nimi", serde_json::json!("Matti")),
            ("Yhteensä", serde_json::json!(125000.5)),
            ("Vero%", serde_json::json!(32)),
            ("Syntymävuosi", serde_json::json!(1975)),
            ("Palautukset", serde_json::json!(null)),
        ]));

        assert_eq!(row.cells[2], "125000.5");
        assert_eq!(row.cells[5], "32");
        assert_eq!(row.cells[9], "1975");
        assert_eq!(row.cells[8], "");
    }

    #[test]
    fn test_project_full_record_has_no_empty_cells() {
        let mapping = FieldMapping::default();
        let row = mapping.project(&record(&[
            ("Nimi", serde_json::json!("Matti Meikäläinen")),
            ("Maakunta", serde_json::json!("Uusimaa")),
            ("Yhteensä", serde_json::json!(125000.5)),
            ("Ansiotulo", serde_json::json!(100000.0)),
            ("Pääomatulo", serde_json::json!(25000.5)),
            ("Vero%", serde_json::json!(32.4)),
            ("Tulo veron jälkeen", serde_json::json!(84500.3)),
            ("Jäännösvero", serde_json::json!(120.0)),
            ("Palautukset", serde_json::json!(0)),
            ("Syntymävuosi", serde_json::json!(1975)),
            ("Sija", serde_json::json!(1001)),
            ("Maakunnan sija", serde_json::json!(88)),
        ]));

        assert!(row.cells.iter().all(|cell| !cell.is_empty()));
    }
}
