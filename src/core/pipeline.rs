use crate::core::{ConfigProvider, FieldMapping, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::{ConvertError, Result};
use std::collections::HashMap;

pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    mapping: FieldMapping,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, mapping: FieldMapping) -> Self {
        Self {
            storage,
            config,
            mapping,
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();

        tracing::debug!("Reading input file: {}", input_path);
        let bytes = self.storage.read_file(input_path)?;

        let json_data: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ConvertError::InputParse {
                path: input_path.to_string(),
                source: e,
            })?;

        // 輸入必須是物件陣列，其他形狀一律拒絕
        let items = match json_data {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(ConvertError::InputShape {
                    path: input_path.to_string(),
                    reason: format!(
                        "expected a top-level array of objects, found {}",
                        json_type_name(&other)
                    ),
                });
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                serde_json::Value::Object(obj) => {
                    let mut data = HashMap::new();
                    for (key, value) in obj {
                        data.insert(key, value);
                    }
                    records.push(Record { data });
                }
                other => {
                    return Err(ConvertError::InputShape {
                        path: input_path.to_string(),
                        reason: format!("element {} is {}, not an object", index, json_type_name(&other)),
                    });
                }
            }
        }

        tracing::debug!("Parsed {} records from {}", records.len(), input_path);
        Ok(records)
    }

    fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let rows = data
            .iter()
            .map(|record| self.mapping.project(record))
            .collect();

        Ok(TransformResult {
            header: self.mapping.header(),
            rows,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} rows + header to {}",
            result.rows.len(),
            output_path
        );

        // 先在記憶體組出完整 CSV，再一次交給 storage
        let csv_data = {
            let mut writer = csv::Writer::from_writer(Vec::new());

            writer.write_record(&result.header)?;
            for row in &result.rows {
                writer.write_record(&row.cells)?;
            }

            writer.into_inner().map_err(|e| ConvertError::OutputIo {
                path: output_path.to_string(),
                source: e.into_error(),
            })?
        };

        self.storage.write_file(output_path, &csv_data)?;

        tracing::debug!("CSV file saved successfully");
        Ok(output_path.to_string())
    }
}
