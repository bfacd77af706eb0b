use crate::application::ScopeStore;
use crate::domain::{Checklist, ChecklistItem, DomainError, StatusResolver, Topic};
use std::fs;

/// Columns the checklist file must carry, in export order.
const REQUIRED_COLUMNS: [&str; 3] = ["Tópico", "Tarefas", "Concluído"];

pub struct FileRepository;

impl FileRepository {
    pub fn save_session(store: &ScopeStore, filename: &str) -> Result<String, String> {
        match serde_json::to_string_pretty(store) {
            Ok(json) => {
                match fs::write(filename, &json) {
                    Ok(_) => Ok(filename.to_string()),
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_session(filename: &str) -> Result<(ScopeStore, String), String> {
        match fs::read_to_string(filename) {
            Ok(content) => {
                match serde_json::from_str::<ScopeStore>(&content) {
                    Ok(store) => Ok((store, filename.to_string())),
                    Err(e) => Err(format!("Invalid file format - {}", e)),
                }
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

pub struct CsvRepository;

impl CsvRepository {
    /// Writes one checklist as a three-column CSV file, one row per item,
    /// row order preserved.
    pub fn export_checklist(checklist: &Checklist, filename: &str) -> Result<String, String> {
        let mut writer = csv::Writer::from_path(filename).map_err(|e| e.to_string())?;
        writer
            .write_record(REQUIRED_COLUMNS)
            .map_err(|e| e.to_string())?;
        for item in &checklist.items {
            writer
                .write_record([item.topic.label(), item.task.as_str(), item.status.label()])
                .map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;
        Ok(filename.to_string())
    }

    /// Reads a checklist back from a three-column CSV file.
    ///
    /// All required columns must be present by name; column order does not
    /// matter and extra columns are ignored. A missing column is a fatal
    /// format error reporting expected vs. found column names. Status
    /// values go through [`StatusResolver`], so unknown statuses resolve to
    /// not done rather than failing; topic labels outside the fixed
    /// enumeration are a format error.
    pub fn import_checklist(filename: &str) -> Result<(Checklist, String), String> {
        let mut reader = csv::Reader::from_path(filename).map_err(|e| e.to_string())?;
        let headers = reader.headers().map_err(|e| e.to_string())?.clone();
        let found: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

        let mut positions = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for required in REQUIRED_COLUMNS {
            match found.iter().position(|h| h == required) {
                Some(pos) => positions.push(pos),
                None => {
                    let err = DomainError::MissingColumns {
                        expected: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
                        found,
                    };
                    return Err(err.to_string());
                }
            }
        }
        let (topic_col, task_col, status_col) = (positions[0], positions[1], positions[2]);

        let mut items = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| e.to_string())?;
            let topic_raw = record.get(topic_col).unwrap_or("");
            let topic = Topic::parse(topic_raw).ok_or_else(|| {
                DomainError::UnknownTopic(topic_raw.trim().to_string()).to_string()
            })?;
            items.push(ChecklistItem {
                topic,
                task: record.get(task_col).unwrap_or("").to_string(),
                status: StatusResolver::resolve(record.get(status_col)),
            });
        }

        Ok((Checklist::from_items(items), filename.to_string()))
    }
}
