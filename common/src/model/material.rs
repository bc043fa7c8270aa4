use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureMaterial {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discipline_id: i64,
    #[serde(default)]
    pub lecture_no: Option<u32>,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of materials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialsPage {
    #[serde(default)]
    pub items: Vec<LectureMaterial>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total: u32,
}

/// Text fields of the multipart upload; the file part is added by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialUpload {
    pub title: String,
    pub description: String,
    pub discipline_id: Option<i64>,
    pub lecture_no: Option<u32>,
}

impl MaterialUpload {
    /// Form fields in the order the server reads them; empty optionals are skipped.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("title", self.title.trim().to_string())];
        if !self.description.trim().is_empty() {
            fields.push(("description", self.description.trim().to_string()));
        }
        if let Some(id) = self.discipline_id {
            fields.push(("discipline_id", id.to_string()));
        }
        if let Some(no) = self.lecture_no {
            fields.push(("lecture_no", no.to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialUpdate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecture_no: Option<u32>,
}

/// `512 Б`, `1.5 КБ`, `2.0 МБ`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Б", "КБ", "МБ", "ГБ"];
    if bytes < 1024 {
        return format!("{} {}", bytes, UNITS[0]);
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_fields_skip_empty() {
        let upload = MaterialUpload {
            title: " Лекция 1 ".into(),
            description: String::new(),
            discipline_id: Some(3),
            lecture_no: None,
        };
        assert_eq!(
            upload.fields(),
            vec![("title", "Лекция 1".to_string()), ("discipline_id", "3".to_string())]
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(format_file_size(512), "512 Б");
        assert_eq!(format_file_size(1536), "1.5 КБ");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 МБ");
    }
}
