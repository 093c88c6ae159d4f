use crate::domain::model::Course;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CourseMapError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static INSTALLED: OnceLock<Arc<Catalog>> = OnceLock::new();

/// 課程 id 到課程的唯讀對照表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: HashMap<String, Course>,
    skipped: usize,
}

impl Catalog {
    /// 以每筆課程的 `course_id` 作為 key
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let courses = courses
            .into_iter()
            .map(|course| (course.course_id.clone(), course))
            .collect();
        Self {
            courses,
            skipped: 0,
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_slice(content.as_bytes())
    }

    /// 解析 `{ "<courseId>": Course, ... }`。
    ///
    /// 每筆資料獨立解碼：無法解碼成 Course 的項目會被略過並記錄警告，
    /// 之後查詢該 id 的結果與未知 id 相同。Key 與 `courseId` 是否一致不檢查。
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        let entries = match raw {
            Value::Object(entries) => entries,
            other => {
                return Err(CourseMapError::CatalogFormatError {
                    message: format!(
                        "expected a JSON object keyed by course id, found {}",
                        json_kind(&other)
                    ),
                })
            }
        };

        let mut courses = HashMap::with_capacity(entries.len());
        let mut skipped = 0;
        for (key, value) in entries {
            match serde_json::from_value::<Course>(value) {
                Ok(course) => {
                    courses.insert(key, course);
                }
                Err(e) => {
                    tracing::warn!(course_id = %key, error = %e, "Skipping malformed catalog entry");
                    skipped += 1;
                }
            }
        }

        Ok(Self { courses, skipped })
    }

    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// 載入時被略過的項目數
    pub fn skipped_entries(&self) -> usize {
        self.skipped
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.courses.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(id, course)| (id.as_str(), course))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 從來源讀取並解析整份課程目錄
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Result<Catalog> {
    tracing::debug!("Reading course catalog from {}", source.describe());
    let bytes = source.read_catalog().await?;
    let catalog = Catalog::from_json_slice(&bytes)?;

    if catalog.skipped_entries() > 0 {
        tracing::warn!(
            "Loaded {} courses from {} ({} malformed entries skipped)",
            catalog.len(),
            source.describe(),
            catalog.skipped_entries()
        );
    } else {
        tracing::info!("Loaded {} courses from {}", catalog.len(), source.describe());
    }

    Ok(catalog)
}

/// 將目錄設為整個行程共用的唯一實例；只能成功一次
pub fn install(catalog: Catalog) -> Result<Arc<Catalog>> {
    let catalog = Arc::new(catalog);
    INSTALLED
        .set(Arc::clone(&catalog))
        .map_err(|_| CourseMapError::CatalogAlreadyLoaded)?;
    Ok(catalog)
}

pub fn installed() -> Option<Arc<Catalog>> {
    INSTALLED.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "CS101": {"courseId":"CS101","title":"Intro","pid":"p1","parsedRequirements":"","htmlRequirements":null,"url":"u"},
        "CSC225": {"courseId":"CSC225","title":"Algorithms and Data Structures I","pid":"p2",
                   "parsedRequirements":"CSC 115","htmlRequirements":"<ul><li>CSC 115</li></ul>","url":"https://example.com/csc225"}
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids(), vec!["CS101", "CSC225"]);
        assert_eq!(catalog.get("CS101").unwrap().title, "Intro");
        assert!(catalog.contains("CSC225"));
        assert!(!catalog.contains("CS999"));
        assert_eq!(catalog.skipped_entries(), 0);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let catalog = Catalog::from_json_str(
            r#"{
                "CS101": {"courseId":"CS101","title":"Intro","pid":"p1","parsedRequirements":"","url":"u"},
                "BROKEN": {"courseId":"BROKEN","title":42},
                "ALSO_BROKEN": "not an object"
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped_entries(), 2);
        assert!(catalog.get("BROKEN").is_none());
    }

    #[test]
    fn test_non_object_catalog_is_rejected() {
        let err = Catalog::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CourseMapError::CatalogFormatError { .. }));
        assert!(err.to_string().contains("an array"));

        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CourseMapError::SerializationError(_)));
    }

    #[test]
    fn test_from_courses_keys_by_course_id() {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        let rebuilt = Catalog::from_courses(catalog.iter().map(|(_, c)| c.clone()));
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_empty_object_is_an_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.ids().is_empty());
    }
}
