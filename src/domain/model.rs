use serde::{Deserialize, Serialize};

/// 課程目錄中的一筆課程，載入後不可變
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub pid: String,
    pub parsed_requirements: String,
    #[serde(default)]
    pub html_requirements: Option<String>,
    pub url: String,
}
