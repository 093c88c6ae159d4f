use crate::config::OutputFormat;
use crate::domain::model::Course;
use crate::utils::error::Result;

/// 把一次選取的解析結果格式化成一行 (json) 或一段文字 (text)
pub fn render_resolution(
    format: OutputFormat,
    selection: &str,
    course: Option<&Course>,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "selection": selection,
                "course": course,
            });
            Ok(serde_json::to_string(&value)?)
        }
        OutputFormat::Text => Ok(render_text(selection, course)),
    }
}

fn render_text(selection: &str, course: Option<&Course>) -> String {
    match course {
        Some(course) => {
            let requirements = if course.parsed_requirements.trim().is_empty() {
                "(none)"
            } else {
                course.parsed_requirements.as_str()
            };
            format!(
                "{}: {}\n  requirements: {}\n  url: {}",
                course.course_id, course.title, requirements, course.url
            )
        }
        None if selection.is_empty() => "(no course selected)".to_string(),
        None => format!("{}: course not found", selection),
    }
}
