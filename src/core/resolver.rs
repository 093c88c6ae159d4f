use crate::core::catalog::Catalog;
use crate::core::derived::Derived;
use crate::core::selection::ActiveSelection;
use crate::domain::model::Course;
use std::sync::Arc;

/// 目前選取課程的推導值
pub type ActiveCourse = Derived<Option<Course>>;

/// 空 id 直接回傳 `None`，不查表；未知 id 同樣是 `None`，不是錯誤
pub fn resolve<'a>(id: &str, catalog: &'a Catalog) -> Option<&'a Course> {
    if id.is_empty() {
        return None;
    }
    catalog.get(id)
}

#[derive(Debug, Clone)]
pub struct CourseResolver {
    catalog: Arc<Catalog>,
}

impl CourseResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn resolve(&self, id: &str) -> Option<Course> {
        let found = resolve(id, &self.catalog).cloned();
        if found.is_none() && !id.is_empty() {
            tracing::debug!(course_id = %id, "Course not found in catalog");
        }
        found
    }

    /// 建立一個隨 `selection` 變更而自動重新解析的課程值
    pub fn bind(&self, selection: &ActiveSelection) -> ActiveCourse {
        let resolver = self.clone();
        Derived::new(selection, move |id: &String| resolver.resolve(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observable::Readable;

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course {
                course_id: "CS101".to_string(),
                title: "Intro".to_string(),
                pid: "p1".to_string(),
                parsed_requirements: String::new(),
                html_requirements: None,
                url: "u".to_string(),
            },
            Course {
                course_id: "MATH100".to_string(),
                title: "Calculus I".to_string(),
                pid: "p2".to_string(),
                parsed_requirements: "Pre-Calculus 12".to_string(),
                html_requirements: Some("<p>Pre-Calculus 12</p>".to_string()),
                url: "https://example.com/math100".to_string(),
            },
        ])
    }

    #[test]
    fn test_empty_id_is_absent() {
        let catalog = catalog();
        assert_eq!(resolve("", &catalog), None);
    }

    #[test]
    fn test_every_key_resolves_to_its_course() {
        let catalog = catalog();
        for (id, course) in catalog.iter() {
            assert_eq!(resolve(id, &catalog), Some(course));
        }
    }

    #[test]
    fn test_unknown_id_is_absent() {
        let catalog = catalog();
        for id in ["CS999", "cs101", " CS101", "MATH"] {
            assert_eq!(resolve(id, &catalog), None);
        }
    }

    #[test]
    fn test_bound_course_follows_selection() {
        let resolver = CourseResolver::new(Arc::new(catalog()));
        let selection = ActiveSelection::new();
        let active = resolver.bind(&selection);
        assert_eq!(active.get(), None);

        selection.set("CS101");
        selection.set("MATH100");
        assert_eq!(active.get().unwrap().title, "Calculus I");

        selection.set("CS999");
        assert_eq!(active.get(), None);
    }

    #[test]
    fn test_redirect_registered_before_bind_keeps_course_in_step() {
        let resolver = CourseResolver::new(Arc::new(catalog()));
        let selection = ActiveSelection::new();

        // 先於 bind 註冊：選到 CS101 時改導向 MATH100
        let writer = selection.clone();
        let _redirect = selection.subscribe(move |id: &String| {
            if id == "CS101" {
                writer.set("MATH100");
            }
        });
        let active = resolver.bind(&selection);

        selection.set("CS101");

        assert_eq!(selection.get(), "MATH100");
        assert_eq!(
            active.get().map(|c| c.course_id),
            Some("MATH100".to_string())
        );
    }

    #[test]
    fn test_repeated_selection_recomputes_once() {
        let resolver = CourseResolver::new(Arc::new(catalog()));
        let selection = ActiveSelection::new();
        let active = resolver.bind(&selection);

        selection.set("CS101");
        let once = active.get();
        selection.set("CS101");

        assert_eq!(active.get(), once);
        assert_eq!(active.recompute_count(), 1);
    }
}
