use crate::core::catalog::Catalog;
use crate::core::observable::{Readable, Subscription};
use crate::core::resolver::{ActiveCourse, CourseResolver};
use crate::core::selection::ActiveSelection;
use crate::domain::model::Course;
use std::sync::Arc;

/// 前端綁定用的組合：一個選取狀態，加上它在目錄中解析出的課程
pub struct CourseView {
    selection: ActiveSelection,
    course: ActiveCourse,
    resolver: CourseResolver,
}

impl CourseView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let resolver = CourseResolver::new(catalog);
        let selection = ActiveSelection::new();
        let course = resolver.bind(&selection);
        Self {
            selection,
            course,
            resolver,
        }
    }

    pub fn select(&self, id: impl Into<String>) -> bool {
        self.selection.set(id)
    }

    pub fn clear(&self) -> bool {
        self.selection.clear()
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn active_course(&self) -> Option<Course> {
        self.course.get()
    }

    /// 解析結果改變時呼叫 `callback`
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Option<Course>) + 'static,
    {
        self.course.subscribe(callback)
    }

    pub fn recompute_count(&self) -> u64 {
        self.course.recompute_count()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.resolver.catalog()
    }
}
