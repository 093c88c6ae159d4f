use crate::core::observable::{Readable, Subscription, Writable};

/// 目前選取的課程 id；空字串代表「未選取」
#[derive(Clone, Debug)]
pub struct ActiveSelection {
    id: Writable<String>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self {
            id: Writable::new(String::new()),
        }
    }

    /// 不做任何驗證，未知的 id 也照單全收
    pub fn set(&self, id: impl Into<String>) -> bool {
        let id = id.into();
        let changed = self.id.set(id.clone());
        if changed {
            tracing::debug!(course_id = %id, "Active course selection changed");
        }
        changed
    }

    pub fn clear(&self) -> bool {
        self.set(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.id.get().is_empty()
    }

    pub fn version(&self) -> u64 {
        self.id.version()
    }
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl Readable<String> for ActiveSelection {
    fn get(&self) -> String {
        self.id.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&String) + 'static,
    {
        self.id.subscribe(callback)
    }
}
