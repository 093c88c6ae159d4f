//! 單執行緒的可觀察值。
//!
//! `Writable<T>` 持有一個值與訂閱者清單，每次「可見的」寫入 (新值與舊值不相等)
//! 之後，依註冊順序同步呼叫所有訂閱者。寫入相同的值不會觸發任何通知。
//!
//! 通知經過每個 store 自己的佇列：訂閱者在通知期間再次寫入同一個 store 時，
//! 新一輪通知排在目前這一輪之後 (FIFO)，所以每個訂閱者最後看到的一定是最新的值。
//! 呼叫前會確認訂閱仍然存在，本輪中途被取消的訂閱者不會再被呼叫。
//! 通知期間不持有內部借用，訂閱者可以讀寫任何 store。

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

/// 可讀取並可訂閱的值
pub trait Readable<T> {
    fn get(&self) -> T;

    /// 註冊回呼，只在之後的變更時被呼叫 (註冊當下不呼叫)
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static;
}

/// 訂閱的 RAII 句柄，drop 時自動取消訂閱
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// 讓回呼在 store 存活期間一直保持註冊
    pub fn detach(mut self) {
        self.unsubscribe.take();
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    pending: VecDeque<(u64, Callback<T>, T)>,
    notifying: bool,
}

/// 通知迴圈結束 (包含 panic) 時重設佇列狀態
struct DrainGuard<'a, T> {
    inner: &'a RefCell<Inner<T>>,
}

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// 共享的可寫值。clone 得到的是同一個 store 的另一個句柄。
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// 取代目前的值；回傳是否真的發生變更 (並因此排入了通知)
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;

            let snapshot = inner.value.clone();
            let queued: Vec<(u64, Callback<T>, T)> = inner
                .subscribers
                .iter()
                .map(|(id, callback)| (*id, Rc::clone(callback), snapshot.clone()))
                .collect();
            inner.pending.extend(queued);

            // 外層的通知迴圈會接手處理剛排入的項目
            if inner.notifying {
                return true;
            }
            inner.notifying = true;
        }

        let _guard = DrainGuard { inner: &self.inner };
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let popped = inner.pending.pop_front();
                match popped {
                    Some((id, callback, value)) => {
                        let subscribed = inner.subscribers.iter().any(|(sid, _)| *sid == id);
                        subscribed.then_some((callback, value))
                    }
                    None => break,
                }
            };

            if let Some((callback, value)) = next {
                callback(&value);
            }
        }
        true
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let current = self.get();
        self.set(f(&current))
    }

    /// 每次可見變更遞增一次
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: Clone + PartialEq + 'static> Readable<T> for Writable<T> {
    fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
