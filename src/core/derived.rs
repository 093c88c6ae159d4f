use crate::core::observable::{Readable, Subscription, Writable};
use std::cell::Cell;
use std::rc::Rc;

/// 由單一來源推導出的值。
///
/// 建構時計算一次，之後每當來源通知變更就立即重新計算。
/// 只有當結果與前一次不相等時才通知自己的訂閱者。
pub struct Derived<T> {
    output: Writable<T>,
    recomputes: Rc<Cell<u64>>,
    _source: Subscription,
}

impl<T: Clone + PartialEq + 'static> Derived<T> {
    pub fn new<S, R, F>(source: &R, compute: F) -> Self
    where
        S: 'static,
        R: Readable<S>,
        F: Fn(&S) -> T + 'static,
    {
        let output = Writable::new(compute(&source.get()));
        let recomputes = Rc::new(Cell::new(0));

        let sink = output.clone();
        let counter = Rc::clone(&recomputes);
        let subscription = source.subscribe(move |value| {
            counter.set(counter.get() + 1);
            sink.set(compute(value));
        });

        Self {
            output,
            recomputes,
            _source: subscription,
        }
    }

    /// 建構後因來源變更而重新計算的次數
    pub fn recompute_count(&self) -> u64 {
        self.recomputes.get()
    }
}

impl<T: Clone + PartialEq + 'static> Readable<T> for Derived<T> {
    fn get(&self) -> T {
        self.output.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.output.subscribe(callback)
    }
}
