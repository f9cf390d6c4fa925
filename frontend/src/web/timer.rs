//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生定时器 API 替代 `gloo-timers`，并为核心库的轮询器
//! 提供 [`Scheduler`] 实现。

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use truthlens::poller::Scheduler;
use wasm_bindgen::prelude::*;

/// 周期性定时器
///
/// 封装 `setInterval` API。当 `Interval` 被 drop 时，自动清除定时器。
pub struct Interval {
    handle: Option<i32>,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 创建新的周期性定时器
    ///
    /// # 参数
    /// - `millis`: 间隔时间（毫秒）
    /// - `callback`: 每次间隔触发的回调函数
    ///
    /// 无法获取 window 或设置定时器失败时记录错误，返回的定时器不会触发。
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::<dyn Fn()>::new(callback);

        let handle = web_sys::window().and_then(|window| {
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    millis.min(i32::MAX as u32) as i32,
                )
                .ok()
        });

        if handle.is_none() {
            log::error!("[Timer] Failed to register interval of {}ms", millis);
        }

        Self { handle, closure }
    }

    /// 取消定时器
    ///
    /// 通常不需要手动调用，因为 drop 时会自动清除。
    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_interval_with_handle(handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 浏览器调度器
///
/// 异步任务交给 Leptos 的 `spawn_local`，周期任务使用 [`Interval`]。
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = Interval;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || tick())
    }
}
