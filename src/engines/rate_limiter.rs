// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::metrics::RATE_LIMITER_WAIT_SECONDS;
use metrics::histogram;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// 速率下限（次/秒），非正数、NaN 或缺失的配置都会被钳到此值
pub const MIN_TOKENS_PER_SECOND: f64 = 0.001;

/// 速率限制器
///
/// 最小间隔闸门：两次放行之间至少相隔 `1 / tokens_per_second` 秒。
/// 不是令牌桶，空闲期间不会累积额度。
///
/// 每个工作器进程构造一次，以 `Arc` 共享给所有抓取调用；
/// 上次放行时间的读-改-写在同一把锁内完成，并发调用会按顺序通过闸门。
pub struct RateLimiter {
    min_interval: Duration,
    last_permit: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// 创建新的速率限制器实例
    ///
    /// # 参数
    ///
    /// * `tokens_per_second` - 每秒允许放行的次数
    pub fn new(tokens_per_second: f64) -> Self {
        let rate = if tokens_per_second.is_nan() {
            MIN_TOKENS_PER_SECOND
        } else {
            tokens_per_second.max(MIN_TOKENS_PER_SECOND)
        };

        Self {
            min_interval: Duration::from_secs_f64(1.0 / rate),
            last_permit: Mutex::new(None),
        }
    }

    /// 两次放行之间的最小间隔
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// 等待直到允许下一次请求
    ///
    /// 返回前把上次放行时间更新为当前时间。
    pub async fn throttle(&self) {
        let mut last = self.last_permit.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                debug!(wait_ms = waited.as_millis() as u64, "Rate limiter delaying request");
                sleep(waited).await;
            }
        }

        histogram!(RATE_LIMITER_WAIT_SECONDS).record(waited.as_secs_f64());
        *last = Some(Instant::now());
    }
}
