//! 入力の間引き
//!
//! キー入力ごとにタイマーを予約し直し、静止期間が過ぎたときに
//! 最後の値だけを1回反映する。タイマー本体は呼び出し側（ブラウザのsetTimeout等）が持ち、
//! ここではどの予約が最新かだけを管理する。

use std::time::Duration;

/// 検索入力の静止期間（ミリ秒）
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// 予約の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 最新の予約だけを発火させる間引き器
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            generation: 0,
            pending: None,
        }
    }

    /// 検索入力用（300ms）
    pub fn for_search() -> Self {
        Self::new(Duration::from_millis(u64::from(SEARCH_DEBOUNCE_MS)))
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// 値を予約する（以前の予約は無効になる）
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// タイマー発火時に呼ぶ
    ///
    /// # Returns
    /// 最新の予約であれば値（2回目以降はNone）
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// 予約を取り消す
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
