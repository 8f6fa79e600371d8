//! 規劃日曆
//!
//! 規劃期間以「月 × 營業日」展開為一維序列, 跨月的前後關係
//! 由 [`PlanningCalendar::previous`] 直接給出, 第一個期間沒有
//! 前期 (冷啟動, 期初庫存為零)。

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// 期間索引 (month 與 day 皆從 1 起算)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeriodIndex {
    /// 月份 (1..=months)
    pub month: u32,
    /// 該月的營業日 (1..=days_per_month)
    pub day: u32,
}

impl PeriodIndex {
    /// 建立期間索引
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

impl std::fmt::Display for PeriodIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}d{}", self.month, self.day)
    }
}

/// 規劃日曆: 月數 × 每月營業日數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningCalendar {
    /// 規劃月數
    pub months: u32,
    /// 每月營業日數
    pub days_per_month: u32,
    /// 第一個月對應的實際日期 (僅用於月份標籤)
    pub start: Option<NaiveDate>,
}

impl PlanningCalendar {
    /// 建立規劃日曆
    pub fn new(months: u32, days_per_month: u32) -> Self {
        Self {
            months,
            days_per_month,
            start: None,
        }
    }

    /// 指定第一個月對應的實際日期
    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// 總期間數
    pub fn num_periods(&self) -> usize {
        (self.months * self.days_per_month) as usize
    }

    /// 期間是否落在日曆範圍內
    pub fn contains(&self, p: PeriodIndex) -> bool {
        (1..=self.months).contains(&p.month) && (1..=self.days_per_month).contains(&p.day)
    }

    /// 期間的一維序號 (0 起算)
    pub fn ordinal(&self, p: PeriodIndex) -> usize {
        ((p.month - 1) * self.days_per_month + (p.day - 1)) as usize
    }

    /// 由一維序號還原期間
    pub fn period(&self, ordinal: usize) -> PeriodIndex {
        let ord = ordinal as u32;
        PeriodIndex::new(ord / self.days_per_month + 1, ord % self.days_per_month + 1)
    }

    /// 前一個期間; 第一個期間回傳 `None`
    ///
    /// 月底與月初之間正常銜接, 庫存餘額約束靠這個方法跨月結轉。
    pub fn previous(&self, p: PeriodIndex) -> Option<PeriodIndex> {
        if p.day > 1 {
            Some(PeriodIndex::new(p.month, p.day - 1))
        } else if p.month > 1 {
            Some(PeriodIndex::new(p.month - 1, self.days_per_month))
        } else {
            None
        }
    }

    /// 依序走訪所有期間
    pub fn periods(&self) -> impl Iterator<Item = PeriodIndex> + '_ {
        (0..self.num_periods()).map(move |i| self.period(i))
    }

    /// 月份標籤; 設定起始日期時輸出 "YYYY-MM", 否則輸出 "M<n>"
    pub fn month_label(&self, month: u32) -> String {
        match self.start {
            Some(start) => {
                let date = start + Months::new(month - 1);
                date.format("%Y-%m").to_string()
            }
            None => format!("M{}", month),
        }
    }
}
