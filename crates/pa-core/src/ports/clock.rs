use chrono::NaiveDate;

/// Calendar source for date rules.
/// 日期规则使用的日历来源。
pub trait ClockPort: Send + Sync {
    /// Current local calendar date.
    /// 当前本地日历日期。
    fn today(&self) -> NaiveDate;
}
