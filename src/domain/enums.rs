use chrono::{Datelike, Local, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Task priority, one column per value on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in column order
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }

    /// Get the display name for this priority
    pub fn name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Next priority in column order (wraps)
    pub fn next(&self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    /// Previous priority in column order (wraps)
    pub fn prev(&self) -> Self {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }

    /// Column index (0 = high)
    pub fn index(&self) -> usize {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The other status
    pub fn flipped(&self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Time-of-day slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Midday,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub fn all() -> &'static [TimeSlot] {
        &[
            TimeSlot::Morning,
            TimeSlot::Midday,
            TimeSlot::Afternoon,
            TimeSlot::Evening,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Midday => "Midday",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    /// Slot containing the given hour of day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => TimeSlot::Morning,
            11..=13 => TimeSlot::Midday,
            14..=17 => TimeSlot::Afternoon,
            _ => TimeSlot::Evening,
        }
    }
}

/// Month of the year, used by the yearly grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthBucket {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl MonthBucket {
    pub fn all() -> &'static [MonthBucket] {
        &[
            MonthBucket::Jan,
            MonthBucket::Feb,
            MonthBucket::Mar,
            MonthBucket::Apr,
            MonthBucket::May,
            MonthBucket::Jun,
            MonthBucket::Jul,
            MonthBucket::Aug,
            MonthBucket::Sep,
            MonthBucket::Oct,
            MonthBucket::Nov,
            MonthBucket::Dec,
        ]
    }

    /// Month from a 1-based month number (clamped to 1..=12)
    pub fn from_number(month: u32) -> Self {
        let idx = month.clamp(1, 12) as usize - 1;
        Self::all()[idx]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthBucket::Jan => "Jan",
            MonthBucket::Feb => "Feb",
            MonthBucket::Mar => "Mar",
            MonthBucket::Apr => "Apr",
            MonthBucket::May => "May",
            MonthBucket::Jun => "Jun",
            MonthBucket::Jul => "Jul",
            MonthBucket::Aug => "Aug",
            MonthBucket::Sep => "Sep",
            MonthBucket::Oct => "Oct",
            MonthBucket::Nov => "Nov",
            MonthBucket::Dec => "Dec",
        }
    }
}

/// When a task applies. One variant per bucketing scheme; a task carries
/// exactly one bucket and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Slot(TimeSlot),
    Day(Weekday),
    /// Day of the month, 1..=31
    Date(u8),
    Month(MonthBucket),
}

/// Axis labels for `Bucket::Date`
const DATE_LABELS: [&str; 31] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
];

impl Bucket {
    /// Day-of-month bucket (clamped to 1..=31)
    pub fn date(day: u32) -> Self {
        Bucket::Date(day.clamp(1, 31) as u8)
    }

    /// Display label used for chart axes and lists
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Slot(slot) => slot.name(),
            Bucket::Day(day) => weekday_name(*day),
            Bucket::Date(date) => DATE_LABELS[(*date).clamp(1, 31) as usize - 1],
            Bucket::Month(month) => month.name(),
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Grouping mode for the completion chart (the D / W / M / Y selector)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Time-of-day slots
    Day,
    /// Days of the week
    Week,
    /// Days of the month
    Month,
    /// Months of the year
    Year,
}

impl Grouping {
    pub fn all() -> &'static [Grouping] {
        &[Grouping::Day, Grouping::Week, Grouping::Month, Grouping::Year]
    }

    /// Short selector label shown in the chart title
    pub fn short_label(&self) -> &'static str {
        match self {
            Grouping::Day => "D",
            Grouping::Week => "W",
            Grouping::Month => "M",
            Grouping::Year => "Y",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grouping::Day => "day",
            Grouping::Week => "week",
            Grouping::Month => "month",
            Grouping::Year => "year",
        }
    }

    /// Next grouping in selector order (wraps)
    pub fn next(&self) -> Self {
        match self {
            Grouping::Day => Grouping::Week,
            Grouping::Week => Grouping::Month,
            Grouping::Month => Grouping::Year,
            Grouping::Year => Grouping::Day,
        }
    }

    /// The buckets of this grouping, in display order
    pub fn bucket_order(&self) -> Vec<Bucket> {
        match self {
            Grouping::Day => TimeSlot::all().iter().map(|s| Bucket::Slot(*s)).collect(),
            Grouping::Week => [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
            .into_iter()
            .map(Bucket::Day)
            .collect(),
            Grouping::Month => (1..=31).map(Bucket::date).collect(),
            Grouping::Year => MonthBucket::all().iter().map(|m| Bucket::Month(*m)).collect(),
        }
    }

    /// Whether a bucket belongs to this grouping's scheme
    #[cfg(test)]
    pub fn contains(&self, bucket: Bucket) -> bool {
        matches!(
            (self, bucket),
            (Grouping::Day, Bucket::Slot(_))
                | (Grouping::Week, Bucket::Day(_))
                | (Grouping::Month, Bucket::Date(_))
                | (Grouping::Year, Bucket::Month(_))
        )
    }

    /// Bucket for "now" according to the local clock
    pub fn current_bucket(&self) -> Bucket {
        let now = Local::now();
        match self {
            Grouping::Day => Bucket::Slot(TimeSlot::from_hour(now.hour())),
            Grouping::Week => Bucket::Day(now.weekday()),
            Grouping::Month => Bucket::date(now.day()),
            Grouping::Year => Bucket::Month(MonthBucket::from_number(now.month())),
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

/// Abstract accent color for a score band; the UI maps it to a terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Violet,
    Green,
    Orange,
    Red,
}

impl ColorToken {
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Violet => "violet",
            ColorToken::Green => "green",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::High.next(), Priority::Medium);
        assert_eq!(Priority::Low.next(), Priority::High);
        assert_eq!(Priority::High.prev(), Priority::Low);
        for p in Priority::all() {
            assert_eq!(p.next().prev(), *p);
        }
    }

    #[test]
    fn test_status_flipped() {
        assert_eq!(TaskStatus::Pending.flipped(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.flipped(), TaskStatus::Pending);
        assert!(TaskStatus::Completed.is_completed());
        assert!(!TaskStatus::Pending.is_completed());
    }

    #[test]
    fn test_time_slot_from_hour() {
        assert_eq!(TimeSlot::from_hour(7), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hour(12), TimeSlot::Midday);
        assert_eq!(TimeSlot::from_hour(15), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_hour(21), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_hour(2), TimeSlot::Evening);
    }

    #[test]
    fn test_bucket_order_lengths() {
        assert_eq!(Grouping::Day.bucket_order().len(), 4);
        assert_eq!(Grouping::Week.bucket_order().len(), 7);
        assert_eq!(Grouping::Month.bucket_order().len(), 31);
        assert_eq!(Grouping::Year.bucket_order().len(), 12);
        assert_eq!(Grouping::Week.bucket_order()[0].label(), "Mon");
        assert_eq!(Grouping::Year.bucket_order()[11].label(), "Dec");
        assert_eq!(Grouping::Month.bucket_order()[0], Bucket::Date(1));
        assert_eq!(Grouping::Month.bucket_order()[30].label(), "31");
    }

    #[test]
    fn test_grouping_contains_current_bucket() {
        for grouping in Grouping::all() {
            let current = grouping.current_bucket();
            assert!(grouping.contains(current));
            assert!(grouping.bucket_order().contains(&current));
        }
        assert!(!Grouping::Day.contains(Bucket::Day(Weekday::Mon)));
    }

    #[test]
    fn test_grouping_next_wraps() {
        assert_eq!(Grouping::Day.next(), Grouping::Week);
        assert_eq!(Grouping::Week.next(), Grouping::Month);
        assert_eq!(Grouping::Month.next(), Grouping::Year);
        assert_eq!(Grouping::Year.next(), Grouping::Day);
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(MonthBucket::from_number(1), MonthBucket::Jan);
        assert_eq!(MonthBucket::from_number(12), MonthBucket::Dec);
        assert_eq!(MonthBucket::from_number(0), MonthBucket::Jan);
    }

    #[test]
    fn test_month_grouping_current_date() {
        let current = Grouping::Month.current_bucket();
        assert_eq!(current, Bucket::date(Local::now().day()));
        assert!(Grouping::Month.contains(current));
        assert!(!Grouping::Month.contains(Bucket::Month(MonthBucket::Jan)));
        assert!(!Grouping::Year.contains(current));
    }

    #[test]
    fn test_date_bucket_clamps() {
        assert_eq!(Bucket::date(0), Bucket::Date(1));
        assert_eq!(Bucket::date(40), Bucket::Date(31));
        assert_eq!(Bucket::date(15).label(), "15");
    }
}
