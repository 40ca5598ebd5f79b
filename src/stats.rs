use crate::models::{DashboardResponse, Day, DayBar, Habit, HabitSummary, PlannerData};

/// Denominator for the habit summary percentage. The tracker grid is 31
/// columns wide, so the summary divides by the same 31 rather than a
/// month-length guess.
pub const HABIT_TARGET: u32 = 31;

pub fn day_completed(day: &Day) -> usize {
    day.tasks.iter().filter(|t| t.completed).count()
}

/// Fraction of the day's tasks that are done; 0 for an empty day.
pub fn day_ratio(day: &Day) -> f64 {
    if day.tasks.is_empty() {
        return 0.0;
    }
    day_completed(day) as f64 / day.tasks.len() as f64
}

/// Whole-week completion percentage, rounded to the nearest integer.
/// A week with no tasks at all reads as 0, not NaN.
pub fn week_completion_rate(days: &[Day]) -> u32 {
    let total: usize = days.iter().map(|d| d.tasks.len()).sum();
    if total == 0 {
        return 0;
    }
    let done: usize = days.iter().map(day_completed).sum();
    (done as f64 / total as f64 * 100.0).round() as u32
}

/// Chart bar height in percent. Empty days get a 2% placeholder sliver;
/// days with tasks but nothing done get a visible 5% floor.
pub fn bar_height(day: &Day) -> f64 {
    if day.tasks.is_empty() {
        return 2.0;
    }
    let height = day_ratio(day) * 100.0;
    if height == 0.0 { 5.0 } else { height }
}

pub fn habit_checks(habit: &Habit) -> u32 {
    habit.progress.values().filter(|done| **done).count() as u32
}

/// Summary percentage against [`HABIT_TARGET`]. Clamped because stored
/// out-of-range day keys can push the raw count past the denominator.
pub fn habit_percent(habit: &Habit) -> u32 {
    let raw = (habit_checks(habit) as f64 / HABIT_TARGET as f64 * 100.0).round() as u32;
    raw.min(100)
}

pub fn build_dashboard(data: &PlannerData) -> DashboardResponse {
    let total_tasks: usize = data.days.iter().map(|d| d.tasks.len()).sum();
    let completed_tasks: usize = data.days.iter().map(day_completed).sum();

    let day_bars = data
        .days
        .iter()
        .map(|day| DayBar {
            day_id: day.id.clone(),
            name: day.name.clone(),
            done: day_completed(day),
            total: day.tasks.len(),
            percent: (day_ratio(day) * 100.0).round() as u32,
            height: bar_height(day),
        })
        .collect();

    let habits = data
        .habits
        .iter()
        .map(|habit| HabitSummary {
            id: habit.id.clone(),
            name: habit.name.clone(),
            checks: habit_checks(habit),
            target: HABIT_TARGET,
            percent: habit_percent(habit),
        })
        .collect();

    DashboardResponse {
        completion_rate: week_completion_rate(&data.days),
        completed_tasks,
        total_tasks,
        day_bars,
        habits,
    }
}
