use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::week::{day_month_label, week_dates};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// Weekday slot id, one of "mon".."sun". Stable across anchor changes.
    pub id: String,
    pub name: String,
    /// Display date, e.g. "24 ноября". Recomputed whenever the anchor moves.
    pub date: String,
    pub day_num: u32,
    pub color: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Sparse day-of-month -> done map; an absent key reads as not done.
    pub progress: BTreeMap<u32, bool>,
}

/// The whole in-memory model. One value of this lives behind the app state
/// mutex for the lifetime of the process; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerData {
    pub owner: String,
    pub anchor: NaiveDate,
    pub days: Vec<Day>,
    pub habits: Vec<Habit>,
}

impl PlannerData {
    /// Builds the seed state: the fixed 7-day template plus the starter
    /// habits, with display dates aligned to the week containing `anchor`.
    pub fn seeded(anchor: NaiveDate) -> Self {
        let mut data = Self {
            owner: "Моники".to_string(),
            anchor,
            days: day_template(),
            habits: habit_seed(),
        };
        data.set_week_anchor(anchor);
        data
    }

    /// Flips the completed flag of `(day_id, task_id)`. Unknown ids are a
    /// silent no-op; every mutation here follows that rule.
    pub fn toggle_task(&mut self, day_id: &str, task_id: &str) {
        let Some(day) = self.day_mut(day_id) else {
            return;
        };
        if let Some(task) = day.tasks.iter_mut().find(|t| t.id == task_id) {
            task.completed = !task.completed;
        }
    }

    /// Appends a task to the named day. Whitespace-only text is rejected
    /// before any mutation. Returns the new task so callers can learn its id.
    pub fn add_task(&mut self, day_id: &str, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let day = self.day_mut(day_id)?;
        day.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
        });
        day.tasks.last()
    }

    pub fn delete_task(&mut self, day_id: &str, task_id: &str) {
        if let Some(day) = self.day_mut(day_id) {
            day.tasks.retain(|t| t.id != task_id);
        }
    }

    /// Re-anchors the week: finds the Monday of the week containing `date`
    /// and rewrites each day's display date positionally (index 0 = Monday).
    /// Task lists, names and colors stay put.
    pub fn set_week_anchor(&mut self, date: NaiveDate) {
        self.anchor = date;
        for (day, date) in self.days.iter_mut().zip(week_dates(date)) {
            day.date = day_month_label(date);
            day.day_num = date.day();
        }
    }

    /// Flips one cell of a habit's month grid, treating a missing entry as
    /// not-done. Day keys outside 1..=31 are stored as-is; the 31-column
    /// grid just never shows them.
    pub fn toggle_habit(&mut self, habit_id: &str, day: u32) {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) else {
            return;
        };
        let cell = habit.progress.entry(day).or_insert(false);
        *cell = !*cell;
    }

    pub fn add_habit(&mut self, name: &str) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.habits.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            progress: BTreeMap::new(),
        });
        self.habits.last()
    }

    pub fn delete_habit(&mut self, habit_id: &str) {
        self.habits.retain(|h| h.id != habit_id);
    }

    /// Owner name is display-only and deliberately unvalidated.
    pub fn set_owner(&mut self, name: &str) {
        self.owner = name.to_string();
    }

    fn day_mut(&mut self, day_id: &str) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.id == day_id)
    }
}

fn day(id: &str, name: &str, color: &str, tasks: Vec<Task>) -> Day {
    Day {
        id: id.to_string(),
        name: name.to_string(),
        date: String::new(),
        day_num: 0,
        color: color.to_string(),
        tasks,
    }
}

fn task(id: &str, text: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

fn day_template() -> Vec<Day> {
    vec![
        day(
            "mon",
            "Понедельник",
            "gray",
            vec![
                task("1", "Стратегическая сессия", true),
                task("2", "Анализ метрик", false),
            ],
        ),
        day("tue", "Вторник", "gray", Vec::new()),
        day("wed", "Среда", "gray", Vec::new()),
        day("thu", "Четверг", "gray", Vec::new()),
        day("fri", "Пятница", "gray", Vec::new()),
        day(
            "sat",
            "Суббота",
            "red",
            vec![task("3", "Ресторан \"Облака\"", false)],
        ),
        day("sun", "Воскресенье", "red", Vec::new()),
    ]
}

fn habit_seed() -> Vec<Habit> {
    fn habit(id: &str, name: &str, first_five: [bool; 5]) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            progress: (1u32..=5).zip(first_five).collect(),
        }
    }

    vec![
        habit("h1", "Гидратация (2л)", [true, true, false, true, true]),
        habit("h2", "Глубокое чтение", [true, false, true, true, false]),
        habit("h3", "Медитация", [false, true, true, true, true]),
        habit("h4", "Дофаминовый детокс", [true, true, true, true, true]),
    ]
}

#[derive(Debug, Deserialize)]
pub struct TaskRef {
    pub day_id: String,
    pub task_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub day_id: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnchorRequest {
    /// ISO date, "YYYY-MM-DD".
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitCellRequest {
    pub habit_id: String,
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitRef {
    pub habit_id: String,
}

#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DayBar {
    pub day_id: String,
    pub name: String,
    pub done: usize,
    pub total: usize,
    pub percent: u32,
    /// Bar height in percent of the chart area, with display floors for
    /// empty and zero-progress days.
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub checks: u32,
    pub target: u32,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub completion_rate: u32,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub day_bars: Vec<DayBar>,
    pub habits: Vec<HabitSummary>,
}
