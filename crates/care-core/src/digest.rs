//! Plain-text day plan, for terminals and the clipboard.

use std::fmt::Write;

use crate::schedule::{DueTask, PlanReminder, TodayPlan};

const RULE: &str = "----------------";

pub fn render_digest(plan: &TodayPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Garden plan for {}", plan.date.format("%d.%m"));
    let _ = writeln!(out, "{}", RULE);

    for task in &plan.tasks {
        write_task(&mut out, task);
    }

    if !plan.reminders.is_empty() {
        let _ = writeln!(out, "Plan this month:");
        for reminder in &plan.reminders {
            write_reminder(&mut out, reminder);
        }
        let _ = writeln!(out, "{}", RULE);
    }

    if plan.is_rest_day() {
        let _ = write!(out, "Rest day: nothing to water.");
    } else {
        let _ = write!(out, "Total to water: {}", plan.tasks.len());
    }
    out
}

fn write_task(out: &mut String, task: &DueTask) {
    let _ = writeln!(out, "* {}", task.name.to_uppercase());

    let mut line = String::from("  Water");
    if task.actions.feed {
        match &task.feed_note {
            Some(note) => {
                let _ = write!(line, " + feed: {}", note);
            }
            None => line.push_str(" + feed"),
        }
    }
    let _ = writeln!(out, "{}", line);

    let notes = task
        .stage_hint
        .iter()
        .chain(task.warning.iter())
        .chain(task.advisories.iter());
    for note in notes {
        let _ = writeln!(out, "  - {}", note);
    }
    let _ = writeln!(out, "{}", RULE);
}

fn write_reminder(out: &mut String, reminder: &PlanReminder) {
    let actions: Vec<&str> = [(reminder.prune, "prune"), (reminder.repot, "repot")]
        .into_iter()
        .filter_map(|(due, label)| due.then_some(label))
        .collect();
    let _ = write!(out, "  * {}: {}", reminder.name, actions.join(", "));
    if let Some(note) = &reminder.note {
        let _ = write!(out, " ({})", note);
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlantRecord;
    use crate::schedule::Scheduler;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_rest_day() {
        let plan = Scheduler::default().plan_for(&[PlantRecord::new("c", "Cactus", 21)], date(3, 10));
        let text = render_digest(&plan);

        assert!(text.starts_with("Garden plan for 10.03\n"));
        assert!(text.ends_with("Rest day: nothing to water."));
    }

    #[test]
    fn test_task_block() {
        let mut citrus = PlantRecord::new("citrus-group", "Lemons", 1);
        citrus.category = Some("fruit".to_string());
        citrus.feed_months = [0].into_iter().collect();
        citrus.feed_note = Some("N formula".to_string());
        citrus.warning = Some("Low humidity".to_string());

        let plan = Scheduler::default().plan_for(&[citrus], date(1, 15));
        let text = render_digest(&plan);

        assert!(text.contains("* LEMONS\n  Water + feed: N formula\n"));
        assert!(text.contains("  - Low humidity\n"));
        assert!(text.contains("  - Heating dries the air"));
        assert!(text.ends_with("Total to water: 1"));
    }

    #[test]
    fn test_reminder_lines() {
        let mut seedlings = PlantRecord::new("cactus-seeds", "Seedlings", 3);
        seedlings.prune_months = [2].into_iter().collect();
        seedlings.repot_months = [2].into_iter().collect();
        seedlings.repot_note = Some("Prick out".to_string());

        let plan = Scheduler::default().plan_for(&[seedlings], date(3, 2));
        let text = render_digest(&plan);

        assert!(text.contains("Plan this month:\n  * Seedlings: prune, repot (Prick out)\n"));
        assert!(text.ends_with("Rest day: nothing to water."));
    }
}
