//! Criterion benchmark for the calendar build pipeline.
//!
//! Measures a full build over a quarter's worth of synthetic tasks, the
//! shape a busy tenant produces for the month view.

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planboard_core::{CalendarView, FixedClock};
use planboard_domain::{BuildOptions, DateInput, ProjectType, Task};

fn synthetic_tasks(count: usize) -> Vec<Task> {
    let base = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid base date");

    (0..count)
        .map(|i| {
            let date = base + chrono::Days::new((i % 90) as u64);
            Task {
                id: format!("T-{i}"),
                name: format!("Task {i}"),
                issued_date: Some(DateInput::Text(date.format("%Y-%m-%d").to_string())),
                created_date: None,
                task_category_name: (i % 17 == 0).then(|| "Out of Office".to_string()),
                is_holiday: (i % 23 == 0).then_some(true),
                is_out_of_office: None,
                project_type: Some(if i % 3 == 0 {
                    ProjectType::Commercial
                } else {
                    ProjectType::Residential
                }),
                project_code: Some(format!("PC-{}", i % 40)),
                status: Some("OPEN".to_string()),
            }
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 8, 15).expect("valid today");
    let view = CalendarView::new(Arc::new(FixedClock(today)));
    let tasks = synthetic_tasks(500);
    let options = BuildOptions::default();

    c.bench_function("calendar_build_500_tasks", |b| {
        b.iter(|| view.build(black_box(&tasks), black_box(&options)))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
