//! Task fixtures for integration tests.

use planboard_domain::{DateInput, ProjectType, Task};

/// Bare task with no date and no flags.
pub fn undated(id: &str, name: &str) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        issued_date: None,
        created_date: None,
        task_category_name: None,
        is_holiday: None,
        is_out_of_office: None,
        project_type: None,
        project_code: None,
        status: None,
    }
}

/// Ordinary task issued on the given `YYYY-MM-DD` date.
pub fn dated(id: &str, name: &str, raw_date: &str) -> Task {
    let mut task = undated(id, name);
    task.issued_date = Some(DateInput::Text(raw_date.to_string()));
    task
}

/// Holiday task on the given date.
pub fn holiday(id: &str, name: &str, raw_date: &str) -> Task {
    let mut task = dated(id, name, raw_date);
    task.is_holiday = Some(true);
    task
}

/// Out-of-office task on the given date (explicit flag).
pub fn out_of_office(id: &str, name: &str, raw_date: &str) -> Task {
    let mut task = dated(id, name, raw_date);
    task.is_out_of_office = Some(true);
    task
}

/// Attach a project classification and code.
pub fn with_project(mut task: Task, project_type: ProjectType, code: &str) -> Task {
    task.project_type = Some(project_type);
    task.project_code = Some(code.to_string());
    task
}
