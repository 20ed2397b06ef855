//! Plain-text rendering of employees, forms and notifications.

use chrono::NaiveDateTime;

use crate::domain::{Department, Employee};
use crate::services::{
    EmployeeFormController, EmployeeListController, Field, Notification, EMPTY_LIST_TEXT,
    LOADING_TEXT,
};

/// Medium date, e.g. `Jan 5, 2024`
pub fn medium_date(ts: &NaiveDateTime) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Department badge, e.g. `[FINANCE]`
pub fn badge(department: Department) -> String {
    format!("[{}]", department.code())
}

pub fn employee_card(employee: &Employee) -> String {
    let mut lines = vec![
        format!("#{} {} {}", employee.id, employee.name, badge(employee.department)),
        format!("    Email: {}", employee.email),
    ];
    if let Some(created) = &employee.created_at {
        lines.push(format!("    Added: {}", medium_date(created)));
    }
    lines.join("\n")
}

/// The list screen: loading text, empty state, or one card per visible employee
pub fn employee_list(list: &EmployeeListController) -> String {
    if list.is_loading() {
        return LOADING_TEXT.to_string();
    }
    if list.is_empty() {
        return EMPTY_LIST_TEXT.to_string();
    }

    let mut blocks: Vec<String> = list.filtered().iter().map(employee_card).collect();
    if !list.search_term().trim().is_empty() {
        blocks.push(format!(
            "Showing {} of {} employees matching \"{}\"",
            list.filtered().len(),
            list.employees().len(),
            list.search_term()
        ));
    }
    blocks.join("\n\n")
}

/// Visible field errors, one `field: message` line each
pub fn form_errors(form: &EmployeeFormController) -> Vec<String> {
    Field::ALL
        .iter()
        .flat_map(|field| {
            let label = match field {
                Field::Name => "Name",
                Field::Email => "Email",
                Field::Department => "Department",
            };
            form.visible_errors(*field)
                .into_iter()
                .map(move |message| format!("{}: {}", label, message))
        })
        .collect()
}

pub fn notification(note: &Notification) -> String {
    format!(
        "[{}] {}: {}",
        note.severity.as_str().to_uppercase(),
        note.title,
        note.message
    )
}
