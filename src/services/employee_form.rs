//! Employee form controller - Create and edit a single employee.
//!
//! The mode is fixed when the controller is built: a route without an ID
//! (or with `new`) creates, a numeric ID edits. Field rules run locally and
//! nothing is sent until all of them pass.

use std::sync::Arc;

use validator::Validate;

use super::Notifier;
use crate::config::NEW_EMPLOYEE_ROUTE_ID;
use crate::domain::{Department, Employee, EmployeeRequest, Route};
use crate::errors::{AppError, AppResult};
use crate::infra::EmployeeApi;

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_DEPARTMENT_REQUIRED: &str = "Department is required";

/// Whether the form creates a new employee or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Decide the mode from the route's ID segment.
    pub fn from_route_id(id: Option<&str>) -> AppResult<Self> {
        match id.map(str::trim) {
            None | Some("") | Some(NEW_EMPLOYEE_ROUTE_ID) => Ok(FormMode::Create),
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|id| *id > 0)
                .map(FormMode::Edit)
                .ok_or_else(|| AppError::invalid_input(format!("Invalid employee id: {}", raw))),
        }
    }

    pub fn employee_id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Department,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Department];

    fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Department => "department",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Current field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub department: Option<Department>,
}

impl From<&Employee> for FormValues {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: Some(employee.department),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct FieldState {
    touched: bool,
    dirty: bool,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request is already in flight
    Busy,
    /// Validation failed; every field is now touched and nothing was sent
    Invalid,
    /// The server accepted the record
    Saved { employee: Employee, next: Route },
}

pub struct EmployeeFormController {
    api: Arc<dyn EmployeeApi>,
    notifier: Arc<dyn Notifier>,
    mode: FormMode,
    values: FormValues,
    original: FormValues,
    fields: [FieldState; 3],
    loading: bool,
}

impl EmployeeFormController {
    pub fn new(api: Arc<dyn EmployeeApi>, notifier: Arc<dyn Notifier>, mode: FormMode) -> Self {
        Self {
            api,
            notifier,
            mode,
            values: FormValues::default(),
            original: FormValues::default(),
            fields: [FieldState::default(); 3],
            loading: false,
        }
    }

    /// Build the controller for a route ID and load the record in edit mode.
    ///
    /// Returns the controller and, when the record could not be loaded, the
    /// route to navigate to instead.
    pub async fn open(
        api: Arc<dyn EmployeeApi>,
        notifier: Arc<dyn Notifier>,
        route_id: Option<&str>,
    ) -> AppResult<(Self, Option<Route>)> {
        let mode = FormMode::from_route_id(route_id)?;
        let mut form = Self::new(api, notifier, mode);
        let redirect = form.load().await;
        Ok((form, redirect))
    }

    /// Fetch the bound employee and populate the form.
    ///
    /// Does nothing in create mode. On failure the error has already been
    /// reported; the list route is returned.
    pub async fn load(&mut self) -> Option<Route> {
        let FormMode::Edit(id) = self.mode else {
            return None;
        };

        self.loading = true;
        let result = self.api.get(id).await;
        self.loading = false;

        match result {
            Ok(employee) => {
                tracing::debug!(id, "Employee loaded into form");
                self.values = FormValues::from(&employee);
                self.original = self.values.clone();
                None
            }
            Err(err) => {
                tracing::debug!(id, error = %err, "Employee could not be loaded");
                Some(Route::List)
            }
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Save",
            FormMode::Edit(_) => "Update",
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        self.fields[Field::Name.index()].dirty = true;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
        self.fields[Field::Email.index()].dirty = true;
    }

    pub fn set_department(&mut self, department: Option<Department>) {
        self.values.department = department;
        self.fields[Field::Department.index()].dirty = true;
    }

    /// Mark a field as visited
    pub fn touch(&mut self, field: Field) {
        self.fields[field.index()].touched = true;
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.fields[field.index()].touched
    }

    /// Every rule violation of a field, whether visible or not
    pub fn errors(&self, field: Field) -> Vec<String> {
        match field {
            Field::Name if self.values.name.is_empty() => vec![MSG_NAME_REQUIRED.to_string()],
            Field::Email if self.values.email.is_empty() => {
                vec![MSG_EMAIL_REQUIRED.to_string()]
            }
            Field::Department => match self.values.department {
                Some(_) => Vec::new(),
                None => vec![MSG_DEPARTMENT_REQUIRED.to_string()],
            },
            Field::Name | Field::Email => self.rule_errors(field),
        }
    }

    /// Errors to display: only once the field was touched or edited
    pub fn visible_errors(&self, field: Field) -> Vec<String> {
        let state = self.fields[field.index()];
        if state.touched || state.dirty {
            self.errors(field)
        } else {
            Vec::new()
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.errors(*field).is_empty())
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && self.is_valid()
    }

    /// Validate and send the form.
    ///
    /// A failed request is returned as is after the busy flag is cleared;
    /// the user has already been notified of it.
    pub async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        if self.loading {
            return Ok(SubmitOutcome::Busy);
        }

        let Some(request) = self.request() else {
            for field in Field::ALL {
                self.touch(field);
            }
            return Ok(SubmitOutcome::Invalid);
        };

        self.loading = true;
        let result = match self.mode {
            FormMode::Create => self.api.create(request).await,
            FormMode::Edit(id) => self.api.update(id, request).await,
        };
        self.loading = false;

        let employee = result?;
        let message = match self.mode {
            FormMode::Create => "Employee created successfully",
            FormMode::Edit(_) => "Employee updated successfully",
        };
        tracing::info!(id = employee.id, "{}", message);
        self.notifier.success(message);

        Ok(SubmitOutcome::Saved {
            employee,
            next: Route::List,
        })
    }

    /// Restore the loaded values (edit) or clear the form (create).
    pub fn reset(&mut self) {
        self.values = match self.mode {
            FormMode::Create => FormValues::default(),
            FormMode::Edit(_) => self.original.clone(),
        };
        self.fields = [FieldState::default(); 3];
    }

    /// The request body, if every rule passes
    fn request(&self) -> Option<EmployeeRequest> {
        if !self.is_valid() {
            return None;
        }
        let department = self.values.department?;
        Some(EmployeeRequest::new(
            self.values.name.clone(),
            self.values.email.clone(),
            department,
        ))
    }

    fn rule_errors(&self, field: Field) -> Vec<String> {
        // Department does not take part in these rules
        let probe = EmployeeRequest::new(
            self.values.name.clone(),
            self.values.email.clone(),
            self.values.department.unwrap_or(Department::Hr),
        );
        let Err(errors) = probe.validate() else {
            return Vec::new();
        };

        let mut messages: Vec<String> = Vec::new();
        if let Some(field_errors) = errors.field_errors().get(field.key()) {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field.key()));
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }
        messages
    }
}
