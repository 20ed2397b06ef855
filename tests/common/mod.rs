//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use employee_directory::domain::{Department, Employee, EmployeeRequest};
use employee_directory::errors::{AppError, AppResult};
use employee_directory::infra::EmployeeApi;
use employee_directory::services::{NotificationQueue, Services};

/// A call the fake API received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(i64),
    Create(EmployeeRequest),
    Update(i64, EmployeeRequest),
    Delete(i64),
    Search(String),
}

/// In-memory employee API that records every call.
///
/// Queued failures are returned (oldest first) instead of touching the data.
#[derive(Default)]
pub struct FakeApi {
    employees: Mutex<Vec<Employee>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<VecDeque<AppError>>,
}

impl FakeApi {
    pub fn with_employees(employees: Vec<Employee>) -> Arc<Self> {
        Arc::new(Self {
            employees: Mutex::new(employees),
            ..Default::default()
        })
    }

    pub fn fail_next(&self, error: AppError) {
        self.failures.lock().push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().clone()
    }

    fn record(&self, call: Call) -> AppResult<()> {
        self.calls.lock().push(call);
        match self.failures.lock().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> AppError {
        AppError::api(reqwest::StatusCode::NOT_FOUND, None)
    }
}

#[async_trait]
impl EmployeeApi for FakeApi {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.record(Call::List)?;
        Ok(self.employees())
    }

    async fn get(&self, id: i64) -> AppResult<Employee> {
        self.record(Call::Get(id))?;
        self.employees
            .lock()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create(&self, request: EmployeeRequest) -> AppResult<Employee> {
        self.record(Call::Create(request.clone()))?;
        let mut employees = self.employees.lock();
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let employee = Employee {
            id,
            name: request.name,
            email: request.email,
            department: request.department,
            created_at: None,
            updated_at: None,
        };
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee> {
        self.record(Call::Update(id, request.clone()))?;
        let mut employees = self.employees.lock();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(Self::not_found)?;
        employee.name = request.name;
        employee.email = request.email;
        employee.department = request.department;
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.record(Call::Delete(id))?;
        let mut employees = self.employees.lock();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn search_by_name(&self, name: String) -> AppResult<Vec<Employee>> {
        self.record(Call::Search(name.clone()))?;
        Ok(self
            .employees()
            .into_iter()
            .filter(|e| e.name.contains(&name))
            .collect())
    }
}

/// Forwards to a shared [`FakeApi`] so tests keep a handle on it.
pub struct SharedApi(pub Arc<FakeApi>);

#[async_trait]
impl EmployeeApi for SharedApi {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.0.list().await
    }

    async fn get(&self, id: i64) -> AppResult<Employee> {
        self.0.get(id).await
    }

    async fn create(&self, request: EmployeeRequest) -> AppResult<Employee> {
        self.0.create(request).await
    }

    async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee> {
        self.0.update(id, request).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.0.delete(id).await
    }

    async fn search_by_name(&self, name: String) -> AppResult<Vec<Employee>> {
        self.0.search_by_name(name).await
    }
}

pub fn employee(id: i64, name: &str, department: Department) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        department,
        created_at: None,
        updated_at: None,
    }
}

pub fn roster() -> Vec<Employee> {
    vec![
        employee(1, "Ada Lovelace", Department::It),
        employee(2, "Grace Hopper", Department::Operations),
        employee(3, "Alan Turing", Department::Finance),
    ]
}

/// Composition root over a fake API, with error reporting in place
pub fn services(api: &Arc<FakeApi>) -> (Services, Arc<NotificationQueue>) {
    let queue = Arc::new(NotificationQueue::default());
    (Services::new(SharedApi(api.clone()), queue.clone()), queue)
}
