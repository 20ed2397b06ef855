//! Navigation targets of the administration front end.

use crate::config::{EMPLOYEES_RESOURCE, NEW_EMPLOYEE_ROUTE_ID};

/// A screen the client can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Employee list (the home screen)
    List,
    /// Form in create mode
    New,
    /// Form in edit mode for one employee
    Edit(i64),
}

impl Route {
    /// Path of the route, e.g. `/employees/edit/7`
    pub fn path(&self) -> String {
        match self {
            Route::List => format!("/{}", EMPLOYEES_RESOURCE),
            Route::New => format!("/{}/{}", EMPLOYEES_RESOURCE, NEW_EMPLOYEE_ROUTE_ID),
            Route::Edit(id) => format!("/{}/edit/{}", EMPLOYEES_RESOURCE, id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
