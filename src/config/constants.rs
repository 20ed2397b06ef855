//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Remote API
// =============================================================================

/// Default base URL of the employee REST API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Path segment of the employee resource below the base URL
pub const EMPLOYEES_RESOURCE: &str = "employees";

/// Path segment of the search-by-name endpoint below the employee resource
pub const SEARCH_BY_NAME_SEGMENT: &str = "searchByName";

// =============================================================================
// Notifications
// =============================================================================

/// How long a notification stays visible, in milliseconds
pub const DEFAULT_NOTIFICATION_LIFE_MS: u64 = 5000;

/// Maximum number of notifications held at once (oldest dropped first)
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 32;

// =============================================================================
// Validation
// =============================================================================

/// Employee names are letters and spaces only
pub const NAME_PATTERN: &str = r"^[a-zA-Z ]+$";

/// Explicit email shape, checked in addition to the general email rule
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// =============================================================================
// Routes
// =============================================================================

/// Route segment used for a form that has no employee bound yet
pub const NEW_EMPLOYEE_ROUTE_ID: &str = "new";
