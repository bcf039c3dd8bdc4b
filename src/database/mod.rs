//! Database probe subsystem.
//!
//! # Data Flow
//! ```text
//! Each attempt:
//!     ConnectionTarget → probe.rs (open fresh MySQL connection)
//!     → select count(*) from employees
//!     → close connection → count
//! ```
//!
//! # Design Decisions
//! - No pool: every attempt connects from scratch and closes afterwards
//! - Connect has a deadline; the query itself does not
//! - Errors are typed but the retry controller treats them all alike

pub mod error;
pub mod probe;

pub use error::DatabaseError;
pub use probe::{connect_options, EmployeeProbe, EMPLOYEE_COUNT_QUERY};
