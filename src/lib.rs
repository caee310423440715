//! Capability traits and their variants: shapes, authentication, notifications,
//! plus the employee record they were taught alongside.

pub mod auth;
pub mod config;
pub mod demo;
pub mod error;
pub mod notifications;
pub mod shapes;
pub mod staff;
pub mod telemetry;

pub use auth::{AuthenticationService, BasicAuthenticationService, Credentials};
pub use error::AppError;
pub use notifications::{
    ChannelNotificationService, InMemorySink, NotificationChannel, NotificationService,
    NotificationSink, StdoutSink, UnknownChannel,
};
pub use shapes::{Circle, Rectangle, Shape, ShapeError, ShapeSpec, ShapeSummary};
pub use staff::{Employee, EmployeeView, Gender, HireDate, SecurityPrivileges, StaffError};
