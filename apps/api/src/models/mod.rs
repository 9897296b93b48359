pub mod job;
pub mod notification;
pub mod user;

pub use job::{ApplicationForm, Job, JobCard, JobForm};
pub use notification::{Notification, NotificationId, Severity};
pub use user::{Portfolio, Role, User};
