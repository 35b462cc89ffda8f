pub mod form;
pub mod submission;

pub use submission::{Submission, Ticket};
