//! Value records stored in the sample containers.

mod book;
mod student;

pub use book::Book;
pub use student::Student;
