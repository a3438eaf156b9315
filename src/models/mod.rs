mod outcome;

pub use outcome::{NO_FILE_MESSAGE, Outcome, Status};
