use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route candidate index {0} is out of range")]
    OutOfRange(usize),
    #[error("Route candidate {0} was committed before being selected")]
    NotSelected(usize),
    #[error("No usable routes from directions provider: {0}")]
    Unavailable(String),
}
