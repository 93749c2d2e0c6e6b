use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("first name is empty")]
    EmptyFirstName,
    #[error("last name is empty")]
    EmptyLastName,
    #[error("domain is empty")]
    EmptyDomain,
}
