//! Infrastructure concerns shared by the service layer.

pub mod locking;
