pub mod batch;
pub mod verify;
