pub mod launch_error;
pub mod precondition_error;
