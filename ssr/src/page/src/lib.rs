pub mod ask;
pub mod err;
pub mod upload;
