pub mod av;
pub mod av_dto;
pub mod error;
pub mod utils;

pub use error::ApiError;
