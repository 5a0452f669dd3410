//! Owned application stores updated through tagged actions.

pub mod images;

pub use images::{IMAGES_ERROR_DEFAULT, ImageAction, ImagesState, reduce, request_images};
