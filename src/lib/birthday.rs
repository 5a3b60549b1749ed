//! Birthday congratulations for a Bitrix24 portal: find who has a birthday
//! today, mention them in one feed post and attach the next image from a
//! shared disk folder.
pub mod config;
pub mod error;
pub mod helpers;
pub mod image_index;
pub mod models;
pub mod remote_api;
pub mod run_tool;
pub mod service;
