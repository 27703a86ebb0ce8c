//! Application services: use-case orchestration.
//!
//! Each service module implements a single step by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.
//!
//! Every step takes a [`SupportedPlatform`](crate::domain::SupportedPlatform)
//! token, so none of them can run before the platform guard has passed.

pub mod deploy;
pub mod directories;
pub mod environment;
pub mod provision;
pub mod root;
