//! Network layer: REST calls to the platform API and resumable uploads
//! to the object-storage service.
//!
//! DESIGN
//! ======
//! `http` owns the request pipeline (base address, token header, 401
//! interception); `api` is the endpoint catalogue over it; `upload`
//! speaks directly to the storage service using pre-authorized upload
//! URLs and therefore bypasses the token header.

pub mod api;
pub mod http;
pub mod types;
pub mod upload;
