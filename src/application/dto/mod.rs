/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod webindex_request;
mod webindex_response;

pub use webindex_request::WebindexRequest;
pub use webindex_response::WebindexResponse;
