//! Engine API proxy
//!
//! ```text
//! client → router → engine client → engine
//!                 ← response operation (list/inspect rewrite) ←
//! ```

pub mod engine;
pub mod response;
pub mod routes;
pub mod server;

pub use engine::{EngineClient, USER_HEADER};
pub use response::{ACCESS_DENIED_MESSAGE, ProxyResponse};
pub use routes::{ResponseOperation, ResponseRoutes};
pub use server::{ApiError, ProxyState, build_router, run_server};
