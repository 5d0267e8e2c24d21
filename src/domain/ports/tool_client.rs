use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A remote tool advertised by the tool service.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: Option<String>,
}

/// Errors a remote tool invocation can surface.
///
/// Display output is the bare cause; the tool facade prepends the failing
/// operation ("Search failed: ...") when it renders these into result
/// mappings.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Transport-level failure reaching the tool service.
    #[error("{0}")]
    Connection(String),

    /// The service answered with a protocol-level error.
    #[error("{0}")]
    Rpc(String),

    /// The tool ran and reported failure.
    #[error("{0}")]
    Execution(String),

    /// The response arrived but could not be interpreted.
    #[error("malformed tool response: {0}")]
    Malformed(String),
}

/// Port trait for the remote tool-invocation session.
///
/// Tools are named and schema-less: arguments go out as an opaque JSON
/// mapping and the result comes back as the tool's textual payload, which
/// callers parse themselves. Implementations share one underlying session
/// across concurrent calls.
#[async_trait]
pub trait ToolClient: Send + Sync {
    /// Invoke a named tool and return its textual payload.
    async fn call_tool(&self, tool: &str, arguments: Value) -> Result<String, ToolError>;

    /// Enumerate the tools the remote service advertises.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ToolError>;
}
