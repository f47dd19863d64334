//! MCP method dispatch.
//!
//! Maps JSON-RPC method names onto a closed enum so the server matches on
//! variants instead of strings.
//!
//! ```text
//! McpMethod (enum)
//!   ├── Initialize
//!   ├── ListTools
//!   ├── CallTool
//!   ├── Ping
//!   ├── Notification(String)
//!   └── Unknown(String)
//! ```

use std::fmt;

/// Prefix shared by all client notifications.
const NOTIFICATION_PREFIX: &str = "notifications/";

/// MCP method identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum McpMethod {
    /// Initialize the MCP session.
    Initialize,
    /// List available tools.
    ListTools,
    /// Call a specific tool.
    CallTool,
    /// Ping the server (health check).
    Ping,
    /// A client notification such as `notifications/initialized`.
    Notification(String),
    /// Unknown method (for error handling).
    Unknown(String),
}

impl McpMethod {
    /// Returns the MCP protocol method name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Initialize => "initialize",
            Self::ListTools => "tools/list",
            Self::CallTool => "tools/call",
            Self::Ping => "ping",
            Self::Notification(s) | Self::Unknown(s) => s.as_str(),
        }
    }

    /// Returns true if this is a known request method.
    #[must_use]
    #[allow(dead_code)] // Useful for introspection and testing
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Returns all known request methods.
    #[must_use]
    #[allow(dead_code)] // Useful for introspection and testing
    pub const fn known_methods() -> &'static [Self] {
        &[Self::Initialize, Self::ListTools, Self::CallTool, Self::Ping]
    }
}

impl From<&str> for McpMethod {
    fn from(s: &str) -> Self {
        match s {
            "initialize" => Self::Initialize,
            "tools/list" => Self::ListTools,
            "tools/call" => Self::CallTool,
            "ping" => Self::Ping,
            n if n.starts_with(NOTIFICATION_PREFIX) => Self::Notification(n.to_string()),
            unknown => Self::Unknown(unknown.to_string()),
        }
    }
}

impl fmt::Display for McpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
