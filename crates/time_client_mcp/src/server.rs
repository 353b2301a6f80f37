use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use rmcp::{ServiceExt, transport::stdio};

use crate::service::RemoteTimeService;

#[derive(Clone)]
pub struct TimeClientServer {
    tool_router: ToolRouter<TimeClientServer>,
    service: RemoteTimeService,
}

impl TimeClientServer {
    pub fn new(service: RemoteTimeService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service,
        }
    }
}

#[tool_router]
impl TimeClientServer {
    #[tool(description = "Get the current time in Argentina")]
    async fn get_argentina_time(&self) -> Result<CallToolResult, McpError> {
        match self.service.fetch_time().await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::warn!("remote time lookup failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error getting Argentina time: {}",
                    e
                ))]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for TimeClientServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Argentina time client. Tool: get_argentina_time (no arguments), relayed from {}.",
                self.service.url()
            )),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        tracing::info!("Argentina Time MCP client initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(service: RemoteTimeService) -> Result<(), Box<dyn std::error::Error>> {
    let server = TimeClientServer::new(service);

    let server = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    tracing::info!("Argentina Time MCP client running");
    server.waiting().await?;

    Ok(())
}
