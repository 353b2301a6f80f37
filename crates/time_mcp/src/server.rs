use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::{
    error::{McpResult, TimeServerError},
    models::{GetCurrentTimeRequest, IsoStyle},
    provider::TimeProvider,
};

/// Argentina Time MCP Server
#[derive(Clone)]
pub struct TimeService {
    provider: TimeProvider,
    tool_router: ToolRouter<TimeService>,
    prompt_router: PromptRouter<TimeService>,
}

impl TimeService {
    pub fn new(provider: TimeProvider) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn generate_status_content(&self) -> String {
        let defaults = self.provider.defaults();
        let current = self.provider.current_time(&self.provider.default_request());

        format!(
            r#"Argentina Time MCP Server Status

Server: Running
Host Timezone: {}
Default Timezone: {}
Default Format: {:?}
ISO Style: {:?}
{}
Tools Available: 1
Prompts Available: 1
Resources Available: 2"#,
            self.provider.local_timezone,
            defaults.timezone,
            defaults.format,
            self.provider.formatter().iso_style(),
            current.text,
        )
    }

    fn generate_help_content(&self) -> String {
        let defaults = self.provider.defaults();
        format!(
            r#"Argentina Time MCP Server Help

TOOLS:
- get_current_time: Get the current date and time for any location
  - format: iso, locale or timestamp (optional, default: {:?})
  - timezone: IANA timezone name or UTC (optional, default: {})
  - Example: {{"format": "iso", "timezone": "America/New_York"}}

PROMPTS:
- time_formats: Description of every output format

RESOURCES:
- time://status: Current server status and default time
- time://help: This help documentation

OUTPUT:
Successful calls answer "Current time in <location>: <time>". Any zone under
America/Argentina is reported as "Argentina", other zones by their city."#,
            defaults.format, defaults.timezone
        )
    }
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new(TimeProvider::default())
    }
}

#[tool_router]
impl TimeService {
    #[tool(description = "Get the current date and time for any location")]
    pub(crate) async fn get_current_time(
        &self,
        Parameters(req): Parameters<GetCurrentTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let request = self.provider.request(req.format, req.timezone);
        tracing::debug!(?request, "get_current_time");

        Ok(self.provider.current_time(&request).into())
    }
}

#[prompt_router]
impl TimeService {
    /// Explain the output formats of get_current_time
    #[prompt(name = "time_formats")]
    async fn time_formats(
        &self,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<Vec<PromptMessage>> {
        let iso_note = match self.provider.formatter().iso_style() {
            IsoStyle::WallClock => {
                "For zones other than UTC the local wall-clock time is shown with a trailing 'Z'; it is not a UTC instant"
            }
            IsoStyle::OffsetAware => "Zones other than UTC carry their UTC offset, e.g. '-03:00'",
        };

        let guidance = format!(
            r#"get_current_time output formats:

1. **locale** (default)
   - Argentine Spanish long form: weekday, day, month name, year, 12-hour time and zone
   - Example: 'viernes, 16 de octubre de 2026, 02:04:05 p. m. -03'

2. **iso**
   - ISO 8601, e.g. '2026-10-16T17:04:05.123Z' for UTC
   - {}

3. **timestamp**
   - Milliseconds since 1970-01-01T00:00:00Z, e.g. '1792170245123'

Any other format value yields numeric 'dd/mm/yyyy, HH:MM:SS zone' output.
Timezones are IANA names such as 'America/Argentina/Buenos_Aires' or 'UTC'."#,
            iso_note
        );

        Ok(vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(guidance),
        }])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for TimeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Time MCP Server. Tool: get_current_time (format: iso, locale or timestamp; timezone: IANA name). Default timezone: {}.",
                self.provider.defaults().timezone
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("time://status", "server-status"),
                self.create_resource_text("time://help", "help-documentation"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        let text = match uri.as_str() {
            "time://status" => self.generate_status_content(),
            "time://help" => self.generate_help_content(),
            _ => {
                return Err(TimeServerError::ResourceNotFound {
                    uri: uri.to_string(),
                }
                .into());
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Argentina Time MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(provider: TimeProvider) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let service = TimeService::new(provider)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    tracing::info!("Time MCP server running on stdio");
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::{ProtocolVersion, RawContent};

    use crate::core::models::{GetCurrentTimeRequest, TimeFormat};
    use crate::server::TimeService;

    fn text_of(result: &rmcp::model::CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_current_time_defaults() {
        let service = TimeService::default();

        let result = service
            .get_current_time(Parameters(GetCurrentTimeRequest::default()))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Current time in Argentina: "));
    }

    #[tokio::test]
    async fn test_get_current_time_new_york() {
        let service = TimeService::default();
        let req = GetCurrentTimeRequest {
            format: Some(TimeFormat::Timestamp),
            timezone: Some("America/New_York".to_string()),
        };

        let result = service.get_current_time(Parameters(req)).await.unwrap();
        let text = text_of(&result);

        let millis = text.strip_prefix("Current time in New York: ").unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_get_current_time_invalid_timezone() {
        let service = TimeService::default();
        let req = GetCurrentTimeRequest {
            format: Some(TimeFormat::Iso),
            timezone: Some("Not/ARealZone".to_string()),
        };

        // Reported as a tool error, not a protocol error
        let result = service.get_current_time(Parameters(req)).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Error"));
    }

    #[test]
    fn test_service_creation() {
        use rmcp::ServerHandler;

        let service = TimeService::default();
        let info = service.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(
            info.instructions
                .unwrap()
                .contains("America/Argentina/Buenos_Aires")
        );
    }

    #[test]
    fn test_routers_have_routes() {
        let tools = TimeService::tool_router();
        assert!(tools.has_route("get_current_time"));

        let prompts = TimeService::prompt_router();
        assert!(prompts.has_route("time_formats"));
        assert_eq!(prompts.list_all().len(), 1);
    }

    #[test]
    fn test_status_and_help_content() {
        let service = TimeService::default();

        let status = service.generate_status_content();
        assert!(status.contains("Default Timezone: America/Argentina/Buenos_Aires"));
        assert!(status.contains("Current time in Argentina"));

        let help = service.generate_help_content();
        assert!(help.contains("get_current_time"));
    }
}
