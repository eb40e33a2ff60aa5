//! MCP boundary: tool registration, schemas and error mapping.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use serde_json::json;

use crate::tools::{self, GetPhotoArgs, RandomPhotoArgs, SearchPhotosArgs};
use crate::unsplash::{self, Client};

pub const SERVER_NAME: &str = "unsplash-mcp-server";

const INSTRUCTIONS: &str = "Unsplash photo tools. Use search_photos to find photos by keyword, \
get_photo for the full details of one photo by ID, and random_photo for one or more random \
photos. Results are plain text with photo IDs and image URLs.";

#[derive(Clone)]
pub struct UnsplashServer {
    client: Client,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UnsplashServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search for Unsplash photos")]
    async fn search_photos(
        &self,
        Parameters(args): Parameters<SearchPhotosArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = tools::search_photos(&self.client, args, &context.ct)
            .await
            .map_err(|err| tool_error("search_photos", err))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get detailed information about a specific Unsplash photo")]
    async fn get_photo(
        &self,
        Parameters(args): Parameters<GetPhotoArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = tools::get_photo(&self.client, args, &context.ct)
            .await
            .map_err(|err| tool_error("get_photo", err))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get one or more random photos from Unsplash")]
    async fn random_photo(
        &self,
        Parameters(args): Parameters<RandomPhotoArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = tools::random_photo(&self.client, args, &context.ct)
            .await
            .map_err(|err| tool_error("random_photo", err))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for UnsplashServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Converts a handler failure into a protocol error naming the tool.
fn tool_error(tool: &str, err: unsplash::Error) -> McpError {
    tracing::warn!(tool, kind = err.kind(), error = %err, "tool call failed");

    let message = format!("{tool} failed: {err}");
    let mut data = json!({ "kind": err.kind() });

    match err {
        unsplash::Error::Validation { argument, .. } => {
            data["argument"] = argument.into();
            McpError::invalid_params(message, Some(data))
        }
        unsplash::Error::Upstream { status, body, .. } => {
            data["status"] = status.as_u16().into();
            data["body"] = body.into();
            McpError::internal_error(message, Some(data))
        }
        _ => McpError::internal_error(message, Some(data)),
    }
}
