//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! STDIO and TCP transports dispatch through rmcp's `#[tool_handler]`, which
//! needs a `ToolRouter`. Each adapter becomes one dynamic route.

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use serde_json::Value;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .tools()
        .iter()
        .fold(ToolRouter::new(), |router, adapter| {
            let tool = adapter.clone();
            router.with_route(ToolRoute::new_dyn(
                adapter.to_tool(),
                move |ctx: ToolCallContext<'_, S>| {
                    let arguments = Value::Object(ctx.arguments.clone().unwrap_or_default());
                    let tool = tool.clone();
                    async move { Ok(tool.invoke(&arguments).await.into_call_result()) }.boxed()
                },
            ))
        })
}
