use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::composer::{RenderInput, TemplateComposer};
use crate::layout::tree::RenderTree;
use crate::models::resume::ResumeDocument;
use crate::models::template::TemplateDescriptor;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub document: ResumeDocument,
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(Serialize)]
pub struct IconListResponse {
    pub icons: Vec<&'static str>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.templates.list().into_iter().cloned().collect(),
    })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDescriptor>, AppError> {
    state
        .templates
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}

/// GET /api/v1/icons
pub async fn handle_list_icons(State(state): State<AppState>) -> Json<IconListResponse> {
    Json(IconListResponse {
        icons: state.icons.accepted_names(),
    })
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderTree>, AppError> {
    let template_id = req.template_id.trim();
    if template_id.is_empty() {
        return Err(AppError::Validation("templateId must not be blank".to_string()));
    }
    let template = state
        .templates
        .get(template_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))?;

    let locale = req
        .locale
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| state.config.default_locale.clone());
    let document = req.document;
    let icons = Arc::clone(&state.icons);
    let formatter = Arc::clone(&state.formatter);

    let tree = tokio::task::spawn_blocking(move || {
        TemplateComposer::for_layout(template.layout).compose(&RenderInput {
            document: &document,
            template: &template,
            locale: &locale,
            formatter: formatter.as_ref(),
            icons: icons.as_ref(),
        })
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?;

    info!(
        template = %tree.template_id,
        locale = %tree.locale,
        sections = tree.placed_section_ids().len(),
        "Rendered resume"
    );

    Ok(Json(tree))
}
