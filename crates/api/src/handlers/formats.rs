//! Handler for the supported-format catalog.

use axum::Json;

use morph_core::formats::{all_formats, FormatCategory};

use crate::response::{FormatCatalogResponse, FormatCategoryBody};

/// GET /formats
///
/// The catalog clients build their target-format dropdown from: one
/// entry per category plus a flat list of every extension. Static data
/// straight from `morph-core`, so client and server always agree on
/// what is convertible.
pub async fn catalog() -> Json<FormatCatalogResponse> {
    let categories = FormatCategory::ALL
        .into_iter()
        .map(|category| FormatCategoryBody {
            id: category,
            label: category.label(),
            extensions: category.extensions(),
        })
        .collect();

    Json(FormatCatalogResponse {
        success: true,
        categories,
        formats: all_formats(),
    })
}
