//! HTTP surface: JSON endpoints over a shared `Studio`

use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::Error;
use crate::request::{
  AnalysisRequest, AnalysisResponse, ErrorResponse, GenerationRequest,
};
use crate::studio::Studio;
use crate::{Axis, Length, LiteratureType, Mood, Provider, Style};

pub const SERVICE_NAME: &str = "sastra";

pub const GENERATION_FAILED_MESSAGE: &str = "Terjadi kesalahan saat menghasilkan karya. Silakan coba lagi.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Terjadi kesalahan saat menganalisis karya";
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan internal pada server";

type SharedStudio = Arc<Studio>;

#[derive(Debug, Serialize)]
struct Health
{   status: &'static str
  , service: &'static str
  , providers: Vec<Provider>
  , timestamp: DateTime<Utc>
}

#[derive(Debug, Serialize)]
struct AxisOption
{   value: &'static str
  , label: &'static str
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Options
{   literature_types: Vec<AxisOption>
  , styles: Vec<AxisOption>
  , moods: Vec<AxisOption>
  , lengths: Vec<AxisOption>
}

fn axis_options<A: Axis>() -> Vec<AxisOption>
{   A::ALL
      .iter()
      .map(|v| AxisOption
      {   value: v.slug()
        , label: v.display_name()
      })
      .collect()
}

/// Bodies are decoded by hand so malformed JSON is reported through
/// the same envelope as every other server-side failure.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, Error>
{   serde_json::from_slice(body)
      .map_err(|e| Error::RequestBody(e.to_string()))
}

fn failure(err: &Error, generic: &str) -> Response
{   if err.is_validation()
    {   warn!("Rejected request: {}", err);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
          .into_response()
    }
    else
    {   error!("Request failed: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(generic)))
          .into_response()
    }
}

async fn generate(
  State(studio): State<SharedStudio>
, body: Bytes
) -> Response
{   info!("POST /generate ({} bytes)", body.len());
    let result = match decode::<GenerationRequest>(&body)
    {   Ok(request) => studio.generate(request).await
      , Err(e) => Err(e)
    };
    match result
    {   Ok(response) => Json(response).into_response()
      , Err(e) => failure(&e, GENERATION_FAILED_MESSAGE)
    }
}

async fn analyze(
  State(studio): State<SharedStudio>
, body: Bytes
) -> Response
{   info!("POST /analyze ({} bytes)", body.len());
    let result = match decode::<AnalysisRequest>(&body)
    {   Ok(request) => studio.analyze(request).await
      , Err(e) => Err(e)
    };
    match result
    {   Ok(analysis) => Json(AnalysisResponse
        {   success: true
          , analysis
        }).into_response()
      , Err(e) => failure(&e, ANALYSIS_FAILED_MESSAGE)
    }
}

async fn health(State(studio): State<SharedStudio>) -> Json<Health>
{   Json(Health
    {   status: "ok"
      , service: SERVICE_NAME
      , providers: studio.gateway().configured()
      , timestamp: Utc::now()
    })
}

async fn options() -> Json<Options>
{   Json(Options
    {   literature_types: axis_options::<LiteratureType>()
      , styles: axis_options::<Style>()
      , moods: axis_options::<Mood>()
      , lengths: axis_options::<Length>()
    })
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response
{   let detail = panic
      .downcast_ref::<String>()
      .map(String::as_str)
      .or_else(|| panic.downcast_ref::<&str>().copied())
      .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    ).into_response()
}

/// Build the application router.
pub fn router(studio: Studio) -> Router
{   Router::new()
      .route("/generate", post(generate))
      .route("/analyze", post(analyze))
      .route("/health", get(health))
      .route("/options", get(options))
      .with_state(Arc::new(studio))
      .layer(CatchPanicLayer::custom(handle_panic))
      .layer(CorsLayer::permissive())
}
