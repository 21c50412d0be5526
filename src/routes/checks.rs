use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::DetectionSettings;
use crate::core::{distance, format_alert, normalize, normalized_similarity, CheckError, DuplicateDetector};
use crate::models::{
    Decision, DuplicateCheckRequest, DuplicateCheckResponse, ErrorResponse, HealthResponse,
    SimilarityRequest, SimilarityResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub detector: DuplicateDetector,
    pub strict_by_default: bool,
    pub max_candidates: usize,
}

impl AppState {
    /// State with the default request limits
    pub fn new(detector: DuplicateDetector) -> Self {
        Self::with_settings(detector, &DetectionSettings::default())
    }

    pub fn with_settings(detector: DuplicateDetector, detection: &DetectionSettings) -> Self {
        Self {
            detector,
            strict_by_default: detection.strict_by_default,
            max_candidates: detection.max_candidates,
        }
    }
}

/// Configure all duplicate-check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events/duplicate-check", web::post().to(check_duplicates))
        .route("/events/similarity", web::post().to(score_titles));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        thresholds: state.detector.thresholds(),
    })
}

/// Duplicate check endpoint
///
/// POST /api/v1/events/duplicate-check
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "candidates": [{ "eventId": "string", "title": "string" }],
///   "strict": false
/// }
/// ```
async fn check_duplicates(
    state: web::Data<AppState>,
    req: web::Json<DuplicateCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for duplicate check request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.candidates.len() > state.max_candidates {
        tracing::info!(
            "Rejecting duplicate check with {} candidates (max {})",
            req.candidates.len(),
            state.max_candidates
        );
        return bad_request(
            "Validation failed",
            format!("at most {} candidates are allowed", state.max_candidates),
        );
    }

    let DuplicateCheckRequest { title, candidates, strict } = req.into_inner();
    let strict = strict.unwrap_or(state.strict_by_default);
    let candidate_count = candidates.len();

    let result = match state.detector.check(&title, candidates, strict) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Duplicate check rejected for {:?}: {}", title, e);
            return invalid_argument(&e);
        }
    };

    let alert = format_alert(&result.matches);
    let decision = Decision::from_result(&result);

    let response = DuplicateCheckResponse {
        check_id: uuid::Uuid::new_v4().to_string(),
        checked_at: chrono::Utc::now(),
        result,
        alert,
        decision: decision.into(),
    };

    tracing::info!(
        "Duplicate check {}: assessment={}, decision={:?}, {} matches from {} candidates (strict={})",
        response.check_id,
        response.result.assessment,
        decision,
        response.result.matches.len(),
        candidate_count,
        strict
    );

    HttpResponse::Ok().json(response)
}

/// Pairwise similarity endpoint
///
/// POST /api/v1/events/similarity
///
/// Request body:
/// ```json
/// { "a": "string", "b": "string" }
/// ```
async fn score_titles(
    state: web::Data<AppState>,
    req: web::Json<SimilarityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let normalized_a = normalize(&req.a);
    let normalized_b = normalize(&req.b);
    let similarity = normalized_similarity(&normalized_a, &normalized_b);

    tracing::debug!("Similarity {:?} vs {:?} = {:.4}", normalized_a, normalized_b, similarity);

    HttpResponse::Ok().json(SimilarityResponse {
        distance: distance(&normalized_a, &normalized_b),
        assessment: state.detector.classify(similarity),
        normalized_a,
        normalized_b,
        similarity,
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_argument(err: &CheckError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "invalid_argument".to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}
