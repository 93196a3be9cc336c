use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::skin_analysis::use_cases::get_latest::{
    GetLatestAnalysisParams, GetLatestAnalysisUseCase,
};
use business::domain::skin_analysis::use_cases::get_results::{
    GetAnalysisResultsParams, GetAnalysisResultsUseCase,
};
use business::domain::skin_analysis::use_cases::list::{
    DEFAULT_PAGE_SIZE, ListAnalysesParams, ListAnalysesUseCase,
};
use business::domain::skin_analysis::use_cases::upload::{
    UploadAnalysisImageParams, UploadAnalysisImageUseCase,
};

use crate::api::analysis::dto::{
    AnalysisRecordResponse, AnalysisResultsResponse, AnalysisUploadRequest,
    AnalysisUploadResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct AnalysisApi {
    upload_use_case: Arc<dyn UploadAnalysisImageUseCase>,
    get_results_use_case: Arc<dyn GetAnalysisResultsUseCase>,
    list_use_case: Arc<dyn ListAnalysesUseCase>,
    get_latest_use_case: Arc<dyn GetLatestAnalysisUseCase>,
}

impl AnalysisApi {
    pub fn new(
        upload_use_case: Arc<dyn UploadAnalysisImageUseCase>,
        get_results_use_case: Arc<dyn GetAnalysisResultsUseCase>,
        list_use_case: Arc<dyn ListAnalysesUseCase>,
        get_latest_use_case: Arc<dyn GetLatestAnalysisUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            get_results_use_case,
            list_use_case,
            get_latest_use_case,
        }
    }
}

/// Skin analysis API
///
/// Images are analysed asynchronously by Haut.ai. Upload first, then poll results.
#[OpenApi]
impl AnalysisApi {
    /// Upload a face image for analysis
    #[oai(path = "/analysis/upload", method = "post", tag = "ApiTags::Analysis")]
    async fn upload(
        &self,
        auth: FirebaseBearer,
        body: Json<AnalysisUploadRequest>,
    ) -> UploadResponse {
        let params = UploadAnalysisImageParams {
            user_id: auth.0,
            image_base64: body.0.image_base64,
            side_id: body.0.side_id,
            light_id: body.0.light_id,
        };

        match self.upload_use_case.execute(params).await {
            Ok(upload) => UploadResponse::Created(Json(upload.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadResponse::BadRequest(json),
                    502 => UploadResponse::BadGateway(json),
                    _ => UploadResponse::InternalError(json),
                }
            }
        }
    }

    /// Fetch analysis results for an uploaded image
    #[oai(
        path = "/analysis/results/:image_id",
        method = "get",
        tag = "ApiTags::Analysis"
    )]
    async fn get_results(
        &self,
        auth: FirebaseBearer,
        image_id: Path<String>,
        subject_id: Query<String>,
        batch_id: Query<String>,
    ) -> ResultsResponse {
        let params = GetAnalysisResultsParams {
            user_id: auth.0,
            image_id: image_id.0,
            subject_id: subject_id.0,
            batch_id: batch_id.0,
        };

        match self.get_results_use_case.execute(params).await {
            Ok(results) => ResultsResponse::Ok(Json(results.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResultsResponse::NotFound(json),
                    502 => ResultsResponse::BadGateway(json),
                    _ => ResultsResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's analyses, newest first
    #[oai(path = "/analysis/history", method = "get", tag = "ApiTags::Analysis")]
    async fn history(
        &self,
        auth: FirebaseBearer,
        skip: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> HistoryResponse {
        let params = ListAnalysesParams {
            user_id: auth.0,
            skip: skip.0.unwrap_or(0),
            limit: limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
        };

        match self.list_use_case.execute(params).await {
            Ok(analyses) => {
                HistoryResponse::Ok(Json(analyses.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                HistoryResponse::InternalError(json)
            }
        }
    }

    /// Most recent completed analysis
    #[oai(path = "/analysis/latest", method = "get", tag = "ApiTags::Analysis")]
    async fn latest(&self, auth: FirebaseBearer) -> LatestResponse {
        match self
            .get_latest_use_case
            .execute(GetLatestAnalysisParams { user_id: auth.0 })
            .await
        {
            Ok(analysis) => LatestResponse::Ok(Json(analysis.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => LatestResponse::NotFound(json),
                    _ => LatestResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadResponse {
    #[oai(status = 201)]
    Created(Json<AnalysisUploadResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResultsResponse {
    #[oai(status = 200)]
    Ok(Json<AnalysisResultsResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum HistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AnalysisRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LatestResponse {
    #[oai(status = 200)]
    Ok(Json<AnalysisRecordResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
