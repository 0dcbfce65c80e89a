use actix_web::{get, post, put, web, HttpResponse};
use domain_request::model::vo::RequestDraft;

use super::dtos::{SuccessResponse, UpdateStatusDto};
use super::ApiResult;
use crate::infrastructure::ServiceProvider;

#[get("/requests")]
pub async fn list(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    let records = sp.request_record_service().list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[post("/requests")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    draft: web::Json<RequestDraft>,
) -> ApiResult<HttpResponse> {
    let record = sp.request_record_service().create(draft.into_inner()).await?;
    Ok(HttpResponse::Created().json(SuccessResponse::new(record)))
}

#[get("/requests/stats")]
pub async fn stats(sp: web::Data<ServiceProvider>) -> ApiResult<HttpResponse> {
    let stats = sp.request_record_service().stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[put("/requests/{employee_id}")]
pub async fn update_status(
    sp: web::Data<ServiceProvider>,
    employee_id: web::Path<String>,
    dto: web::Json<UpdateStatusDto>,
) -> ApiResult<HttpResponse> {
    let record = sp
        .request_record_service()
        .update_status(&employee_id, dto.into_inner().status)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::new(record)))
}
