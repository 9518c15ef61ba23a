//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Next**: ادامه زنجیره middleware
//! - `axum::middleware::from_fn`: تبدیل async fn به layer

use axum::{
    body::Body,
    http::{
        header::{self, HeaderValue},
        Request,
    },
    middleware::Next,
    response::IntoResponse,
};

use super::extractors::RequestId;

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن Request ID به هر request و response
///
/// اگه کلاینت خودش `X-Request-Id` فرستاده باشه همون استفاده میشه.
pub async fn request_id(mut request: Request<Body>, next: Next) -> impl IntoResponse {
    let existing = request
        .headers()
        .get(RequestId::HEADER_NAME)
        .filter(|v| v.to_str().is_ok())
        .cloned();

    let request_id = match existing {
        Some(value) => value,
        None => {
            // nanoid فقط کاراکترهای URL-safe تولید میکنه
            let generated = HeaderValue::from_str(&nanoid::nanoid!(12))
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            request
                .headers_mut()
                .insert(RequestId::HEADER_NAME, generated.clone());
            generated
        }
    };

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(RequestId::HEADER_NAME, request_id);

    response
}

// =====================================
// Security Headers Middleware
// =====================================
/// اضافه کردن header‌های امنیتی
pub async fn security_headers(request: Request<Body>, next: Next) -> impl IntoResponse {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // جلوگیری از MIME sniffing
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // جلوگیری از clickjacking
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
