//! Custom protocol handlers for efficient data transfer
//!
//! This module implements the `frame://` custom protocol for direct binary
//! transfer of render frames, bypassing Tauri's IPC JSON serialization.

use bevy::log::{debug, error};
use image::{codecs::jpeg::JpegEncoder, ImageBuffer, ImageEncoder, Rgba};
use serde::Serialize;
use tauri::http::{header, HeaderValue, Response as HttpResponse, StatusCode};

use crate::config::compression::JPEG_QUALITY;
use super::shared_state::{Frame, SharedFrameBuffer, SharedPerfStats};

type Response = HttpResponse<Vec<u8>>;

/// Handle requests to the custom `frame://` protocol
///
/// Supported endpoints:
/// - `frame` or `frame.jpg`: JPEG-compressed frame (~50-100KB)
/// - `frame.raw`: Raw RGBA frame (~1.8MB)
/// - `stats`: Performance statistics as JSON
pub fn handle_frame_protocol(
    uri_path: &str,
    buffer: &SharedFrameBuffer,
    perf_stats: &SharedPerfStats,
) -> Response {
    let resource = uri_path.trim_start_matches('/');

    debug!("[Protocol] Resolved resource: {}", resource);

    match resource {
        "frame" | "frame.jpg" => with_frame(buffer, jpeg_frame),
        "frame.raw" => with_frame(buffer, raw_frame),
        "stats" => handle_stats(perf_stats),
        _ => text(StatusCode::NOT_FOUND, "Not Found"),
    }
}

fn text(status: StatusCode, body: &str) -> Response {
    respond(status, "text/plain", body.as_bytes().to_vec())
}

fn respond(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Response {
    let mut response = HttpResponse::new(body);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Attach the frame size headers the canvas uses to size itself
fn with_size(mut response: Response, frame: &Frame) -> Response {
    let headers = response.headers_mut();
    headers.insert("x-frame-width", HeaderValue::from(frame.width));
    headers.insert("x-frame-height", HeaderValue::from(frame.height));
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("X-Frame-Width, X-Frame-Height"),
    );
    response
}

fn with_frame(buffer: &SharedFrameBuffer, encode: fn(&Frame) -> Response) -> Response {
    let guard = match buffer.0.lock() {
        Ok(guard) => guard,
        Err(_) => return text(StatusCode::INTERNAL_SERVER_ERROR, "Frame buffer unavailable"),
    };
    match &*guard {
        Some(frame) => encode(frame),
        None => text(StatusCode::SERVICE_UNAVAILABLE, "Frame not ready"),
    }
}

/// Compress RGBA to JPEG - reduces ~1.8MB to ~50-100KB
fn jpeg_frame(frame: &Frame) -> Response {
    let Some(img) =
        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(frame.width, frame.height, frame.rgba.clone())
    else {
        error!(
            "[Protocol] Frame data does not match {}x{}",
            frame.width, frame.height
        );
        return text(StatusCode::INTERNAL_SERVER_ERROR, "Malformed frame");
    };

    // JPEG has no alpha channel
    let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let mut jpeg_data = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY);
    if let Err(e) = encoder.write_image(
        rgb_img.as_raw(),
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgb8,
    ) {
        error!("[Protocol] JPEG encoding failed: {}", e);
        return text(StatusCode::INTERNAL_SERVER_ERROR, "Encoding failed");
    }

    with_size(respond(StatusCode::OK, "image/jpeg", jpeg_data), frame)
}

fn raw_frame(frame: &Frame) -> Response {
    with_size(
        respond(
            StatusCode::OK,
            "application/octet-stream",
            frame.rgba.clone(),
        ),
        frame,
    )
}

fn handle_stats(perf_stats: &SharedPerfStats) -> Response {
    match perf_stats.0.lock() {
        Ok(stats) => json(&*stats),
        Err(_) => text(StatusCode::INTERNAL_SERVER_ERROR, "Stats unavailable"),
    }
}

fn json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => respond(StatusCode::OK, "application/json", body),
        Err(e) => {
            error!("[Protocol] JSON encoding failed: {}", e);
            text(StatusCode::INTERNAL_SERVER_ERROR, "Encoding failed")
        }
    }
}
