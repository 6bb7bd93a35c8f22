//! Frame extraction system
//!
//! This module handles picking up frames read back from the GPU and
//! preparing them for transfer to the Tauri frontend.

use bevy::{
    log::{debug, info},
    prelude::*,
    render::renderer::RenderDevice,
    time::Time,
};

use crate::bevy::resources::{
    CopiedFrame, ExtractedFrames, FrameBufferRes, FrameRateLimiter, FrameTimings,
    MainWorldReceiver, PerfStatsRes, PreRollFrames,
};
use crate::config::performance::*;
use crate::tauri_bridge::shared_state::Frame;

/// Extract and process frame data from the render pipeline
pub fn extract_and_process_frame(
    receiver: Res<MainWorldReceiver>,
    buffer: Option<Res<FrameBufferRes>>,
    perf_stats: Option<Res<PerfStatsRes>>,
    mut count: ResMut<ExtractedFrames>,
    mut pre_roll: ResMut<PreRollFrames>,
    mut timings: ResMut<FrameTimings>,
    mut frame_limiter: ResMut<FrameRateLimiter>,
    time: Res<Time>,
) {
    let Some(b) = buffer else { return };

    // Wait for scene to be fully rendered
    if pre_roll.0 > 0 {
        while receiver.try_recv().is_ok() {}
        pre_roll.0 -= 1;
        if pre_roll.0 % 10 == 0 && pre_roll.0 > 0 {
            debug!("[Bevy] Pre-roll frames remaining: {}", pre_roll.0);
        }
        return;
    }

    // Frame rate limiting - skip if not enough time has passed
    let now = std::time::Instant::now();
    let elapsed = now.duration_since(frame_limiter.last_frame_time);
    if elapsed < frame_limiter.min_frame_interval {
        while receiver.try_recv().is_ok() {}
        return;
    }
    frame_limiter.last_frame_time = now;

    let frame_start = std::time::Instant::now();

    // Keep only the newest frame from the render world
    let receive_start = std::time::Instant::now();
    let mut latest: Option<CopiedFrame> = None;
    while let Ok(copied) = receiver.try_recv() {
        latest = Some(copied);
    }
    let receive_time = receive_start.elapsed().as_secs_f64() * 1000.0;

    let Some(copied) = latest else { return };

    let process_start = std::time::Instant::now();
    let Some(rgba) = remove_row_padding(&copied.data, copied.width, copied.height) else {
        return;
    };
    let process_time = process_start.elapsed().as_secs_f64() * 1000.0;
    let data_size = rgba.len();

    let Ok(mut guard) = b.0 .0.lock() else { return };
    *guard = Some(Frame {
        rgba,
        width: copied.width,
        height: copied.height,
    });
    drop(guard);
    count.0 += 1;
    if count.0 == 1 {
        info!(
            "[Bevy] First frame ready ({}x{})",
            copied.width, copied.height
        );
    }

    let total_time = frame_start.elapsed().as_secs_f64() * 1000.0;
    timings.frame_times.push(total_time);

    // Keep only last N samples for averaging
    if timings.frame_times.len() > FRAME_TIMING_SAMPLES {
        timings.frame_times.remove(0);
    }
    let avg_time = timings.frame_times.iter().sum::<f64>() / timings.frame_times.len() as f64;

    if let Some(perf_res) = &perf_stats {
        if let Ok(mut stats) = perf_res.0 .0.lock() {
            stats.gpu_transfer_ms = receive_time;
            stats.data_processing_ms = process_time;
            stats.frame_encoding_ms = total_time;
            stats.frame_count = count.0;
            stats.data_size_kb = data_size as f64 / 1024.0;
            stats.bevy_fps = if avg_time > 0.0 {
                1000.0 / avg_time
            } else {
                0.0
            };
        }
    }

    // Print detailed stats periodically
    let current_time = time.elapsed_secs_f64();
    if current_time - timings.last_print_time >= STATS_PRINT_INTERVAL {
        let max_time = timings.frame_times.iter().cloned().fold(0.0f64, f64::max);
        let min_time = timings.frame_times.iter().cloned().fold(f64::MAX, f64::min);

        debug!(
            "[Bevy] Frame {} ({}x{}) | Receive: {:.2}ms | Process: {:.2}ms | Total: {:.2}ms | Avg: {:.2}ms (Min: {:.2}ms, Max: {:.2}ms) | Size: {:.1}KB",
            count.0,
            copied.width,
            copied.height,
            receive_time,
            process_time,
            total_time,
            avg_time,
            min_time,
            max_time,
            data_size as f64 / 1024.0
        );
        timings.last_print_time = current_time;
    }
}

/// Remove GPU buffer row padding alignment, returning tightly packed RGBA
/// data for a `width` x `height` frame. `None` when the data is too short.
pub fn remove_row_padding(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let row_bytes = width as usize * 4;
    let aligned_row_bytes = RenderDevice::align_copy_bytes_per_row(row_bytes);
    let rows = height as usize;

    if row_bytes == 0 || rows == 0 || data.len() < aligned_row_bytes * (rows - 1) + row_bytes {
        return None;
    }

    if row_bytes == aligned_row_bytes {
        return Some(data[..row_bytes * rows].to_vec());
    }

    Some(
        data.chunks(aligned_row_bytes)
            .take(rows)
            .flat_map(|row| &row[..row_bytes])
            .copied()
            .collect(),
    )
}
