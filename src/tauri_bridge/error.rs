//! Errors returned to the webview by Tauri commands

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::cube::MoveError;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("shared state lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("render thread is not running")]
    RenderThreadStopped,
    #[error("no frame yet (scene still loading)")]
    FrameNotReady,
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
}

impl<T> From<std::sync::PoisonError<T>> for BridgeError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        BridgeError::LockPoisoned(err.to_string())
    }
}

// Tauri hands command errors to the frontend as JSON; send the message.
impl Serialize for BridgeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_message() {
        let err = BridgeError::InvalidViewport {
            width: 0,
            height: 10,
        };
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#""invalid viewport size 0x10""#
        );
    }

    #[test]
    fn wraps_move_errors() {
        let err: BridgeError = MoveError::LayerOutOfRange(3).into();
        assert_eq!(err.to_string(), "layer index 3 is outside -1..=1");
    }
}
