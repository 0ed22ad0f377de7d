//! Asynchronous claims dataset loading.
//!
//! Parses dataset files in a background thread, keeping the GUI responsive.
//! Results come back through a channel polled once per frame.

use claimline::Dataset;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed dataset loading operation.
pub enum DatasetLoadResult {
    /// Loading completed successfully
    Success {
        dataset: Dataset,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of dataset files.
pub struct AsyncDatasetLoader {
    /// Shared loading flag
    in_progress: Arc<Mutex<bool>>,
    /// Channel receiver for loading results
    receiver: Option<Receiver<Result<Dataset, String>>>,
    /// Path of the file currently being loaded
    pending_path: Option<PathBuf>,
}

impl AsyncDatasetLoader {
    /// Creates a new loader with no active operation.
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(Mutex::new(false)),
            receiver: None,
            pending_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        *self.in_progress.lock().unwrap()
    }

    /// Starts loading a dataset file in a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        *self.in_progress.lock().unwrap() = true;
        self.pending_path = Some(path.clone());

        let in_progress = Arc::clone(&self.in_progress);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = Dataset::load_file(&path).map_err(|e| format!("{e:#}"));
            let _ = sender.send(result);

            *in_progress.lock().unwrap() = false;

            // Wake the GUI thread so it polls the channel promptly
            ctx_handle.request_repaint();
        });
    }

    /// Checks whether background loading has completed.
    pub fn check_completion(&mut self) -> DatasetLoadResult {
        if let Some(receiver) = &self.receiver {
            if let Ok(result) = receiver.try_recv() {
                self.receiver = None;
                return match result {
                    Ok(dataset) => match self.pending_path.take() {
                        Some(path) => DatasetLoadResult::Success { dataset, path },
                        None => DatasetLoadResult::Error("Load finished with no path".to_string()),
                    },
                    Err(error_msg) => {
                        self.pending_path = None;
                        DatasetLoadResult::Error(error_msg)
                    }
                };
            }
        }

        DatasetLoadResult::None
    }
}

impl Default for AsyncDatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_creation() {
        let loader = AsyncDatasetLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncDatasetLoader::new();
        assert!(matches!(loader.check_completion(), DatasetLoadResult::None));
    }
}
