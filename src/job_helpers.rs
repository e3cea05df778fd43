use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use gamut::RgbColor;
use job_queue::{JobQueue, JobResult};

use crate::render::{render_swatch, write_ppm};

/// Renders a swatch fill on the job queue and writes it to `path` as a
/// PPM file.
///
/// The result yields the written path once the job is done.  Sizes
/// whose pixel count is too large to render are reported as
/// `InvalidInput` errors.
pub fn render_swatch_to_file(
    queue: &JobQueue,
    color: RgbColor,
    size: (usize, usize),
    path: PathBuf,
) -> JobResult<std::io::Result<PathBuf>> {
    queue.add_job("Render Swatch", move |status| {
        status
            .lock()
            .unwrap()
            .set_progress("Rendering swatch".into(), 0.0);
        let image = match render_swatch(&color, size.0, size.1) {
            Some(image) => image,
            None => {
                let message = format!("Swatch size {}x{} is too large", size.0, size.1);
                status.lock().unwrap().log_error(message.clone());
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    message,
                ));
            }
        };

        status
            .lock()
            .unwrap()
            .set_progress("Writing swatch".into(), 0.5);
        let result = (|| {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    ensure_dir_exists(dir)?;
                }
            }
            let mut out = BufWriter::new(File::create(&path)?);
            write_ppm(&mut out, &image)?;
            out.flush()
        })();

        match result {
            Ok(()) => {
                status.lock().unwrap().log_note(format!(
                    "Wrote {}x{} {} swatch to \"{}\"",
                    size.0,
                    size.1,
                    color.gamut,
                    path.display()
                ));
                Ok(path)
            }
            Err(e) => {
                status.lock().unwrap().log_error(format!(
                    "Failed to write swatch to \"{}\": {}",
                    path.display(),
                    e
                ));
                Err(e)
            }
        }
    })
}

/// Ensures that a directory path exists and that we have permission to
/// write to it.  If it doesn't exists, this will attempt to create it.
///
/// Will return an error if:
/// - The path exists, but is not a directory.
/// - The path exists, but we don't have permission to write to it.
/// - The path doesn't exist, and we are unable to create it.
pub fn ensure_dir_exists<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let path: &Path = path.as_ref();

    if !path.exists() {
        std::fs::create_dir_all(path)?;
    } else {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Specified path is not a directory",
            ));
        }
        if metadata.permissions().readonly() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Specified path is read only",
            ));
        }
    }
    Ok(())
}
