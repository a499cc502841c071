//! Writing exported drawings to disk.

use std::io::Write;

#[derive(thiserror::Error, Debug)]
#[error("failed to write {path:?}")]
pub struct SaveError {
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Give `path` an `.svg` extension if it has none. An existing extension is left as the user chose it.
#[must_use]
pub fn with_svg_extension(mut path: std::path::PathBuf) -> std::path::PathBuf {
    if path.extension().is_none() {
        path.set_extension("svg");
    }
    path
}

/// Write `document` to `path`, creating or truncating it.
pub fn save_svg(path: &std::path::Path, document: &str) -> Result<(), SaveError> {
    let wrap = |source| SaveError {
        path: path.to_owned(),
        source,
    };
    let file = std::fs::File::create(path).map_err(wrap)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(document.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    log::info!("Saved {} bytes to {path:?}", document.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{save_svg, with_svg_extension};

    #[test]
    fn writes_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawing.svg");
        let canvas = {
            let mut canvas = scribble_core::Canvas::default();
            let _ = canvas.pointer_down([1.0, 2.0]);
            let _ = canvas.pointer_move([3.0, 4.0]);
            let _ = canvas.pointer_up([3.0, 4.0]);
            canvas
        };
        let document = canvas.export_svg();

        save_svg(&path, &document).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document);

        // Overwrites rather than appends.
        save_svg(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }
    #[test]
    fn missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("drawing.svg");
        let err = save_svg(&path, "").unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }
    #[test]
    fn extension_added_only_when_absent() {
        assert_eq!(
            with_svg_extension("a/drawing".into()),
            std::path::PathBuf::from("a/drawing.svg")
        );
        assert_eq!(
            with_svg_extension("drawing.xml".into()),
            std::path::PathBuf::from("drawing.xml")
        );
    }
}
