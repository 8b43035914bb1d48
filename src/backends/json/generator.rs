use serde::ser::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};
use std::{fs::File, io::Write, path::Path};

use crate::{error::TraceError, reduce::TraceSnapshot};

/// This is the main struct of the [`json`](crate::backends::json) backend
/// that writes trace snapshots as pretty-printed JSON.
pub struct JsonGenerator {}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Serialize `snapshot` into the file at `path`.
    pub fn generate<P: AsRef<Path>>(
        &self,
        path: P,
        snapshot: &TraceSnapshot<'_>,
    ) -> Result<(), TraceError> {
        let path = path.as_ref();

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        snapshot
            .serialize(&mut ser)
            .map_err(|err| TraceError::new(path, err.into()))?;

        let mut file = File::create(path).map_err(|err| TraceError::new(path, err))?;
        file.write_all(&buf).map_err(|err| TraceError::new(path, err))
    }
}
