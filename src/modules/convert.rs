use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use log::{info, warn};

use pal::Palette;
use shp::Shp;
use tmp::Tmp;

use crate::{config::AppConfig, err, utils::misc::lowercase_extension};

/// Batch palette retarget. Loads both palettes once, derives the index
/// mapping, then rewrites every named file in place, one at a time.
#[derive(Default)]
pub struct Convert {
    paths: Vec<PathBuf>,
    source_palette: Option<PathBuf>,
    target_palette: Option<PathBuf>,
}

impl Convert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&mut self, path: impl AsRef<Path> + Into<PathBuf>) -> &mut Self {
        self.paths.push(path.into());

        self
    }

    pub fn paths(&mut self, paths: &[PathBuf]) -> &mut Self {
        self.paths.extend(paths.iter().cloned());

        self
    }

    pub fn source_palette(&mut self, path: impl AsRef<Path> + Into<PathBuf>) -> &mut Self {
        self.source_palette = Some(path.into());

        self
    }

    pub fn target_palette(&mut self, path: impl AsRef<Path> + Into<PathBuf>) -> &mut Self {
        self.target_palette = Some(path.into());

        self
    }

    /// A palette that does not load aborts the whole run. A file that does
    /// not convert is only reported and the batch moves on.
    pub fn run(&self) -> eyre::Result<()> {
        let config = AppConfig::load();

        let source_path = self
            .source_palette
            .as_ref()
            .unwrap_or(&config.source_palette);
        let target_path = self
            .target_palette
            .as_ref()
            .unwrap_or(&config.target_palette);

        let source = match Palette::from_file(source_path) {
            Ok(palette) => palette,
            Err(err) => {
                return err!(
                    "Cannot load source palette `{}`: {}",
                    source_path.display(),
                    err
                )
            }
        };

        let target = match Palette::from_file(target_path) {
            Ok(palette) => palette,
            Err(err) => {
                return err!(
                    "Cannot load target palette `{}`: {}",
                    target_path.display(),
                    err
                )
            }
        };

        let table = source.remap_table(&target);

        let start = Instant::now();

        for path in &self.paths {
            if let Err(err) = convert_file(path, &table) {
                warn!("Cannot convert `{}`: {}", path.display(), err);
            }
        }

        info!("All conversions for loaded files complete.");
        info!("Time elapsed: {:?}", start.elapsed());

        Ok(())
    }
}

fn convert_file(path: &Path, table: &[u8]) -> eyre::Result<()> {
    match lowercase_extension(path).as_deref() {
        Some("tmp") => {
            let mut tmp = Tmp::from_file(path)?;

            tmp.remap_colors(table)?;
            tmp.write_to_file(path)?;
        }
        Some("shp") => {
            let mut shp = Shp::from_file(path)?;

            shp.remap_colors(table)?;
            shp.write_to_file(path)?;
        }
        _ => return err!("not a .tmp or .shp file"),
    }

    Ok(())
}
