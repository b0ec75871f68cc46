use crate::*;
use ::image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info};

/// Format every diff and reconstructed frame is written in.
pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

/// Opens and decodes an image, sniffing its format from the content rather
/// than from the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| DifferError::file_access(path, err))?;

    let format = reader.format();

    let image = reader.decode().map_err(|source| DifferError::Decode {
        path: path.to_owned(),
        source,
    })?;

    match format {
        Some(format) => info!("Loaded image {} (format: {:?})", path.display(), format),
        None => info!("Loaded image {}", path.display()),
    }

    Ok(image)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| DifferError::file_access(path, err))?;
    let mut writer = BufWriter::new(file);

    image
        .write_to(&mut writer, OUTPUT_FORMAT)
        .map_err(|source| DifferError::Encode {
            path: path.to_owned(),
            source,
        })?;

    writer
        .flush()
        .map_err(|err| DifferError::file_access(path, err))?;

    debug!("Encoded {} as {:?}", path.display(), OUTPUT_FORMAT);

    Ok(())
}

/// Byte-for-byte copy; keeps the original format and metadata intact.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut reader = File::open(src).map_err(|err| DifferError::file_access(src, err))?;
    let mut writer = File::create(dst).map_err(|err| DifferError::file_access(dst, err))?;

    let bytes = std::io::copy(&mut reader, &mut writer)
        .and_then(|bytes| writer.sync_all().map(|_| bytes))
        .map_err(|err| DifferError::file_access(dst, err))?;

    Ok(bytes)
}
