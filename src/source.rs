//
// Emission of a packed bitmap as grlib C source.
//

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, log_enabled, trace, Level};

use crate::bitmap::PackedBitmap;
use crate::error::{Error, Result};

/// Write `bitmap` as a `tImage` named `<name>1BPP_UNCOMP`, backed by the
/// pixel array `pixel_<name>1BPP_UNCOMP`. `name` is not checked for being a
/// valid C identifier.
pub fn write_source<W: Write>(out: &mut W, name: &str, bitmap: &PackedBitmap) -> io::Result<()> {
    writeln!(out, "/* This file was automatically generated using image2grlib */")?;
    writeln!(out)?;
    writeln!(out, "#include \"grlib.h\"")?;
    writeln!(out, "#include \"../gfx.h\"")?;
    writeln!(out)?;
    writeln!(out, "static const unsigned char pixel_{}1BPP_UNCOMP[] =", name)?;
    writeln!(out, "{{")?;

    for row in &bitmap.rows {
        // No zero padding: 0x5, not 0x05.
        for byte in row {
            write!(out, "0x{:x}, ", byte)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "const tImage {}1BPP_UNCOMP=", name)?;
    writeln!(out, "{{")?;
    writeln!(out, "\tIMAGE_FMT_1BPP_UNCOMP,")?;
    writeln!(out, "\t{},", bitmap.width)?;
    writeln!(out, "\t{},", bitmap.height)?;
    writeln!(out, "\t2,")?;
    writeln!(out, "\tg_gfx_palette,")?;
    writeln!(out, "\tpixel_{}1BPP_UNCOMP,", name)?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    Ok(())
}

/// Path of the source file generated for `name`, relative to the working
/// directory.
pub fn source_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.c", name))
}

/// Create (or truncate) `path` and write the source for `bitmap` into it.
/// The file is flushed before this returns.
pub fn create_source_file(path: &Path, name: &str, bitmap: &PackedBitmap) -> Result<()> {
    debug!("create_source_file {}", path.display());
    if log_enabled!(Level::Trace) {
        for (y, row) in bitmap.rows.iter().enumerate() {
            trace!("row {:4}: {:02x?}", y, row);
        }
    }

    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_source(&mut out, name, bitmap).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(())
}
